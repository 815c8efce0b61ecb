use crate::symbols::{Symbol, SymbolTable};

#[test]
fn test_literal_digits_pass_through() {
    let mut table = SymbolTable::new();
    assert_eq!(table.get('7'), Symbol::Literal(7));
    assert_eq!(table.get('0'), Symbol::Literal(0));
    assert!(table.is_empty());
}

#[test]
fn test_same_letter_shares_one_slot() {
    let mut table = SymbolTable::new();
    let first = table.get('A');
    let other = table.get('B');
    let again = table.get('A');

    assert_eq!(first, again);
    assert_ne!(first, other);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_letters_are_case_sensitive() {
    let mut table = SymbolTable::new();
    assert_ne!(table.get('a'), table.get('A'));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_slots_in_first_appearance_order() {
    let mut table = SymbolTable::new();
    for c in "УДАРУДАРДРАКА".chars() {
        table.get(c);
    }
    let order: String = table.slots().iter().map(|s| s.symbol()).collect();
    assert_eq!(order, "УДАРК");
}

#[test]
fn test_assignment_is_shared() {
    let mut table = SymbolTable::new();
    let symbol = table.get('X');
    let Symbol::Slot(id) = symbol else {
        panic!("expected a slot for a letter");
    };

    if let Some(slot) = table.slot_mut(id) {
        slot.assign(4);
    }
    let again = table.get('X');
    assert_eq!(table.digit_of(again), Some(4));

    table.clear_digits();
    assert_eq!(table.digit_of(symbol), None);
}

#[test]
fn test_non_ascii_digits_are_letters() {
    let mut table = SymbolTable::new();
    assert!(matches!(table.get('٣'), Symbol::Slot(_)));
    assert_eq!(table.len(), 1);
}
