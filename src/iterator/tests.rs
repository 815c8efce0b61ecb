use crate::iterator::AssignmentState;
use crate::iterator::constants::DIGIT_COUNT;
use crate::solver::Solver;

fn decoded(equation: &str, limit: usize) -> Vec<String> {
    let mut solver = match Solver::new(equation) {
        Ok(solver) => solver,
        Err(e) => panic!("failed to build solver for {equation}: {e}"),
    };
    solver
        .solutions()
        .take(limit)
        .map(|s| s.decoded_equation().to_string())
        .collect()
}

#[test]
fn state_skips_used_digits_and_zero() {
    let mut state = AssignmentState::new(3);
    assert_eq!(state.next_free_digit(0, false), Some(0));
    assert_eq!(state.next_free_digit(0, true), Some(1));

    state.descend(1);
    assert_eq!(state.depth, 1);
    assert_eq!(state.next_free_digit(0, true), Some(2));
    assert_eq!(state.next_free_digit(0, false), Some(0));

    state.ascend(Some(1));
    assert_eq!(state.depth, 0);
    assert_eq!(state.next_free_digit(1, true), Some(1));
    assert_eq!(state.next_free_digit(10, false), None);
}

#[test]
fn iterator_enumerates_in_ascending_depth_first_order() {
    assert_eq!(
        decoded("A + B = CD", 10),
        vec![
            "2 + 8 = 10",
            "3 + 7 = 10",
            "3 + 9 = 12",
            "4 + 6 = 10",
            "4 + 8 = 12",
            "4 + 9 = 13",
            "5 + 7 = 12",
            "5 + 8 = 13",
            "5 + 9 = 14",
            "6 + 4 = 10",
        ]
    );
}

#[test]
fn iterator_is_lazy_and_stops_when_asked() {
    let mut solver = match Solver::new("A + B = CD") {
        Ok(solver) => solver,
        Err(e) => panic!("{e}"),
    };
    let mut solutions = solver.solutions();
    let first = solutions.next().map(|s| s.decoded_equation().to_string());
    assert_eq!(first.as_deref(), Some("2 + 8 = 10"));
    drop(solutions);

    // A fresh enumeration starts over from the beginning.
    let again = solver.solutions().next();
    assert_eq!(
        again.map(|s| s.decoded_equation().to_string()).as_deref(),
        Some("2 + 8 = 10")
    );
}

#[test]
fn iterator_restarts_with_identical_results() {
    let mut solver = match Solver::new("-AB + BC = AA") {
        Ok(solver) => solver,
        Err(e) => panic!("{e}"),
    };
    let first: Vec<_> = solver.solutions().collect();
    let second: Vec<_> = solver.solutions().collect();
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn iterator_stays_exhausted() {
    let mut solver = match Solver::new("AB - BC = AA") {
        Ok(solver) => solver,
        Err(e) => panic!("{e}"),
    };
    let mut solutions = solver.solutions();
    assert!(solutions.next().is_none());
    assert!(solutions.next().is_none());
}

#[test]
fn iterator_without_letters_compares_once() {
    assert_eq!(decoded("1 + 1 = 2", 10), vec!["1 + 1 = 2"]);
    assert!(decoded("1 + 1 = 3", 10).is_empty());
    assert!(decoded("1 / 0 = 1", 10).is_empty());
}

#[test]
fn iterator_skips_division_by_zero_leaves() {
    // A = 3, B = 1 divides by zero before "30 / ( 2 - 1 ) = 30" is reached.
    assert_eq!(
        decoded("A0 / (B - 1) = A0", 3),
        vec![
            "10 / ( 2 - 1 ) = 10",
            "30 / ( 2 - 1 ) = 30",
            "40 / ( 2 - 1 ) = 40",
        ]
    );
}

#[test]
fn iterator_solutions_are_not_aliased_to_search_state() {
    let mut solver = match Solver::new("A + B = CD") {
        Ok(solver) => solver,
        Err(e) => panic!("{e}"),
    };
    let solutions: Vec<_> = solver.solutions().take(2).collect();
    assert_eq!(solutions.len(), 2);
    if let Some(first) = solutions.first() {
        assert_eq!(first.digit('A'), Some(2));
        assert_eq!(first.digit('B'), Some(8));
        assert_eq!(first.decoded_equation(), "2 + 8 = 10");
    }
}

#[test]
fn state_tracks_every_digit() {
    let mut state = AssignmentState::new(DIGIT_COUNT);
    assert_eq!(state.used.len(), DIGIT_COUNT);
    for digit in 0..DIGIT_COUNT as u8 {
        state.descend(digit);
    }
    assert_eq!(state.depth, DIGIT_COUNT);
    assert_eq!(state.next_free_digit(0, false), None);
}
