use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rebus::Solver;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Rebus - Solve cryptarithm puzzles
#[derive(Parser, Debug)]
#[command(name = "rebus")]
#[command(about = "Find digit assignments that make a lettered equation such as SEND + MORE = MONEY true")]
#[command(version)]
pub struct CliArgs {
    /// Equation to solve, e.g. "SEND + MORE = MONEY"
    pub equation: String,

    /// Stop after this many solutions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print the letter to digit mapping next to each solution
    #[arg(short, long)]
    pub digits: bool,

    /// Print only the number of solutions
    #[arg(short, long, conflicts_with = "digits")]
    pub count: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// What to print for every solution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Equations,
    WithDigits,
    Count,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub equation: String,
    pub limit: Option<usize>,
    pub mode: OutputMode,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let mode = if args.count {
            OutputMode::Count
        } else if args.digits {
            OutputMode::WithDigits
        } else {
            OutputMode::Equations
        };

        Self {
            equation: args.equation,
            limit: args.limit,
            mode,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    // Initialize logging
    init_logging(&config.log_level)?;

    let mut solver = Solver::new(&config.equation)
        .with_context(|| format!("Invalid equation '{}'", config.equation))?;

    info!("Solving '{}'", solver);

    let limit = config.limit.unwrap_or(usize::MAX);
    let mut found = 0usize;
    for solution in solver.solutions().take(limit) {
        found += 1;
        match config.mode {
            OutputMode::Equations => println!("{}", solution.decoded_equation()),
            OutputMode::WithDigits => println!("{}", solution),
            OutputMode::Count => {}
        }
    }

    if config.mode == OutputMode::Count {
        println!("{}", found);
    } else if found == 0 {
        warn!("No solution found");
        println!("No solutions.");
    }

    info!("Found {} solution(s)", found);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["rebus", "SEND + MORE = MONEY", "--limit", "3"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.equation, "SEND + MORE = MONEY");
            assert_eq!(args.limit, Some(3));
            assert!(!args.digits);
            assert!(!args.count);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_count_conflicts_with_digits() {
        let args = CliArgs::try_parse_from(["rebus", "A + B = CD", "--count", "--digits"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_output_mode_from_args() {
        let args = CliArgs {
            equation: "A + B = CD".to_string(),
            limit: None,
            digits: true,
            count: false,
            log_level: LogLevel::Info,
        };
        let config = CliConfig::from(args);
        assert_eq!(config.mode, OutputMode::WithDigits);
        assert_eq!(config.limit, None);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
