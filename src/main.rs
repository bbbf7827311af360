use std::{io, process};

use clap::{ArgAction, Parser};
use infixcalc::{
    regression::{self, DEFAULT_ERROR_FACTOR},
    repl::{self, Config},
    util::format::DEFAULT_PRECISION,
};
use log::LevelFilter;

/// infixcalc evaluates arithmetic equations in infix notation, including ones
/// pasted from spreadsheets with look-alike minus, times and divide signs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints every push and reduction. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Same as a single --verbose.
    #[arg(short, long)]
    debug: bool,

    /// Runs the built-in regression table instead of the interactive loop.
    #[arg(short, long)]
    test: bool,

    /// Multiple of machine epsilon tolerated by the regression table.
    #[arg(short, long, default_value_t = DEFAULT_ERROR_FACTOR)]
    error_factor: f64,

    /// Significant digits in printed results.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Evaluates this equation and exits instead of reading from stdin. It may
    /// start with a minus sign, e.g. `-1+-1`.
    #[arg(allow_hyphen_values = true)]
    equation: Option<String>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose.saturating_add(u8::from(self.debug)) {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(args.log_level())
                              .parse_default_env()
                              .init();

    if args.test {
        match regression::run(args.error_factor) {
            Ok(count) => println!("All {count} regression cases passed."),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
        return;
    }

    if let Some(equation) = &args.equation {
        match repl::answer(equation, args.precision) {
            Ok(answer) => println!("{answer}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
        return;
    }

    let config = Config { precision: args.precision,
                          ..Config::default() };
    if let Err(e) = repl::run(io::stdin().lock(), io::stdout().lock(), &config) {
        eprintln!("Failed to read the input: {e}");
        process::exit(1);
    }
}
