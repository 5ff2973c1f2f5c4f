use std::{
    fs,
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use modcalc::{
    config::{Config, ExponentMode},
    interpreter::session::Session,
    repl::{ReaderLines, run, run_source},
    util::num::DEFAULT_MODULUS,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// modcalc evaluates arithmetic expressions over a prime field and prints
/// every statement in reverse Polish notation, followed by its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells modcalc to look at a file instead of an expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// The prime modulus of the field.
    #[arg(short, long, default_value_t = DEFAULT_MODULUS)]
    modulus: u64,

    /// How the right operand of `^` is reduced: modulo the prime (`field`) or
    /// modulo the prime minus one (`ring`).
    #[arg(short, long, value_enum, default_value_t = ExponentMode::Field)]
    exponents: ExponentMode,

    /// Logs more to stderr. Repeat for more detail. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// An expression, or a file path with `--file`. Standard input is read
    /// line by line when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config { modulus:       args.modulus,
                          exponent_mode: args.exponents, };
    let session = match Session::new(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };
    info!(modulus = session.field().modulus(), exponents = %session.exponent_mode(), "starting");

    let mut out = io::stdout().lock();
    let result = match args.contents {
        Some(path) if args.file => match fs::read_to_string(&path) {
            Ok(script) => run_source(&session, &script, &mut out),
            Err(e) => {
                error!(%e, %path, "failed to read input file");
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        },
        Some(expression) => run_source(&session, &expression, &mut out),
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            return match run(&session, &mut ReaderLines::new(stdin.lock()), &mut out, prompt) {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                },
            };
        },
    };

    match result {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            info!(failures, "statements reported errors");
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Sends logs to stderr, leaving stdout to the calculator output.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}
