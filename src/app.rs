//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - collects the three input numbers (arguments or stdin)
//! - evaluates the formula against the packaged tables
//! - prints the result line (plus the opt-in stderr trace)

use std::io::BufRead;

use clap::Parser;

use crate::cli::Cli;
use crate::data::TuTables;
use crate::error::AppError;

/// Entry point for the `emfun` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let (x, y, z) = if cli.values.is_empty() {
        let stdin = std::io::stdin();
        let tokens = read_tokens(&mut stdin.lock())?;
        parse_inputs(&tokens)?
    } else {
        parse_inputs(&cli.values)?
    };

    let eval = crate::eval::evaluate(TuTables::packaged(), x, y, z);

    if crate::debug::enabled() {
        eprintln!("{}", crate::debug::format_trace(&eval));
    }

    println!("{}", crate::report::format_result(&eval));
    Ok(())
}

/// Collect whitespace-separated tokens from `input` until three are available
/// or the stream ends.
fn read_tokens(input: &mut impl BufRead) -> Result<Vec<String>, AppError> {
    let mut tokens = Vec::new();
    let mut line = String::new();

    while tokens.len() < 3 {
        line.clear();
        let n = input
            .read_line(&mut line)
            .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;
        if n == 0 {
            break;
        }
        tokens.extend(line.split_whitespace().map(str::to_string));
    }

    tokens.truncate(3);
    Ok(tokens)
}

/// Parse exactly three finite numbers. No evaluation happens past a failure.
fn parse_inputs(tokens: &[String]) -> Result<(f64, f64, f64), AppError> {
    if tokens.len() != 3 {
        return Err(AppError::invalid_input(format!(
            "Invalid input: expected three numbers `x y z`, got {}.",
            tokens.len()
        )));
    }

    let mut parsed = [0.0_f64; 3];
    for (slot, token) in parsed.iter_mut().zip(tokens) {
        let value: f64 = token.parse().map_err(|_| {
            AppError::invalid_input(format!("Invalid input: `{token}` is not a number."))
        })?;
        if !value.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Invalid input: `{token}` is not finite."
            )));
        }
        *slot = value;
    }

    Ok((parsed[0], parsed[1], parsed[2]))
}
