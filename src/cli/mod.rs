//! Command-line parsing for the formula evaluator.
//!
//! The goal of this module is to keep **argument handling** separate from the
//! evaluation code. Values arriving as arguments are kept as raw strings and
//! parsed by the same routine as stdin tokens, so malformed input is reported
//! the same way on both paths.

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "emfun",
    version,
    about = "Evaluate the empirical formula fun(x, y, z) from the packaged T/U tables"
)]
pub struct Cli {
    /// Input values `x y z`. Read from standard input when omitted.
    #[arg(value_name = "NUM", num_args = 0..=3, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_positional_values() {
        let cli = Cli::parse_from(["emfun", "1", "-2.5", "3e2"]);
        assert_eq!(cli.values, ["1", "-2.5", "3e2"]);
    }

    #[test]
    fn parses_no_values() {
        let cli = Cli::parse_from(["emfun"]);
        assert!(cli.values.is_empty());
    }
}
