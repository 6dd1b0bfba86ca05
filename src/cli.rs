use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quadroot",
    about = "Solve a·x² + b·x + c = 0 for real roots; reads a b c from stdin",
    version
)]
pub struct QuadrootCli {
    /// Significant digits for printed numbers (default 6)
    #[arg(long = "precision", value_name = "DIGITS", value_parser = clap::value_parser!(u8).range(1..=17))]
    pub precision: Option<u8>,

    /// Colorize failure messages
    #[arg(long = "pretty-errors", action = ArgAction::SetTrue)]
    pub pretty_errors: bool,

    /// Path to config (TOML); default: ~/.quadroot/config.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
