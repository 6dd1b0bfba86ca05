/// quadroot main — read a b c from stdin, print discriminant and real roots.
use std::io::{self, IsTerminal, Write};
use std::process::exit as proc_exit;

use clap::Parser; // trait import enables QuadrootCli::parse()
use colored::Colorize;

use quadroot::cli::QuadrootCli;
use quadroot::commands::solve::{self, ReportStyle};
use quadroot::config::load_settings;

fn run(args: QuadrootCli) -> anyhow::Result<i32> {
    let settings = load_settings(&args.config)?;
    let style = ReportStyle {
        precision: args.precision.map(usize::from).unwrap_or(settings.precision),
        pretty_errors: args.pretty_errors || settings.pretty_errors,
    };
    quadroot::debug_log!("[main] {style:?}");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    if settings.prompt && stdin.is_terminal() {
        write!(stdout, "Enter a, b, c: ")?;
        stdout.flush()?;
    }
    solve::main_with_opts(stdin.lock(), &mut stdout, style)
}

fn main() {
    let args = QuadrootCli::parse();
    let pretty = args.pretty_errors;

    match run(args) {
        Ok(code) => proc_exit(code),
        Err(e) => {
            let msg = format!("error: {e:#}");
            if pretty {
                eprintln!("{}", msg.red());
            } else {
                eprintln!("{msg}");
            }
            proc_exit(solve::EXIT_USAGE);
        }
    }
}
