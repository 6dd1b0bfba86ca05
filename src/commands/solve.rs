//! src/commands/solve.rs
//! One read → solve → report cycle. Returns the process exit code; never exits.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use crate::core::numfmt::format_general;
use crate::core::solver::{solve, RootSet, Solution};
use crate::core::SolveError;
use crate::io::input::{read_coefficients, Coefficients};

pub const EXIT_SUCCESS: i32 = 0;
/// Degenerate equation or no real roots.
pub const EXIT_NO_SOLUTION: i32 = 1;
/// Unreadable input or bad configuration.
pub const EXIT_USAGE: i32 = 2;

#[derive(Clone, Copy, Debug)]
pub struct ReportStyle {
    pub precision: usize,
    pub pretty_errors: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self { precision: crate::core::numfmt::DEFAULT_PRECISION, pretty_errors: false }
    }
}

pub fn main_with_opts<R: BufRead, W: Write>(input: R, out: &mut W, style: ReportStyle) -> Result<i32> {
    let coeffs = read_coefficients(input)?;
    crate::debug_log!("[solve] read {coeffs:?}");
    let outcome = solve(coeffs.a, coeffs.b, coeffs.c);
    write_report(out, &coeffs, &outcome, style)?;
    out.flush()?;
    Ok(exit_code(&outcome))
}

pub fn exit_code(outcome: &Result<Solution, SolveError>) -> i32 {
    match outcome {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_NO_SOLUTION,
    }
}

/// Echo, discriminant (unless rejected), then the roots or the failure line.
pub fn write_report<W: Write>(
    out: &mut W,
    coeffs: &Coefficients,
    outcome: &Result<Solution, SolveError>,
    style: ReportStyle,
) -> std::io::Result<()> {
    let num = |v: f64| format_general(v, style.precision);

    writeln!(out, "a = {} b = {} c = {}", num(coeffs.a), num(coeffs.b), num(coeffs.c))?;

    let discriminant = match outcome {
        Ok(sol) => Some(sol.discriminant),
        Err(e) => e.discriminant(),
    };
    if let Some(d) = discriminant {
        writeln!(out, "Discriminant: D = {}", num(d))?;
    }

    match outcome {
        Ok(Solution { roots: RootSet::Two(x1, x2), .. }) => {
            writeln!(out, "Roots: x1 = {} x2 = {}", num(*x1), num(*x2))
        }
        Ok(Solution { roots: RootSet::One(x1), .. }) => writeln!(out, "Double Root: x1 = {}", num(*x1)),
        // solve() never yields an empty root set
        Ok(Solution { roots: RootSet::None, discriminant, .. }) => {
            failure_line(out, &SolveError::NoRealRoots { discriminant: *discriminant }, style)
        }
        Err(e) => failure_line(out, e, style),
    }
}

fn failure_line<W: Write>(out: &mut W, err: &SolveError, style: ReportStyle) -> std::io::Result<()> {
    if style.pretty_errors {
        writeln!(out, "{}", err.to_string().red().bold())
    } else {
        writeln!(out, "{err}")
    }
}
