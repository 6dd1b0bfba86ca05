//! quadroot: real roots of a·x² + b·x + c = 0.
//!
//! The solver in `core` is pure; `commands::solve` wires it to a reader and
//! writer, and the binary alone decides the process exit code.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::{discriminant, roots, solve, Equation, RootSet, Solution, SolveError};
