//! Solver core: pure computation, no I/O.

#[macro_use]
pub mod debug; // gated debug logging (QUADROOT_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod numfmt;
pub mod solver;

pub use error::SolveError;
pub use solver::{discriminant, roots, solve, Equation, RootSet, Solution};
