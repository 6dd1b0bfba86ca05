use thiserror::Error;

/// Why an equation has no real solution to report.
///
/// The `Display` text is the exact line the CLI prints for each case.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    /// `a == 0`: the input is at most linear.
    #[error("a = 0. Not a 2nd degree polynomial")]
    DegenerateEquation,
    /// `D < 0`: the quadratic formula has no real solution.
    #[error("No real roots")]
    NoRealRoots { discriminant: f64 },
}

impl SolveError {
    /// Discriminant computed before the failure, if it got that far.
    pub fn discriminant(&self) -> Option<f64> {
        match self {
            SolveError::DegenerateEquation => None,
            SolveError::NoRealRoots { discriminant } => Some(*discriminant),
        }
    }
}
