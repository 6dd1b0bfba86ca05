//! Closed-form solver for a·x² + b·x + c = 0 over the reals.
//!
//! - `discriminant(a, b, c)` → D = b² − 4ac
//! - `roots(a, b, c)` → `RootSet` or `SolveError`
//! - `solve(a, b, c)` → `Solution` with D computed once and passed through

use crate::core::error::SolveError;

/// D = b·b − 4·a·c. Defined for every real input.
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Real roots of one equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootSet {
    /// D < 0
    None,
    /// D == 0, the repeated root
    One(f64),
    /// D > 0: `x1` from the +√D branch, `x2` from the −√D branch
    Two(f64, f64),
}

impl RootSet {
    pub fn len(&self) -> usize {
        match self {
            RootSet::None => 0,
            RootSet::One(_) => 1,
            RootSet::Two(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RootSet::None)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            RootSet::None => Vec::new(),
            RootSet::One(x1) => vec![x1],
            RootSet::Two(x1, x2) => vec![x1, x2],
        }
    }
}

/// A second-degree polynomial. Always has `a != 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equation {
    a: f64,
    b: f64,
    c: f64,
}

impl Equation {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, SolveError> {
        if a == 0.0 {
            return Err(SolveError::DegenerateEquation);
        }
        Ok(Self { a, b, c })
    }

    pub fn a(&self) -> f64 { self.a }
    pub fn b(&self) -> f64 { self.b }
    pub fn c(&self) -> f64 { self.c }

    pub fn discriminant(&self) -> f64 {
        discriminant(self.a, self.b, self.c)
    }

    /// a·x² + b·x + c
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    pub fn roots(&self) -> Result<RootSet, SolveError> {
        self.roots_from_discriminant(self.discriminant())
    }

    /// Like `roots`, but never fails: D < 0 gives `RootSet::None`.
    pub fn root_set(&self) -> RootSet {
        self.roots().unwrap_or(RootSet::None)
    }

    /// Root computation for an already known D. NaN is treated as D < 0.
    fn roots_from_discriminant(&self, d: f64) -> Result<RootSet, SolveError> {
        let two_a = 2.0 * self.a;
        if d > 0.0 {
            let sqrt_d = d.sqrt();
            Ok(RootSet::Two((-self.b + sqrt_d) / two_a, (-self.b - sqrt_d) / two_a))
        } else if d == 0.0 {
            // both branches coincide; +√0 keeps b == 0 from printing as -0
            Ok(RootSet::One((-self.b + d.sqrt()) / two_a))
        } else {
            Err(SolveError::NoRealRoots { discriminant: d })
        }
    }
}

/// Real roots of a·x² + b·x + c = 0. Re-derives D.
pub fn roots(a: f64, b: f64, c: f64) -> Result<RootSet, SolveError> {
    Equation::new(a, b, c)?.roots()
}

/// A solved equation: D plus a non-empty root set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub equation: Equation,
    pub discriminant: f64,
    pub roots: RootSet,
}

/// Validate, compute D once, and dispatch on its sign.
pub fn solve(a: f64, b: f64, c: f64) -> Result<Solution, SolveError> {
    let equation = Equation::new(a, b, c)?;
    let discriminant = equation.discriminant();
    crate::debug_log!("[solver] a={a} b={b} c={c} D={discriminant}");
    let roots = equation.roots_from_discriminant(discriminant)?;
    crate::debug_log!("[solver] {} real root(s)", roots.len());
    Ok(Solution { equation, discriminant, roots })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_root(eq: &Equation, x: f64) {
        let scale = eq.a().abs() * x * x + eq.b().abs() * x.abs() + eq.c().abs();
        let residual = eq.evaluate(x).abs();
        assert!(
            residual <= 1e-9 * scale.max(1.0),
            "x = {x} is not a root of {eq:?}: residual {residual}"
        );
    }

    #[test]
    fn discriminant_matches_formula() {
        assert_eq!(discriminant(1.0, 2.0, 3.0), -8.0);
        assert_eq!(discriminant(1.0, -8.0, 16.0), 0.0);
        assert_eq!(discriminant(1.0, -1.0, -2.0), 9.0);
        assert_eq!(discriminant(0.0, 3.0, 7.0), 9.0);
    }

    #[test]
    fn two_distinct_roots_plus_branch_first() {
        assert_eq!(roots(1.0, -1.0, -2.0), Ok(RootSet::Two(2.0, -1.0)));
        // a < 0 flips which branch is larger; order still follows the branch
        assert_eq!(roots(-1.0, 1.0, 2.0), Ok(RootSet::Two(-1.0, 2.0)));
    }

    #[test]
    fn double_root() {
        assert_eq!(roots(1.0, -8.0, 16.0), Ok(RootSet::One(4.0)));
        let RootSet::One(x) = roots(3.0, 0.0, 0.0).unwrap() else { panic!("expected one root") };
        assert!(x == 0.0 && x.is_sign_positive());
    }

    #[test]
    fn double_root_branches_coincide() {
        let (a, b, c) = (1.0, -8.0, 16.0);
        let d = discriminant(a, b, c);
        assert_eq!(d, 0.0);
        assert_eq!((-b + d.sqrt()) / (2.0 * a), (-b - d.sqrt()) / (2.0 * a));
    }

    #[test]
    fn negative_discriminant_is_an_error() {
        assert_eq!(roots(1.0, 2.0, 3.0), Err(SolveError::NoRealRoots { discriminant: -8.0 }));
        let eq = Equation::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(eq.root_set(), RootSet::None);
        assert!(eq.root_set().is_empty());
    }

    #[test]
    fn zero_leading_coefficient_is_rejected() {
        assert_eq!(Equation::new(0.0, 1.0, 1.0), Err(SolveError::DegenerateEquation));
        assert_eq!(Equation::new(-0.0, 0.0, 0.0), Err(SolveError::DegenerateEquation));
        assert_eq!(roots(0.0, 2.0, 1.0), Err(SolveError::DegenerateEquation));
        assert_eq!(solve(0.0, -5.0, 2.0), Err(SolveError::DegenerateEquation));
    }

    #[test]
    fn solve_reports_discriminant() {
        let sol = solve(2.3, -2.99, -16.422).unwrap();
        assert_eq!(sol.discriminant, discriminant(2.3, -2.99, -16.422));
        let RootSet::Two(x1, x2) = sol.roots else { panic!("expected two roots") };
        assert!((x1 - 3.4).abs() < 1e-9, "x1 = {x1}");
        assert!((x2 + 2.1).abs() < 1e-9, "x2 = {x2}");
        assert_is_root(&sol.equation, x1);
        assert_is_root(&sol.equation, x2);
    }

    #[test]
    fn roots_satisfy_equation() {
        let cases = [
            (1.0, -3.0, 2.0),
            (0.5, 0.25, -7.0),
            (-4.0, 12.0, -9.0),
            (1e-3, 2.0, -1.0),
            (7.0, 0.0, -28.0),
        ];
        for (a, b, c) in cases {
            let eq = Equation::new(a, b, c).unwrap();
            for x in eq.root_set().to_vec() {
                assert_is_root(&eq, x);
            }
        }
    }

    #[test]
    fn root_set_helpers() {
        assert_eq!(RootSet::None.len(), 0);
        assert_eq!(RootSet::One(1.0).len(), 1);
        assert_eq!(RootSet::Two(1.0, 2.0).to_vec(), vec![1.0, 2.0]);
        assert!(!RootSet::One(0.0).is_empty());
    }
}
