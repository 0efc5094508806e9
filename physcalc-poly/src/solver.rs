//! Closed-form quadratic and cubic solvers

use physcalc_core::to_fixed;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Imaginary parts smaller than this are treated as zero
pub const IMAGINARY_EPSILON: f64 = 1e-9;

/// Decimal places used for every formatted root
pub const ROOT_DECIMALS: usize = 4;

/// Root classification reported by `solve_quadratic`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootNature {
    #[serde(rename = "Two distinct real roots")]
    TwoDistinctReal,
    #[serde(rename = "One real root (repeated)")]
    OneRepeated,
    #[serde(rename = "Two complex conjugate roots")]
    ComplexConjugate,
    #[serde(rename = "Linear equation")]
    Linear,
    #[serde(rename = "Not a quadratic equation")]
    NotQuadratic,
}

impl RootNature {
    pub fn label(self) -> &'static str {
        match self {
            RootNature::TwoDistinctReal => "Two distinct real roots",
            RootNature::OneRepeated => "One real root (repeated)",
            RootNature::ComplexConjugate => "Two complex conjugate roots",
            RootNature::Linear => "Linear equation",
            RootNature::NotQuadratic => "Not a quadratic equation",
        }
    }
}

impl fmt::Display for RootNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of `solve_quadratic`.
///
/// `discriminant` is `None` for the linear and degenerate cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadraticResult {
    pub roots: Vec<String>,
    pub discriminant: Option<f64>,
    pub nature_of_roots: RootNature,
}

/// Result of `solve_cubic`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubicResult {
    pub roots: Vec<String>,
}

/// Format `real + imag·i` with 4 decimals.
///
/// A negligible imaginary part is dropped: `format_complex(1.0, 1e-12)` is
/// `"1.0000"`, `format_complex(-1.0, -2.0)` is `"-1.0000 - 2.0000i"`.
pub fn format_complex(real: f64, imag: f64) -> String {
    if imag.abs() < IMAGINARY_EPSILON {
        return to_fixed(real, ROOT_DECIMALS);
    }
    let sign = if imag > 0.0 { '+' } else { '-' };
    format!(
        "{} {} {}i",
        to_fixed(real, ROOT_DECIMALS),
        sign,
        to_fixed(imag.abs(), ROOT_DECIMALS)
    )
}

/// Solve `a·x² + b·x + c = 0`.
///
/// Falls back to a linear solve when `a == 0`, and reports
/// "Infinite solutions" or "No solution" when `a == b == 0`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticResult {
    if a == 0.0 {
        if b == 0.0 {
            let root = if c == 0.0 { "Infinite solutions" } else { "No solution" };
            return QuadraticResult {
                roots: vec![root.to_string()],
                discriminant: None,
                nature_of_roots: RootNature::NotQuadratic,
            };
        }
        return QuadraticResult {
            roots: vec![to_fixed(-c / b, ROOT_DECIMALS)],
            discriminant: None,
            nature_of_roots: RootNature::Linear,
        };
    }

    let discriminant = b * b - 4.0 * a * c;

    let (roots, nature) = if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        let r1 = (-b + sqrt_d) / (2.0 * a);
        let r2 = (-b - sqrt_d) / (2.0 * a);
        (vec![to_fixed(r1, ROOT_DECIMALS), to_fixed(r2, ROOT_DECIMALS)], RootNature::TwoDistinctReal)
    } else if discriminant == 0.0 {
        (vec![to_fixed(-b / (2.0 * a), ROOT_DECIMALS)], RootNature::OneRepeated)
    } else {
        let real = -b / (2.0 * a);
        let imag = (-discriminant).sqrt() / (2.0 * a);
        (vec![format_complex(real, imag), format_complex(real, -imag)], RootNature::ComplexConjugate)
    };

    QuadraticResult {
        roots,
        discriminant: Some(discriminant),
        nature_of_roots: nature,
    }
}

/// Solve `a·x³ + b·x² + c·x + d = 0`.
///
/// Delegates to `solve_quadratic(b, c, d)` when `a == 0`. Otherwise the
/// cubic is normalized and depressed to `t³ + p·t + q = 0`; Cardano's
/// formula handles a non-negative discriminant and the trigonometric
/// method handles three distinct real roots. Always yields three roots
/// for a true cubic; equal roots are not merged.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> CubicResult {
    if a == 0.0 {
        return CubicResult { roots: solve_quadratic(b, c, d).roots };
    }

    // x³ + a1·x² + a2·x + a3 = 0
    let a1 = b / a;
    let a2 = c / a;
    let a3 = d / a;

    let p = (3.0 * a2 - a1 * a1) / 3.0;
    let q = (2.0 * a1 * a1 * a1 - 9.0 * a1 * a2 + 27.0 * a3) / 27.0;
    let discriminant = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    // (real, imag) in depressed coordinates
    let roots: [(f64, f64); 3] = if discriminant >= 0.0 {
        let sqrt_d = discriminant.sqrt();
        let u = (-q / 2.0 + sqrt_d).cbrt();
        let v = (-q / 2.0 - sqrt_d).cbrt();
        let real = -(u + v) / 2.0;
        let imag = (3.0_f64.sqrt() / 2.0) * (u - v);
        if imag.abs() < IMAGINARY_EPSILON {
            [(u + v, 0.0), (real, 0.0), (real, 0.0)]
        } else {
            [(u + v, 0.0), (real, imag), (real, -imag)]
        }
    } else {
        let r = (-(p.powi(3)) / 27.0).sqrt();
        // Rounding can push the ratio just outside acos's domain
        let phi = (-q / (2.0 * r)).clamp(-1.0, 1.0).acos();
        let scale = 2.0 * (-p / 3.0).sqrt();
        [
            (scale * (phi / 3.0).cos(), 0.0),
            (scale * ((phi + 2.0 * PI) / 3.0).cos(), 0.0),
            (scale * ((phi + 4.0 * PI) / 3.0).cos(), 0.0),
        ]
    };

    let shift = a1 / 3.0;
    CubicResult {
        roots: roots.iter().map(|&(re, im)| format_complex(re - shift, im)).collect(),
    }
}
