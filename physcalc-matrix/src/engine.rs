//! Matrix arithmetic, determinant and inverse
//!
//! Determinant and inverse use the closed-form cofactor formulas and are
//! limited to 1×1, 2×2 and 3×3 matrices.

use crate::types::{Matrix, MatrixError};

/// Largest size supported by `determinant` and `inverse`
pub const MAX_CLOSED_FORM_SIZE: usize = 3;

fn elementwise(a: &Matrix, b: &Matrix, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Matrix, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch { op, left: a.shape(), right: b.shape() });
    }
    let data = a.as_rows().iter().zip(b.as_rows())
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| f(x, y)).collect())
        .collect();
    Matrix::new(data)
}

/// Element-wise sum; shapes must match
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise(a, b, "addition", |x, y| x + y)
}

/// Element-wise difference; shapes must match
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise(a, b, "subtraction", |x, y| x - y)
}

/// Matrix product; `cols(a)` must equal `rows(b)`
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch { op: "multiplication", left: a.shape(), right: b.shape() });
    }
    let mut result = Matrix::zeros(a.rows(), b.cols());
    for r in 0..a.rows() {
        for c in 0..b.cols() {
            let mut sum = 0.0;
            for i in 0..a.cols() {
                sum += a.as_rows()[r][i] * b.as_rows()[i][c];
            }
            result.set(r, c, sum);
        }
    }
    Ok(result)
}

fn require_square(m: &Matrix, op: &'static str) -> Result<usize, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare { op, shape: m.shape() });
    }
    Ok(m.rows())
}

/// Determinant of a square matrix of size 1 to 3
pub fn determinant(m: &Matrix) -> Result<f64, MatrixError> {
    let n = require_square(m, "determinant")?;
    let a = m.as_rows();
    match n {
        1 => Ok(a[0][0]),
        2 => Ok(a[0][0] * a[1][1] - a[0][1] * a[1][0]),
        3 => Ok(
            a[0][0] * (a[1][1] * a[2][2] - a[1][2] * a[2][1])
                - a[0][1] * (a[1][0] * a[2][2] - a[1][2] * a[2][0])
                + a[0][2] * (a[1][0] * a[2][1] - a[1][1] * a[2][0])
        ),
        _ => Err(MatrixError::UnsupportedSize { op: "Determinant", size: n }),
    }
}

/// Inverse of a square matrix of size 1 to 3.
///
/// Fails with `Singular` only when the determinant is exactly zero.
/// Nearly singular input produces large, unstable entries instead.
pub fn inverse(m: &Matrix) -> Result<Matrix, MatrixError> {
    let n = require_square(m, "inverse")?;
    if n > MAX_CLOSED_FORM_SIZE {
        return Err(MatrixError::UnsupportedSize { op: "Inverse", size: n });
    }
    let det = determinant(m)?;
    if det == 0.0 {
        return Err(MatrixError::Singular);
    }

    let a = m.as_rows();
    let data = match n {
        1 => vec![vec![1.0 / a[0][0]]],
        2 => vec![
            vec![a[1][1] / det, -a[0][1] / det],
            vec![-a[1][0] / det, a[0][0] / det],
        ],
        _ => {
            // Adjugate (transposed cofactors) scaled by 1/det
            let inv = 1.0 / det;
            vec![
                vec![
                    (a[1][1] * a[2][2] - a[1][2] * a[2][1]) * inv,
                    (a[0][2] * a[2][1] - a[0][1] * a[2][2]) * inv,
                    (a[0][1] * a[1][2] - a[0][2] * a[1][1]) * inv,
                ],
                vec![
                    (a[1][2] * a[2][0] - a[1][0] * a[2][2]) * inv,
                    (a[0][0] * a[2][2] - a[0][2] * a[2][0]) * inv,
                    (a[0][2] * a[1][0] - a[0][0] * a[1][2]) * inv,
                ],
                vec![
                    (a[1][0] * a[2][1] - a[1][1] * a[2][0]) * inv,
                    (a[0][1] * a[2][0] - a[0][0] * a[2][1]) * inv,
                    (a[0][0] * a[1][1] - a[0][1] * a[1][0]) * inv,
                ],
            ]
        }
    };
    Matrix::new(data)
}
