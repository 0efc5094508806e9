//! Core matrix type and errors

use std::fmt;
use physcalc_core::{codes, to_trimmed, CalcError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rows × columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Reasons a matrix operation can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("Invalid matrix format: {0}")]
    InvalidFormat(String),

    /// `op` is `"addition"`, `"subtraction"` or `"multiplication"`
    #[error("{} (got {left} and {right})", mismatch_message(.op))]
    DimensionMismatch { op: &'static str, left: Shape, right: Shape },

    #[error("Matrix must be square to calculate the {op} (got {shape})")]
    NotSquare { op: &'static str, shape: Shape },

    #[error("{op} calculation for matrices larger than 3x3 is not supported (got {size}×{size})")]
    UnsupportedSize { op: &'static str, size: usize },

    #[error("Matrix is singular and cannot be inverted")]
    Singular,
}

fn mismatch_message(op: &str) -> String {
    if op == "multiplication" {
        "The number of columns in matrix A must equal the number of rows in matrix B for multiplication".to_string()
    } else {
        format!("Matrices must have the same dimensions for {}", op)
    }
}

impl From<MatrixError> for CalcError {
    fn from(err: MatrixError) -> Self {
        let code = match &err {
            MatrixError::InvalidFormat(_) => codes::INVALID_FORMAT,
            MatrixError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            MatrixError::NotSquare { .. } => codes::NOT_SQUARE,
            MatrixError::UnsupportedSize { .. } => codes::UNSUPPORTED_SIZE,
            MatrixError::Singular => codes::SINGULAR,
        };
        CalcError::new(code, err.to_string())
    }
}

/// Check that `rows` is a proper two-level sequence: at least one row, at
/// least one column, and every row the same length.
pub fn validate(rows: &[Vec<f64>]) -> Result<(), MatrixError> {
    let first = rows
        .first()
        .ok_or_else(|| MatrixError::InvalidFormat("matrix has no rows".to_string()))?;
    let cols = first.len();
    if cols == 0 {
        return Err(MatrixError::InvalidFormat("matrix has no columns".to_string()));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err(MatrixError::InvalidFormat(format!(
                "row {} has {} columns, expected {}",
                i, row.len(), cols
            )));
        }
    }
    Ok(())
}

/// Rectangular matrix of reals, stored row by row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Create a matrix from rows, rejecting empty or ragged input
    pub fn new(data: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        validate(&data)?;
        Ok(Matrix { data })
    }

    /// n×n identity (at least 1×1)
    pub fn identity(n: usize) -> Self {
        let n = n.max(1);
        let data = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Matrix { data }
    }

    /// rows×cols matrix of zeros
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        Matrix { data: vec![vec![0.0; cols]; rows] }
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data[0].len()
    }

    pub fn shape(&self) -> Shape {
        Shape { rows: self.rows(), cols: self.cols() }
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    /// Render with `decimals` places, trailing zeros dropped
    pub fn display(&self, decimals: usize) -> String {
        let rows: Vec<String> = self.data.iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|&x| to_trimmed(x, decimals)).collect();
                format!("[{}]", cells.join(", "))
            })
            .collect();
        format!("[{}]", rows.join(", "))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::new(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(4))
    }
}
