//! PhysCalc Matrix - small dense matrix algebra
//!
//! Provides:
//! - Element-wise addition and subtraction
//! - Matrix product
//! - Determinant and inverse for 1×1, 2×2 and 3×3 matrices
//!
//! Matrices are nested lists of rows. Every operation checks its
//! dimension preconditions and reports a structured error instead of
//! producing a result from malformed input.

mod types;
mod engine;
mod helpers;
mod ops;

pub use types::{validate, Matrix, MatrixError, Shape};
pub use engine::{add, determinant, inverse, multiply, subtract, MAX_CLOSED_FORM_SIZE};
pub use helpers::{extract_matrix, matrix_to_value};

use physcalc_plugin::PluginRegistry;

/// Load matrix functions into registry
pub fn load_matrix_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(ops::MatAddFn)
        .with_function(ops::MatSubFn)
        .with_function(ops::MatmulFn)
        .with_function(ops::DeterminantFn)
        .with_function(ops::InverseFn)
}
