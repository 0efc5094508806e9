//! PhysCalc Vector - vector algebra in two and three dimensions
//!
//! Vectors are always stored with three components. A 2D vector is a 3D
//! vector with z = 0 whose z is hidden when displayed.

mod vector;
mod functions;

pub use vector::{add, angle_between, cross, dot, subtract, Dimension, Vector3, VectorError};
pub use functions::{extract_vector, vector_to_value};

use physcalc_plugin::PluginRegistry;

/// Load vector functions into registry
pub fn load_vector_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(functions::VecAddFn)
        .with_function(functions::VecSubFn)
        .with_function(functions::DotFn)
        .with_function(functions::CrossFn)
        .with_function(functions::AngleFn)
}
