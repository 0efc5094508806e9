//! PhysCalc Core - Fundamental types
//!
//! This crate provides the core types used throughout PhysCalc:
//! - `Value`: Runtime values (numbers, text, objects, errors)
//! - `CalcError`: Structured errors with machine-readable codes
//! - Number parsing and fixed-point rendering helpers

mod number;
mod value;
mod error;

pub use number::{parse_number, to_fixed, to_trimmed, NumberError};
pub use value::Value;
pub use error::{CalcError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{parse_number, CalcError, Severity, Value};
    pub use crate::error::codes;
}
