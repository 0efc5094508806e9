//! PhysCalc Base - positional number base conversion
//!
//! Converts unsigned digit strings between binary, octal, decimal and
//! hexadecimal. Conversion is total: bad input produces an empty string,
//! never an error.

mod radix;
mod functions;

pub use radix::{convert, convert_all, Radix, RadixError, Renderings};

use physcalc_plugin::PluginRegistry;

/// Load base conversion functions into registry
pub fn load_base_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(functions::ConvertBase)
        .with_function(functions::ConvertBaseAll)
}
