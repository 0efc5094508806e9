//! Unit representation and the conversion rule

use physcalc_core::{codes, to_trimmed, CalcError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decimal places kept when rendering a converted value
pub const DISPLAY_DECIMALS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Unknown unit category '{0}'")]
    UnknownCategory(String),

    #[error("Unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { unit: String, category: String },
}

impl From<UnitError> for CalcError {
    fn from(err: UnitError) -> Self {
        let code = match &err {
            UnitError::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            UnitError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
        };
        CalcError::new(code, err.to_string())
    }
}

/// A unit within one category.
///
/// `base = (value - offset) * scale` converts into the category's base unit.
/// Only temperature units carry an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

impl Unit {
    /// Proportional unit
    pub fn new(name: &str, scale: f64) -> Self {
        Unit { name: name.to_string(), scale, offset: None }
    }

    /// Affine unit (temperature)
    pub fn with_offset(name: &str, scale: f64, offset: f64) -> Self {
        Unit { name: name.to_string(), scale, offset: Some(offset) }
    }

    pub fn has_offset(&self) -> bool {
        self.offset.is_some()
    }

    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        (value - self.offset.unwrap_or(0.0)) * self.scale
    }

    /// Convert a value in the category's base unit to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        base / self.scale + self.offset.unwrap_or(0.0)
    }
}

/// A named set of units sharing one base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCategory {
    pub key: String,
    pub name: String,
    pub base_unit: String,
    pub units: Vec<Unit>,
}

impl UnitCategory {
    pub fn new(key: &str, name: &str, base_unit: &str, units: Vec<Unit>) -> Self {
        UnitCategory {
            key: key.to_string(),
            name: name.to_string(),
            base_unit: base_unit.to_string(),
            units,
        }
    }

    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn unit_names(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.name.as_str()).collect()
    }
}

/// Convert `value` from `from` to `to`, looking both names up in `units`.
///
/// Returns `None` when either name is not in `units`. The conversion is
/// affine when either unit has an offset, otherwise purely multiplicative.
pub fn convert(value: f64, from: &str, to: &str, units: &[Unit]) -> Option<f64> {
    let from = units.iter().find(|u| u.name == from)?;
    let to = units.iter().find(|u| u.name == to)?;

    if from.has_offset() || to.has_offset() {
        Some(to.from_base(from.to_base(value)))
    } else {
        Some(value * from.scale / to.scale)
    }
}

/// Render a converted value rounded to 6 decimals, trailing zeros dropped
pub fn format_converted(value: f64) -> String {
    to_trimmed(value, DISPLAY_DECIMALS)
}
