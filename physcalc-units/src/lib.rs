//! PhysCalc Units - unit conversion within a category
//!
//! Categories:
//! - Length (meter, kilometer, mile, foot, ...)
//! - Mass (kilogram, gram, tonne, pound, ...)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Force (newton, kilonewton, dyne, pound-force)
//! - Energy (joule, calorie, kilocalorie, electronvolt, ...)
//!
//! Conversions never cross categories.

mod unit;
mod units;
mod functions;

pub use unit::{convert, format_converted, Unit, UnitCategory, UnitError, DISPLAY_DECIMALS};
pub use units::{UnitRegistry, UNITS};

use physcalc_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(functions::ConvertUnits)
        .with_function(functions::ListUnits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use physcalc_core::{codes, Value};
    use physcalc_plugin::EvalContext;
    use std::sync::Arc;

    fn call(name: &str, args: &[Value]) -> Value {
        let registry = Arc::new(load_units_library(PluginRegistry::new()));
        let ctx = EvalContext::new(registry.clone());
        registry.call_function(name, args, &ctx)
    }

    fn code(v: &Value) -> Option<&str> {
        v.as_error().map(|e| e.code.as_str())
    }

    #[test]
    fn test_convert_units_infers_category() {
        let r = call("convert_units", &[0.0.into(), "celsius".into(), "fahrenheit".into()]);
        assert_eq!(r.get("value"), Value::Number(32.0));
        assert_eq!(r.get("display"), Value::Text("32".to_string()));
        assert_eq!(r.get("category"), Value::Text("temperature".to_string()));
    }

    #[test]
    fn test_convert_units_with_category() {
        let r = call("convert_units", &[100.0.into(), "celsius".into(), "kelvin".into(), "temperature".into()]);
        assert_eq!(r.get("value"), Value::Number(373.15));
        assert_eq!(r.get("display"), Value::Text("373.15".to_string()));
    }

    #[test]
    fn test_convert_units_display_rounds() {
        let r = call("convert_units", &[1.0.into(), "mile".into(), "kilometer".into()]);
        assert_eq!(r.get("display"), Value::Text("1.60934".to_string()));
    }

    #[test]
    fn test_cross_category_is_unknown_unit() {
        let r = call("convert_units", &[1.0.into(), "meter".into(), "kilogram".into()]);
        assert_eq!(code(&r), Some(codes::UNKNOWN_UNIT));
        assert!(r.as_error().and_then(|e| e.suggestion.as_deref()).unwrap_or("").contains("kilometer"));
    }

    #[test]
    fn test_unknown_source_unit() {
        let r = call("convert_units", &[1.0.into(), "parsec".into(), "meter".into()]);
        assert_eq!(code(&r), Some(codes::UNKNOWN_UNIT));
    }

    #[test]
    fn test_unknown_category() {
        let r = call("convert_units", &[1.0.into(), "meter".into(), "foot".into(), "volume".into()]);
        assert_eq!(code(&r), Some(codes::UNKNOWN_CATEGORY));
    }

    #[test]
    fn test_list_units() {
        let all = call("list_units", &[]);
        assert_eq!(all.as_list().map(|l| l.len()), Some(5));

        let temp = call("list_units", &["temperature".into()]);
        assert_eq!(temp.get("baseUnit"), Value::Text("celsius".to_string()));
        assert_eq!(
            temp.get("units"),
            Value::List(vec!["celsius".into(), "fahrenheit".into(), "kelvin".into()])
        );
    }

    #[test]
    fn test_bad_args() {
        assert_eq!(code(&call("convert_units", &[1.0.into()])), Some(codes::ARG_COUNT));
        assert_eq!(code(&call("convert_units", &["one".into(), "meter".into(), "foot".into()])), Some(codes::PARSE_ERROR));
        assert_eq!(code(&call("convert_units", &[Value::Null, "meter".into(), "foot".into()])), Some(codes::ARG_TYPE));
        let r = call("convert_units", &["1000".into(), "meter".into(), "kilometer".into()]);
        assert_eq!(r.get("value"), Value::Number(1.0));
        assert_eq!(code(&call("list_units", &["a".into(), "b".into()])), Some(codes::ARG_COUNT));
    }
}
