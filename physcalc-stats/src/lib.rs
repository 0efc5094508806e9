//! PhysCalc Stats - descriptive statistics over a sample
//!
//! All figures are computed in one pass over the same input: mean,
//! median, mode (every value tied at the highest frequency), population
//! variance and standard deviation, count and sum.

mod summary;
mod functions;

pub use summary::{calculate, Mode, Statistics};
pub use functions::extract_numbers;

use physcalc_plugin::PluginRegistry;

/// Load statistics functions into registry
pub fn load_stats_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(functions::StatisticsFn)
        .with_function(functions::MEAN)
        .with_function(functions::MEDIAN)
        .with_function(functions::MODE)
        .with_function(functions::VARIANCE)
        .with_function(functions::STD_DEV)
}

#[cfg(test)]
mod tests {
    use super::*;
    use physcalc_core::{codes, Value};
    use physcalc_plugin::EvalContext;
    use std::sync::Arc;

    fn call(name: &str, args: &[Value]) -> Value {
        let registry = Arc::new(load_stats_library(PluginRegistry::new()));
        let ctx = EvalContext::new(registry.clone());
        registry.call_function(name, args, &ctx)
    }

    #[test]
    fn test_statistics_from_list() {
        let r = call("statistics", &[Value::numbers(&[1.0, 2.0, 2.0, 3.0])]);
        assert_eq!(r.get("mean"), Value::Number(2.0));
        assert_eq!(r.get("median"), Value::Number(2.0));
        assert_eq!(r.get("mode"), Value::numbers(&[2.0]));
        assert_eq!(r.get("variance"), Value::Number(0.5));
        assert_eq!(r.get("count"), Value::Number(4.0));
        assert_eq!(r.get("sum"), Value::Number(8.0));
        let sd = r.get("standardDeviation").as_number().unwrap();
        assert!((sd - 0.7071).abs() < 1e-4);
    }

    #[test]
    fn test_statistics_from_varargs() {
        let r = call("statistics", &[1.0.into(), 2.0.into(), 3.0.into()]);
        assert_eq!(r.get("mode"), Value::Text("No mode".to_string()));
        assert_eq!(r.get("median"), Value::Number(2.0));
    }

    #[test]
    fn test_statistics_empty() {
        let r = call("statistics", &[]);
        assert_eq!(r.get("mode"), Value::Text("N/A".to_string()));
        assert_eq!(r.get("count"), Value::Number(0.0));
        assert_eq!(r.get("mean"), Value::Number(0.0));
    }

    #[test]
    fn test_single_field_functions() {
        let data = [Value::numbers(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])];
        assert_eq!(call("mean", &data), Value::Number(5.0));
        assert_eq!(call("median", &data), Value::Number(4.5));
        assert_eq!(call("mode", &data), Value::numbers(&[4.0]));
        assert_eq!(call("variance", &data), Value::Number(4.0));
        assert_eq!(call("std_dev", &data), Value::Number(2.0));
    }

    #[test]
    fn test_field_functions_share_category() {
        let registry = load_stats_library(PluginRegistry::new());
        assert_eq!(registry.categories(), vec!["statistics"]);
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_rejects_non_numbers() {
        let r = call("statistics", &[Value::List(vec![1.0.into(), "two".into()])]);
        assert_eq!(r.as_error().map(|e| e.code.as_str()), Some(codes::ARG_TYPE));
        let r = call("mean", &[f64::INFINITY.into()]);
        assert_eq!(r.as_error().map(|e| e.code.as_str()), Some(codes::DOMAIN_ERROR));
    }
}
