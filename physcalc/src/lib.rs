//! PhysCalc - scientific calculator core
//!
//! Six independent numeric modules behind one function registry:
//! - Base conversion (`convert_base`, `convert_base_all`)
//! - Matrices (`mat_add`, `mat_sub`, `matmul`, `determinant`, `inverse`)
//! - Polynomials (`solve_quadratic`, `solve_cubic`)
//! - Vectors (`vec_add`, `vec_sub`, `dot`, `cross`, `angle`)
//! - Units (`convert_units`, `list_units`)
//! - Statistics (`statistics`, `mean`, `median`, `mode`, `variance`, `std_dev`)
//!
//! Typed APIs are re-exported per module for callers that don't need the
//! `Value` layer.

pub use physcalc_core::{codes, CalcError, Severity, Value};
pub use physcalc_plugin::{EvalContext, FunctionMeta, FunctionPlugin, PluginRegistry, DEFAULT_PRECISION};

pub use physcalc_base as base;
pub use physcalc_matrix as matrix;
pub use physcalc_poly as poly;
pub use physcalc_stats as stats;
pub use physcalc_units as units;
pub use physcalc_vector as vector;

use std::sync::Arc;
use tracing::debug;

/// Registry with every calculator module loaded
pub fn standard_registry() -> PluginRegistry {
    let registry = PluginRegistry::new();
    let registry = physcalc_base::load_base_library(registry);
    let registry = physcalc_matrix::load_matrix_library(registry);
    let registry = physcalc_poly::load_poly_library(registry);
    let registry = physcalc_vector::load_vector_library(registry);
    let registry = physcalc_units::load_units_library(registry);
    physcalc_stats::load_stats_library(registry)
}

/// Main calculator entry point: call any registered function by name
pub struct Calculator {
    registry: Arc<PluginRegistry>,
    precision: usize,
}

impl Calculator {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_standard_library() -> Self {
        Self::new(standard_registry())
    }

    /// Decimals used in `display` strings. Numeric results are unaffected.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        debug!(function = name, precision = self.precision, "calculator call");
        let ctx = EvalContext::new(self.registry.clone()).with_precision(self.precision);
        self.registry.call_function(name, args, &ctx)
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }

    pub fn categories(&self) -> Vec<&'static str> {
        self.registry.categories()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

/// Build an argument list: `args![1.0, "celsius", "kelvin"]`
#[macro_export]
macro_rules! args {
    () => { Vec::<$crate::Value>::new() };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> Calculator {
        Calculator::with_standard_library()
    }

    fn nested(rows: &[&[f64]]) -> Value {
        Value::List(rows.iter().map(|r| Value::numbers(r)).collect())
    }

    fn rows_of(v: &Value) -> Vec<Vec<f64>> {
        v.get("data")
            .as_list()
            .unwrap()
            .iter()
            .map(|row| row.as_list().unwrap().iter().map(|x| x.as_number().unwrap()).collect())
            .collect()
    }

    #[test]
    fn test_standard_registry_has_every_module() {
        let calc = calc();
        assert_eq!(
            calc.categories(),
            vec!["base", "matrix", "polynomial", "statistics", "units", "vector"]
        );
        assert_eq!(calc.registry().len(), 22);
    }

    #[test]
    fn test_matrix_times_inverse_is_identity() {
        let calc = calc();
        let samples = [
            nested(&[&[3.0]]),
            nested(&[&[4.0, 7.0], &[2.0, 6.0]]),
            nested(&[&[1.0, 2.0, 3.0], &[0.0, 1.0, 4.0], &[5.0, 6.0, 0.0]]),
        ];
        for a in samples {
            let inv = calc.call("inverse", &[a.clone()]);
            assert!(!inv.is_error(), "{}", inv);
            let product = calc.call("matmul", &[a, inv]);
            let rows = rows_of(&product);
            for (i, row) in rows.iter().enumerate() {
                for (j, x) in row.iter().enumerate() {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert!((x - expected).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_add_then_subtract() {
        let calc = calc();
        let a = nested(&[&[1.25, -3.0], &[0.1, 9.0]]);
        let b = nested(&[&[7.0, 0.2], &[-5.5, 1e-3]]);
        let sum = calc.call("mat_add", &[a, b.clone()]);
        let back = calc.call("mat_sub", &[sum, b]);
        let expected = [[1.25, -3.0], [0.1, 9.0]];
        for (row, exp) in rows_of(&back).iter().zip(expected) {
            for (x, e) in row.iter().zip(exp) {
                assert!((x - e).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_identical_rows_determinant() {
        let r = calc().call("determinant", &[nested(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[1.0, 2.0, 3.0]])]);
        assert_eq!(r, Value::Number(0.0));
    }

    #[test]
    fn test_base_conversions() {
        let calc = calc();
        assert_eq!(calc.call("convert_base", &args!["A", "hexadecimal", "decimal"]), Value::from("10"));
        assert_eq!(calc.call("convert_base", &args!["1010", "binary", "decimal"]), Value::from("10"));
        assert_eq!(calc.call("convert_base", &args!["", "decimal", "binary"]), Value::from(""));
        assert_eq!(calc.call("convert_base", &args!["G", "hexadecimal", "decimal"]), Value::from(""));
    }

    #[test]
    fn test_base_round_trip() {
        let calc = calc();
        for v in ["0", "7", "42", "255", "1000000", "98765432109876543210"] {
            let hex = calc.call("convert_base", &args![v, "decimal", "hexadecimal"]);
            let back = calc.call("convert_base", &[hex, "hexadecimal".into(), "decimal".into()]);
            assert_eq!(back, Value::from(v));
        }
    }

    #[test]
    fn test_quadratic() {
        let calc = calc();
        let r = calc.call("solve_quadratic", &args![1.0, -3.0, 2.0]);
        assert_eq!(r.get("roots"), Value::List(vec!["2.0000".into(), "1.0000".into()]));
        assert_eq!(r.get("discriminant"), Value::Number(1.0));
        assert_eq!(r.get("natureOfRoots"), Value::from("Two distinct real roots"));

        let r = calc.call("solve_quadratic", &args![1.0, 2.0, 5.0]);
        assert_eq!(
            r.get("roots"),
            Value::List(vec!["-1.0000 + 2.0000i".into(), "-1.0000 - 2.0000i".into()])
        );
    }

    #[test]
    fn test_statistics() {
        let r = calc().call("statistics", &[Value::numbers(&[1.0, 2.0, 2.0, 3.0])]);
        assert_eq!(r.get("mean"), Value::Number(2.0));
        assert_eq!(r.get("median"), Value::Number(2.0));
        assert_eq!(r.get("mode"), Value::numbers(&[2.0]));
        assert_eq!(r.get("variance"), Value::Number(0.5));
        assert_eq!(r.get("count"), Value::Number(4.0));
        assert_eq!(r.get("sum"), Value::Number(8.0));
    }

    #[test]
    fn test_temperature() {
        let calc = calc();
        let r = calc.call("convert_units", &args![0.0, "celsius", "fahrenheit"]);
        assert_eq!(r.get("value"), Value::Number(32.0));
        let r = calc.call("convert_units", &args![100.0, "celsius", "kelvin"]);
        assert_eq!(r.get("value"), Value::Number(373.15));
    }

    #[test]
    fn test_angle() {
        let calc = calc();
        let r = calc.call("angle", &[Value::numbers(&[1.0, 0.0, 0.0]), Value::numbers(&[0.0, 1.0, 0.0])]);
        assert_eq!(r.get("degrees"), Value::Number(90.0));
        let r = calc.call("angle", &[Value::numbers(&[0.0, 0.0, 0.0]), Value::numbers(&[5.0, 1.0, 2.0])]);
        assert_eq!(r.as_error().map(|e| e.code.as_str()), Some(codes::ZERO_VECTOR));
    }

    #[test]
    fn test_precision_only_changes_display() {
        let calc = Calculator::with_standard_library().with_precision(2);
        let r = calc.call("inverse", &[nested(&[&[3.0]])]);
        assert_eq!(r.get("display"), Value::from("[[0.33]]"));
        assert_eq!(rows_of(&r), vec![vec![1.0 / 3.0]]);
    }

    #[test]
    fn test_unknown_function_suggests() {
        let r = calc().call("determinent", &[]);
        let err = r.as_error().unwrap();
        assert_eq!(err.code, codes::UNDEFINED_FUNC);
        assert!(err.suggestion.as_deref().unwrap_or("").contains("determinant"));
    }

    #[test]
    fn test_help_and_listing() {
        let calc = calc();
        let help = calc.help(Some("solve_cubic"));
        assert_eq!(help.get("category"), Value::from("polynomial"));
        let vector_fns = calc.list_functions(Some("vector"));
        assert_eq!(vector_fns.as_list().map(|l| l.len()), Some(5));
    }

    #[test]
    fn test_results_serialize() {
        let r = calc().call("solve_quadratic", &args![0.0, 0.0, 1.0]);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("No solution"));
    }

    #[test]
    fn test_args_macro() {
        let a = args![1.0, "x", true];
        assert_eq!(a, vec![Value::Number(1.0), Value::Text("x".into()), Value::Bool(true)]);
        assert!(args![].is_empty());
    }
}
