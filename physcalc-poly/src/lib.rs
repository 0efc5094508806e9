//! PhysCalc Poly - quadratic and cubic equation solver
//!
//! Roots are returned as strings rounded to 4 decimals; complex roots use
//! the form `"re ± imi"`. Both solvers are total over finite coefficients.

mod solver;
mod functions;

pub use solver::{
    format_complex, solve_cubic, solve_quadratic, CubicResult, QuadraticResult, RootNature,
    IMAGINARY_EPSILON, ROOT_DECIMALS,
};

use physcalc_plugin::PluginRegistry;

/// Load polynomial functions into registry
pub fn load_poly_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(functions::SolveQuadratic)
        .with_function(functions::SolveCubic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use physcalc_core::{codes, Value};
    use physcalc_plugin::EvalContext;
    use std::sync::Arc;

    fn call(name: &str, args: &[Value]) -> Value {
        let registry = Arc::new(load_poly_library(PluginRegistry::new()));
        let ctx = EvalContext::new(registry.clone());
        registry.call_function(name, args, &ctx)
    }

    fn texts(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| Value::Text(s.to_string())).collect())
    }

    #[test]
    fn test_solve_quadratic_plugin() {
        let r = call("solve_quadratic", &[1.0.into(), (-3.0).into(), 2.0.into()]);
        assert_eq!(r.get("roots"), texts(&["2.0000", "1.0000"]));
        assert_eq!(r.get("discriminant"), Value::Number(1.0));
        assert_eq!(r.get("natureOfRoots"), Value::Text("Two distinct real roots".to_string()));
    }

    #[test]
    fn test_linear_has_null_discriminant() {
        let r = call("solve_quadratic", &[0.0.into(), 2.0.into(), (-4.0).into()]);
        assert_eq!(r.get("discriminant"), Value::Null);
        assert_eq!(r.get("natureOfRoots"), Value::Text("Linear equation".to_string()));
    }

    #[test]
    fn test_solve_cubic_plugin() {
        let r = call("solve_cubic", &[1.0.into(), 0.0.into(), 0.0.into(), (-1.0).into()]);
        assert_eq!(r.get("roots"), texts(&["1.0000", "-0.5000 + 0.8660i", "-0.5000 - 0.8660i"]));
    }

    #[test]
    fn test_numeric_text_coefficients() {
        let r = call("solve_quadratic", &["1".into(), "-3".into(), " 2 ".into()]);
        assert_eq!(r.get("roots"), texts(&["2.0000", "1.0000"]));
    }

    #[test]
    fn test_bad_arguments() {
        let r = call("solve_quadratic", &[1.0.into(), 2.0.into()]);
        assert_eq!(r.as_error().map(|e| e.code.as_str()), Some(codes::ARG_COUNT));

        let r = call("solve_cubic", &[1.0.into(), "x".into(), 0.0.into(), 0.0.into()]);
        assert_eq!(r.as_error().map(|e| e.code.as_str()), Some(codes::PARSE_ERROR));

        let r = call("solve_cubic", &[1.0.into(), Value::Bool(true), 0.0.into(), 0.0.into()]);
        assert_eq!(r.as_error().map(|e| e.code.as_str()), Some(codes::ARG_TYPE));

        let r = call("solve_quadratic", &[f64::NAN.into(), 1.0.into(), 1.0.into()]);
        assert_eq!(r.as_error().map(|e| e.code.as_str()), Some(codes::DOMAIN_ERROR));
    }
}
