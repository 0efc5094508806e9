//! PhysCalc Plugin System
//!
//! Every calculator operation is exposed as a `FunctionPlugin`: a pure
//! function over `Value` arguments with metadata for help and listing.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::{EvalContext, DEFAULT_PRECISION};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry, EvalContext};
    pub use physcalc_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::sync::Arc;

    struct Double;

    static DOUBLE_ARGS: [ArgMeta; 1] = [ArgMeta::required("x", "Number", "Value to double")];

    impl FunctionPlugin for Double {
        fn meta(&self) -> FunctionMeta {
            FunctionMeta {
                name: "double",
                description: "Multiply by two",
                usage: "double(x)",
                args: &DOUBLE_ARGS,
                returns: "Number",
                examples: &["double(2) → 4"],
                category: "test",
                related: &[],
            }
        }

        fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
            match args.first().and_then(Value::as_number) {
                Some(x) => Value::Number(x * 2.0),
                None => Value::Error(CalcError::arg_count("double", 1, args.len())),
            }
        }
    }

    fn registry() -> Arc<PluginRegistry> {
        Arc::new(PluginRegistry::new().with_function(Double))
    }

    #[test]
    fn test_call_registered_function() {
        let reg = registry();
        let ctx = EvalContext::new(reg.clone());
        assert_eq!(reg.call_function("double", &[Value::Number(2.5)], &ctx), Value::Number(5.0));
        assert_eq!(reg.call_function("DOUBLE", &[Value::Number(1.0)], &ctx), Value::Number(2.0));
    }

    #[test]
    fn test_unknown_function_suggests_similar() {
        let reg = registry();
        let ctx = EvalContext::new(reg.clone());
        let result = reg.call_function("doubl", &[], &ctx);
        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::UNDEFINED_FUNC);
        assert!(err.suggestion.as_deref().unwrap_or("").contains("double"));
    }

    #[test]
    fn test_help_for_function() {
        let reg = registry();
        let help = reg.help(Some("double"));
        assert_eq!(help.get("usage"), Value::Text("double(x)".to_string()));
        assert!(reg.help(Some("nope")).is_error());
    }

    #[test]
    fn test_list_functions_by_category() {
        let reg = registry();
        assert_eq!(reg.list_functions(Some("test")).as_list().map(|l| l.len()), Some(1));
        assert_eq!(reg.list_functions(Some("other")).as_list().map(|l| l.len()), Some(0));
        assert_eq!(reg.categories(), vec!["test"]);
    }

    #[test]
    fn test_context_precision() {
        let ctx = EvalContext::new(registry());
        assert_eq!(ctx.precision, crate::DEFAULT_PRECISION);
        assert_eq!(ctx.with_precision(6).precision, 6);
    }

    #[test]
    fn test_meta_serializes() {
        let json = serde_json::to_value(Double.meta()).unwrap();
        assert_eq!(json["name"], "double");
        assert_eq!(json["args"][0]["optional"], false);
        assert!(json["args"][0].get("default").is_none());
    }
}
