//! Polynomial functions: solve_quadratic, solve_cubic

use physcalc_plugin::prelude::*;
use crate::solver::{solve_cubic, solve_quadratic, QuadraticResult};

/// Extract one real coefficient per name, in order
fn extract_coefficients<const N: usize>(
    args: &[Value],
    func: &str,
    names: [&str; N],
) -> Result<[f64; N], CalcError> {
    if args.len() != N {
        return Err(CalcError::arg_count(func, N, args.len()));
    }
    let mut out = [0.0; N];
    for (i, (arg, name)) in args.iter().zip(names).enumerate() {
        out[i] = match arg {
            Value::Number(n) if n.is_finite() => *n,
            Value::Text(s) => parse_number(s).map_err(|e| CalcError::from(e).in_function(func))?,
            Value::Number(n) => {
                return Err(CalcError::domain_error(format!(
                    "{}: coefficient {} must be finite, got {}", func, name, n
                )).in_function(func))
            }
            Value::Error(e) => return Err(e.clone()),
            other => return Err(CalcError::arg_type(func, name, "Number", other.type_name())),
        };
    }
    Ok(out)
}

fn roots_value(roots: Vec<String>) -> Value {
    Value::List(roots.into_iter().map(Value::Text).collect())
}

fn quadratic_value(r: QuadraticResult) -> Value {
    Value::object([
        ("roots", roots_value(r.roots)),
        ("discriminant", r.discriminant.map(Value::Number).unwrap_or(Value::Null)),
        ("natureOfRoots", Value::Text(r.nature_of_roots.label().to_string())),
    ])
}

// ============ solve_quadratic ============

pub struct SolveQuadratic;

static QUADRATIC_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("a", "Number", "Coefficient of x²"),
    ArgMeta::required("b", "Number", "Coefficient of x"),
    ArgMeta::required("c", "Number", "Constant term"),
];

static QUADRATIC_EXAMPLES: [&str; 3] = [
    "solve_quadratic(1, -3, 2) → roots [\"2.0000\", \"1.0000\"]",
    "solve_quadratic(1, 2, 5) → roots [\"-1.0000 + 2.0000i\", \"-1.0000 - 2.0000i\"]",
    "solve_quadratic(0, 2, -4) → roots [\"2.0000\"], Linear equation",
];

static QUADRATIC_RELATED: [&str; 1] = ["solve_cubic"];

impl FunctionPlugin for SolveQuadratic {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "solve_quadratic",
            description: "Roots of a·x² + b·x + c = 0 with discriminant and root classification",
            usage: "solve_quadratic(a, b, c)",
            args: &QUADRATIC_ARGS,
            returns: "Object {roots, discriminant, natureOfRoots}",
            examples: &QUADRATIC_EXAMPLES,
            category: "polynomial",
            related: &QUADRATIC_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match extract_coefficients(args, "solve_quadratic", ["a", "b", "c"]) {
            Ok([a, b, c]) => quadratic_value(solve_quadratic(a, b, c)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ solve_cubic ============

pub struct SolveCubic;

static CUBIC_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("a", "Number", "Coefficient of x³"),
    ArgMeta::required("b", "Number", "Coefficient of x²"),
    ArgMeta::required("c", "Number", "Coefficient of x"),
    ArgMeta::required("d", "Number", "Constant term"),
];

static CUBIC_EXAMPLES: [&str; 2] = [
    "solve_cubic(1, -6, 11, -6) → roots [\"3.0000\", \"1.0000\", \"2.0000\"]",
    "solve_cubic(1, 0, 0, -1) → roots [\"1.0000\", \"-0.5000 + 0.8660i\", \"-0.5000 - 0.8660i\"]",
];

static CUBIC_RELATED: [&str; 1] = ["solve_quadratic"];

impl FunctionPlugin for SolveCubic {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "solve_cubic",
            description: "Roots of a·x³ + b·x² + c·x + d = 0 (Cardano / trigonometric method)",
            usage: "solve_cubic(a, b, c, d)",
            args: &CUBIC_ARGS,
            returns: "Object {roots}",
            examples: &CUBIC_EXAMPLES,
            category: "polynomial",
            related: &CUBIC_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match extract_coefficients(args, "solve_cubic", ["a", "b", "c", "d"]) {
            Ok([a, b, c, d]) => Value::object([("roots", roots_value(solve_cubic(a, b, c, d).roots))]),
            Err(e) => Value::Error(e),
        }
    }
}
