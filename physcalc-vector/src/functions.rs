//! Vector functions: vec_add, vec_sub, dot, cross, angle

use physcalc_plugin::prelude::*;
use physcalc_core::to_fixed;
use crate::vector::{self, Dimension, Vector3};

/// Extract a vector from a 2- or 3-element list, or from a Vector object
/// produced by another vector function.
pub fn extract_vector(value: &Value, func: &str, arg: &str) -> Result<(Vector3, Dimension), CalcError> {
    match value {
        Value::List(items) => {
            let mut c = [0.0; 3];
            if items.len() != 2 && items.len() != 3 {
                return Err(CalcError::new(
                    codes::DIMENSION_MISMATCH,
                    format!("{}: {} must have 2 or 3 components, got {}", func, arg, items.len()),
                ).in_function(func));
            }
            for (i, item) in items.iter().enumerate() {
                c[i] = item.as_number().ok_or_else(|| {
                    CalcError::arg_type(func, arg, "List of Number", item.type_name())
                })?;
            }
            let dim = if items.len() == 2 { Dimension::Two } else { Dimension::Three };
            Ok((Vector3::new(c[0], c[1], c[2]), dim))
        }
        Value::Object(obj) if obj.get("type") == Some(&Value::Text("Vector".to_string())) => {
            let component = |key: &str| -> Result<f64, CalcError> {
                obj.get(key)
                    .and_then(Value::as_number)
                    .ok_or_else(|| CalcError::arg_type(func, arg, "Vector", "Object"))
            };
            let dim = match obj.get("dimension").and_then(Value::as_number) {
                Some(n) if n == 2.0 => Dimension::Two,
                _ => Dimension::Three,
            };
            Ok((Vector3::new(component("x")?, component("y")?, component("z")?), dim))
        }
        Value::Error(e) => Err(e.clone()),
        _ => Err(CalcError::arg_type(func, arg, "Vector", value.type_name())),
    }
}

/// `{type, x, y, z, dimension, display}`
pub fn vector_to_value(v: &Vector3, dim: Dimension) -> Value {
    Value::object([
        ("type", Value::Text("Vector".to_string())),
        ("x", Value::Number(v.x)),
        ("y", Value::Number(v.y)),
        ("z", Value::Number(v.z)),
        ("dimension", Value::Number(dim.components() as f64)),
        ("display", Value::Text(v.display(dim))),
    ])
}

fn extract_pair(args: &[Value], func: &str) -> Result<(Vector3, Vector3, Dimension), CalcError> {
    if args.len() != 2 {
        return Err(CalcError::arg_count(func, 2, args.len()));
    }
    let (a, da) = extract_vector(&args[0], func, "a")?;
    let (b, db) = extract_vector(&args[1], func, "b")?;
    Ok((a, b, da.combine(db)))
}

static PAIR_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("a", "Vector", "First vector: [x, y] or [x, y, z]"),
    ArgMeta::required("b", "Vector", "Second vector"),
];

// ============ vec_add ============

pub struct VecAddFn;

static VEC_ADD_EXAMPLES: [&str; 2] = [
    "vec_add([1, 2, 3], [4, 5, 6]) → ( 5.0000, 7.0000, 9.0000 )",
    "vec_add([1, 2], [3, 4]) → ( 4.0000, 6.0000 )",
];
static VEC_ADD_RELATED: [&str; 1] = ["vec_sub"];

impl FunctionPlugin for VecAddFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "vec_add",
            description: "Component-wise vector sum",
            usage: "vec_add(a, b)",
            args: &PAIR_ARGS,
            returns: "Vector",
            examples: &VEC_ADD_EXAMPLES,
            category: "vector",
            related: &VEC_ADD_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match extract_pair(args, "vec_add") {
            Ok((a, b, dim)) => vector_to_value(&vector::add(&a, &b), dim),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ vec_sub ============

pub struct VecSubFn;

static VEC_SUB_EXAMPLES: [&str; 1] = ["vec_sub([4, 5, 6], [1, 2, 3]) → ( 3.0000, 3.0000, 3.0000 )"];
static VEC_SUB_RELATED: [&str; 1] = ["vec_add"];

impl FunctionPlugin for VecSubFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "vec_sub",
            description: "Component-wise vector difference",
            usage: "vec_sub(a, b)",
            args: &PAIR_ARGS,
            returns: "Vector",
            examples: &VEC_SUB_EXAMPLES,
            category: "vector",
            related: &VEC_SUB_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match extract_pair(args, "vec_sub") {
            Ok((a, b, dim)) => vector_to_value(&vector::subtract(&a, &b), dim),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ dot ============

pub struct DotFn;

static DOT_EXAMPLES: [&str; 2] = [
    "dot([1, 2, 3], [4, 5, 6]) → 32",
    "dot([1, 0], [0, 1]) → 0",
];
static DOT_RELATED: [&str; 2] = ["cross", "angle"];

impl FunctionPlugin for DotFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "dot",
            description: "Dot (scalar) product of two vectors",
            usage: "dot(a, b)",
            args: &PAIR_ARGS,
            returns: "Number",
            examples: &DOT_EXAMPLES,
            category: "vector",
            related: &DOT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match extract_pair(args, "dot") {
            Ok((a, b, _)) => Value::Number(vector::dot(&a, &b)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ cross ============

pub struct CrossFn;

static CROSS_EXAMPLES: [&str; 1] = ["cross([1, 0, 0], [0, 1, 0]) → ( 0.0000, 0.0000, 1.0000 )"];
static CROSS_RELATED: [&str; 1] = ["dot"];

impl FunctionPlugin for CrossFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "cross",
            description: "Cross product of two 3D vectors",
            usage: "cross(a, b)",
            args: &PAIR_ARGS,
            returns: "Vector",
            examples: &CROSS_EXAMPLES,
            category: "vector",
            related: &CROSS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 2 {
            return Value::Error(CalcError::arg_count("cross", 2, args.len()));
        }
        let (a, da) = match extract_vector(&args[0], "cross", "a") { Ok(v) => v, Err(e) => return Value::Error(e) };
        let (b, db) = match extract_vector(&args[1], "cross", "b") { Ok(v) => v, Err(e) => return Value::Error(e) };

        if da == Dimension::Two || db == Dimension::Two {
            return Value::Error(
                CalcError::new(codes::DIMENSION_MISMATCH, "Cross product is only defined for 3D vectors.")
                    .with_suggestion("Pass [x, y, z] for both vectors")
                    .in_function("cross"),
            );
        }

        vector_to_value(&vector::cross(&a, &b), Dimension::Three)
    }
}

// ============ angle ============

pub struct AngleFn;

static ANGLE_EXAMPLES: [&str; 2] = [
    "angle([1, 0, 0], [0, 1, 0]) → 90°",
    "angle([1, 0], [1, 1]) → 45°",
];
static ANGLE_RELATED: [&str; 1] = ["dot"];

impl FunctionPlugin for AngleFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "angle",
            description: "Angle between two non-zero vectors, in degrees",
            usage: "angle(a, b)",
            args: &PAIR_ARGS,
            returns: "Object {degrees, display}",
            examples: &ANGLE_EXAMPLES,
            category: "vector",
            related: &ANGLE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let (a, b, _) = match extract_pair(args, "angle") { Ok(p) => p, Err(e) => return Value::Error(e) };

        match vector::angle_between(&a, &b) {
            Ok(degrees) => Value::object([
                ("degrees", Value::Number(degrees)),
                ("display", Value::Text(format!("{}°", to_fixed(degrees, 2)))),
            ]),
            Err(e) => Value::Error(CalcError::from(e).in_function("angle")),
        }
    }
}
