//! Matrix functions: mat_add, mat_sub, matmul, determinant, inverse

use physcalc_plugin::prelude::*;
use crate::engine;
use crate::helpers::{extract_matrix, matrix_to_value};
use crate::types::{Matrix, MatrixError};

static BINARY_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("a", "Matrix", "Left matrix (nested list of rows)"),
    ArgMeta::required("b", "Matrix", "Right matrix"),
];

static UNARY_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("matrix", "Matrix", "Square matrix, at most 3×3"),
];

fn binary(
    name: &str,
    args: &[Value],
    ctx: &EvalContext,
    op: fn(&Matrix, &Matrix) -> Result<Matrix, MatrixError>,
) -> Value {
    if args.len() != 2 {
        return Value::Error(CalcError::arg_count(name, 2, args.len()));
    }
    let a = match extract_matrix(&args[0], name, "a") { Ok(m) => m, Err(e) => return Value::Error(e) };
    let b = match extract_matrix(&args[1], name, "b") { Ok(m) => m, Err(e) => return Value::Error(e) };

    match op(&a, &b) {
        Ok(m) => matrix_to_value(&m, ctx.precision),
        Err(e) => Value::Error(CalcError::from(e).in_function(name)),
    }
}

// ============ mat_add ============

pub struct MatAddFn;

static MAT_ADD_EXAMPLES: [&str; 1] = ["mat_add([[1,2],[3,4]], [[10,20],[30,40]]) → [[11, 22], [33, 44]]"];
static MAT_ADD_RELATED: [&str; 2] = ["mat_sub", "matmul"];

impl FunctionPlugin for MatAddFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "mat_add",
            description: "Element-wise matrix addition",
            usage: "mat_add(a, b)",
            args: &BINARY_ARGS,
            returns: "Matrix",
            examples: &MAT_ADD_EXAMPLES,
            category: "matrix",
            related: &MAT_ADD_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        binary("mat_add", args, ctx, engine::add)
    }
}

// ============ mat_sub ============

pub struct MatSubFn;

static MAT_SUB_EXAMPLES: [&str; 1] = ["mat_sub([[5,5]], [[1,2]]) → [[4, 3]]"];
static MAT_SUB_RELATED: [&str; 1] = ["mat_add"];

impl FunctionPlugin for MatSubFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "mat_sub",
            description: "Element-wise matrix subtraction",
            usage: "mat_sub(a, b)",
            args: &BINARY_ARGS,
            returns: "Matrix",
            examples: &MAT_SUB_EXAMPLES,
            category: "matrix",
            related: &MAT_SUB_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        binary("mat_sub", args, ctx, engine::subtract)
    }
}

// ============ matmul ============

pub struct MatmulFn;

static MATMUL_EXAMPLES: [&str; 1] = ["matmul([[1,2,3]], [[4],[5],[6]]) → [[32]]"];
static MATMUL_RELATED: [&str; 2] = ["mat_add", "inverse"];

impl FunctionPlugin for MatmulFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matmul",
            description: "Matrix product; columns of a must equal rows of b",
            usage: "matmul(a, b)",
            args: &BINARY_ARGS,
            returns: "Matrix",
            examples: &MATMUL_EXAMPLES,
            category: "matrix",
            related: &MATMUL_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        binary("matmul", args, ctx, engine::multiply)
    }
}

// ============ determinant ============

pub struct DeterminantFn;

static DET_EXAMPLES: [&str; 2] = [
    "determinant([[1,2],[3,4]]) → -2",
    "determinant([[1,2,3],[4,5,6],[1,2,3]]) → 0",
];
static DET_RELATED: [&str; 1] = ["inverse"];

impl FunctionPlugin for DeterminantFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "determinant",
            description: "Determinant of a 1×1, 2×2 or 3×3 matrix",
            usage: "determinant(matrix)",
            args: &UNARY_ARGS,
            returns: "Number",
            examples: &DET_EXAMPLES,
            category: "matrix",
            related: &DET_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 1 {
            return Value::Error(CalcError::arg_count("determinant", 1, args.len()));
        }
        let m = match extract_matrix(&args[0], "determinant", "matrix") { Ok(m) => m, Err(e) => return Value::Error(e) };

        match engine::determinant(&m) {
            Ok(det) => Value::Number(det),
            Err(e) => Value::Error(CalcError::from(e).in_function("determinant")),
        }
    }
}

// ============ inverse ============

pub struct InverseFn;

static INVERSE_EXAMPLES: [&str; 1] = ["inverse([[4,7],[2,6]]) → [[0.6, -0.7], [-0.2, 0.4]]"];
static INVERSE_RELATED: [&str; 2] = ["determinant", "matmul"];

impl FunctionPlugin for InverseFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "inverse",
            description: "Inverse of a non-singular 1×1, 2×2 or 3×3 matrix",
            usage: "inverse(matrix)",
            args: &UNARY_ARGS,
            returns: "Matrix",
            examples: &INVERSE_EXAMPLES,
            category: "matrix",
            related: &INVERSE_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.len() != 1 {
            return Value::Error(CalcError::arg_count("inverse", 1, args.len()));
        }
        let m = match extract_matrix(&args[0], "inverse", "matrix") { Ok(m) => m, Err(e) => return Value::Error(e) };

        match engine::inverse(&m) {
            Ok(inv) => matrix_to_value(&inv, ctx.precision),
            Err(MatrixError::Singular) => Value::Error(
                CalcError::from(MatrixError::Singular)
                    .with_suggestion("Check the determinant; a zero determinant has no inverse")
                    .in_function("inverse"),
            ),
            Err(e) => Value::Error(CalcError::from(e).in_function("inverse")),
        }
    }
}
