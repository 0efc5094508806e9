//! Conversions between `Value` and `Matrix`

use physcalc_core::{CalcError, Value};
use crate::types::{Matrix, MatrixError};

/// Extract a matrix from a Value (either a Matrix object or nested list)
pub fn extract_matrix(value: &Value, func: &str, arg: &str) -> Result<Matrix, CalcError> {
    match value {
        Value::Object(obj) => {
            if let (Some(Value::Text(t)), Some(Value::List(data))) = (obj.get("type"), obj.get("data")) {
                if t == "Matrix" {
                    return extract_from_nested_list(data, func, arg);
                }
            }
            Err(CalcError::arg_type(func, arg, "Matrix", "Object"))
        }
        Value::List(rows) => extract_from_nested_list(rows, func, arg),
        _ => Err(CalcError::arg_type(func, arg, "Matrix", value.type_name())),
    }
}

fn extract_from_nested_list(rows: &[Value], func: &str, arg: &str) -> Result<Matrix, CalcError> {
    let invalid = |detail: String| -> CalcError {
        CalcError::from(MatrixError::InvalidFormat(format!("{}: {}", arg, detail))).in_function(func)
    };

    let mut data = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let cells = row
            .as_list()
            .ok_or_else(|| invalid(format!("row {} must be a List, got {}", i, row.type_name())))?;
        let mut out = Vec::with_capacity(cells.len());
        for (j, cell) in cells.iter().enumerate() {
            let x = cell.as_number().ok_or_else(|| {
                invalid(format!("element ({}, {}) must be a Number, got {}", i, j, cell.type_name()))
            })?;
            out.push(x);
        }
        data.push(out);
    }

    Matrix::new(data).map_err(|e| CalcError::from(e).in_function(func))
}

/// Build the `{type, rows, cols, data, display}` object returned by matrix functions
pub fn matrix_to_value(m: &Matrix, precision: usize) -> Value {
    let data = Value::List(m.as_rows().iter().map(|r| Value::numbers(r)).collect());
    Value::object([
        ("type", Value::Text("Matrix".to_string())),
        ("rows", Value::Number(m.rows() as f64)),
        ("cols", Value::Number(m.cols() as f64)),
        ("data", data),
        ("display", Value::Text(m.display(precision))),
    ])
}
