//! Base conversion functions for the registry

use physcalc_plugin::prelude::*;
use crate::radix::{convert, convert_all, Radix};

fn extract_digits<'a>(value: &'a Value, func: &str) -> Result<&'a str, CalcError> {
    value.as_text()
        .ok_or_else(|| CalcError::arg_type(func, "value", "Text", value.type_name()))
}

fn extract_radix(value: &Value, func: &str, arg: &str) -> Result<Radix, CalcError> {
    let parsed = match value {
        Value::Text(s) => s.parse::<Radix>().ok(),
        Value::Number(n) if n.fract() == 0.0 && *n >= 0.0 => Radix::from_value(*n as u32),
        Value::Number(_) => None,
        other => return Err(CalcError::arg_type(func, arg, "Text | Number", other.type_name())),
    };
    parsed.ok_or_else(|| {
        CalcError::new(codes::UNKNOWN_RADIX, format!("{}() argument '{}': unknown radix {}", func, arg, value))
            .with_suggestion("Use binary, octal, decimal or hexadecimal (or 2, 8, 10, 16)")
            .in_function(func)
    })
}

// ============ convert_base ============

pub struct ConvertBase;

static CONVERT_BASE_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Text", "Digit string written in the source radix"),
    ArgMeta::required("from", "Text | Number", "Source radix: binary, octal, decimal, hexadecimal"),
    ArgMeta::required("to", "Text | Number", "Target radix"),
];

static CONVERT_BASE_EXAMPLES: [&str; 3] = [
    "convert_base(\"A\", \"hexadecimal\", \"decimal\") → \"10\"",
    "convert_base(\"1010\", \"binary\", \"decimal\") → \"10\"",
    "convert_base(\"G\", \"hexadecimal\", \"decimal\") → \"\"",
];

static CONVERT_BASE_RELATED: [&str; 1] = ["convert_base_all"];

impl FunctionPlugin for ConvertBase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_base",
            description: "Convert a digit string between binary, octal, decimal and hexadecimal. Invalid digits yield \"\"",
            usage: "convert_base(value, from, to)",
            args: &CONVERT_BASE_ARGS,
            returns: "Text",
            examples: &CONVERT_BASE_EXAMPLES,
            category: "base",
            related: &CONVERT_BASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 3 {
            return Value::Error(CalcError::arg_count("convert_base", 3, args.len()));
        }

        let digits = match extract_digits(&args[0], "convert_base") {
            Ok(d) => d,
            Err(e) => return Value::Error(e),
        };
        let from = match extract_radix(&args[1], "convert_base", "from") {
            Ok(r) => r,
            Err(e) => return Value::Error(e),
        };
        let to = match extract_radix(&args[2], "convert_base", "to") {
            Ok(r) => r,
            Err(e) => return Value::Error(e),
        };

        Value::Text(convert(digits, from, to))
    }
}

// ============ convert_base_all ============

pub struct ConvertBaseAll;

static CONVERT_BASE_ALL_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Text", "Digit string written in the source radix"),
    ArgMeta::required("from", "Text | Number", "Source radix"),
];

static CONVERT_BASE_ALL_EXAMPLES: [&str; 1] = [
    "convert_base_all(\"10\", \"decimal\") → {decimal: \"10\", binary: \"1010\", octal: \"12\", hexadecimal: \"A\"}",
];

static CONVERT_BASE_ALL_RELATED: [&str; 1] = ["convert_base"];

impl FunctionPlugin for ConvertBaseAll {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_base_all",
            description: "Render a digit string in all four radices",
            usage: "convert_base_all(value, from)",
            args: &CONVERT_BASE_ALL_ARGS,
            returns: "Object {decimal, binary, octal, hexadecimal}",
            examples: &CONVERT_BASE_ALL_EXAMPLES,
            category: "base",
            related: &CONVERT_BASE_ALL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 2 {
            return Value::Error(CalcError::arg_count("convert_base_all", 2, args.len()));
        }

        let digits = match extract_digits(&args[0], "convert_base_all") {
            Ok(d) => d,
            Err(e) => return Value::Error(e),
        };
        let from = match extract_radix(&args[1], "convert_base_all", "from") {
            Ok(r) => r,
            Err(e) => return Value::Error(e),
        };

        let r = convert_all(digits, from);
        Value::object([
            (Radix::Decimal.name(), Value::Text(r.decimal)),
            (Radix::Binary.name(), Value::Text(r.binary)),
            (Radix::Octal.name(), Value::Text(r.octal)),
            (Radix::Hexadecimal.name(), Value::Text(r.hexadecimal)),
        ])
    }
}
