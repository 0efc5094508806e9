//! Unit functions: convert_units, list_units

use physcalc_plugin::prelude::*;
use crate::unit::{format_converted, UnitCategory, UnitError};
use crate::units::UNITS;

fn extract_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, CalcError> {
    match value {
        Value::Text(s) => Ok(s.as_str()),
        Value::Error(e) => Err(e.clone()),
        other => Err(CalcError::arg_type(func, arg, "Text", other.type_name())),
    }
}

fn category_value(cat: &UnitCategory) -> Value {
    Value::object([
        ("key", Value::Text(cat.key.clone())),
        ("name", Value::Text(cat.name.clone())),
        ("baseUnit", Value::Text(cat.base_unit.clone())),
        ("units", Value::List(cat.unit_names().into_iter().map(Value::from).collect())),
    ])
}

fn unknown_unit(unit: &str, category: Option<&UnitCategory>) -> CalcError {
    match category {
        Some(cat) => CalcError::from(UnitError::UnknownUnit {
            unit: unit.to_string(),
            category: cat.key.clone(),
        })
        .with_suggestion(format!("{} units: {}", cat.name, cat.unit_names().join(", "))),
        None => CalcError::new(codes::UNKNOWN_UNIT, format!("Unknown unit '{}'", unit))
            .with_suggestion("Use list_units() to see available units"),
    }
}

// ============ convert_units ============

pub struct ConvertUnits;

static CONVERT_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from", "Text", "Source unit name, e.g. \"celsius\""),
    ArgMeta::required("to", "Text", "Target unit name in the same category"),
    ArgMeta::optional("category", "Text", "Category key; inferred from the source unit when omitted", "inferred"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert_units(0, \"celsius\", \"fahrenheit\") → 32",
    "convert_units(100, \"celsius\", \"kelvin\") → 373.15",
    "convert_units(1, \"mile\", \"kilometer\", \"length\") → 1.60934",
];

static CONVERT_RELATED: [&str; 1] = ["list_units"];

impl FunctionPlugin for ConvertUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_units",
            description: "Convert a value between two units of the same category",
            usage: "convert_units(value, from, to, [category])",
            args: &CONVERT_ARGS,
            returns: "Object {value, display, from, to, category}",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 3 || args.len() > 4 {
            return Value::Error(CalcError::arg_count("convert_units", 3, args.len()));
        }

        let value = match &args[0] {
            Value::Number(n) => *n,
            Value::Text(s) => match parse_number(s) {
                Ok(n) => n,
                Err(e) => return Value::Error(CalcError::from(e).in_function("convert_units")),
            },
            Value::Error(e) => return Value::Error(e.clone()),
            other => return Value::Error(CalcError::arg_type("convert_units", "value", "Number", other.type_name())),
        };
        let from = match extract_text(&args[1], "convert_units", "from") { Ok(s) => s, Err(e) => return Value::Error(e) };
        let to = match extract_text(&args[2], "convert_units", "to") { Ok(s) => s, Err(e) => return Value::Error(e) };

        let category = match args.get(3) {
            Some(arg) => {
                let key = match extract_text(arg, "convert_units", "category") { Ok(s) => s, Err(e) => return Value::Error(e) };
                match UNITS.category(key) {
                    Some(cat) => cat,
                    None => {
                        return Value::Error(
                            CalcError::from(UnitError::UnknownCategory(key.to_string()))
                                .with_suggestion(format!("Categories: {}", UNITS.keys().join(", ")))
                                .in_function("convert_units"),
                        )
                    }
                }
            }
            None => match UNITS.category_of(from) {
                Some(cat) => cat,
                None => return Value::Error(unknown_unit(from, None).in_function("convert_units")),
            },
        };

        match crate::unit::convert(value, from, to, &category.units) {
            Some(result) => Value::object([
                ("value", Value::Number(result)),
                ("display", Value::Text(format_converted(result))),
                ("from", Value::Text(from.to_string())),
                ("to", Value::Text(to.to_string())),
                ("category", Value::Text(category.key.clone())),
            ]),
            None => {
                let missing = if category.unit(from).is_none() { from } else { to };
                Value::Error(unknown_unit(missing, Some(category)).in_function("convert_units"))
            }
        }
    }
}

// ============ list_units ============

pub struct ListUnits;

static LIST_ARGS: [ArgMeta; 1] = [
    ArgMeta::optional("category", "Text", "Category key (length, mass, temperature, force, energy)", "all"),
];

static LIST_EXAMPLES: [&str; 2] = [
    "list_units() → all categories with their units",
    "list_units(\"temperature\") → {key: temperature, baseUnit: celsius, units: [celsius, fahrenheit, kelvin]}",
];

static LIST_RELATED: [&str; 1] = ["convert_units"];

impl FunctionPlugin for ListUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_units",
            description: "List unit categories and the units in each",
            usage: "list_units([category])",
            args: &LIST_ARGS,
            returns: "List | Object",
            examples: &LIST_EXAMPLES,
            category: "units",
            related: &LIST_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match args {
            [] => Value::List(UNITS.categories().iter().map(category_value).collect()),
            [arg] => {
                let key = match extract_text(arg, "list_units", "category") { Ok(s) => s, Err(e) => return Value::Error(e) };
                match UNITS.category(key) {
                    Some(cat) => category_value(cat),
                    None => Value::Error(
                        CalcError::from(UnitError::UnknownCategory(key.to_string()))
                            .with_suggestion(format!("Categories: {}", UNITS.keys().join(", ")))
                            .in_function("list_units"),
                    ),
                }
            }
            _ => Value::Error(CalcError::arg_count("list_units", 1, args.len())),
        }
    }
}
