//! Statistics functions: statistics, mean, median, mode, variance, std_dev

use physcalc_plugin::prelude::*;
use crate::summary::{calculate, Mode, Statistics};

/// Extract numbers from arguments, handling both varargs and List
pub fn extract_numbers(args: &[Value], func: &str) -> Result<Vec<f64>, CalcError> {
    let mut numbers = Vec::new();

    let mut push = |item: &Value| -> Result<(), CalcError> {
        match item {
            Value::Number(n) if n.is_finite() => {
                numbers.push(*n);
                Ok(())
            }
            Value::Number(n) => Err(CalcError::domain_error(format!(
                "{}() values must be finite, got {}", func, n
            )).in_function(func)),
            Value::Error(e) => Err(e.clone()),
            other => Err(CalcError::arg_type(func, "values", "Number", other.type_name())),
        }
    };

    for arg in args {
        match arg {
            Value::List(list) => {
                for item in list {
                    push(item)?;
                }
            }
            other => push(other)?,
        }
    }

    Ok(numbers)
}

fn mode_value(mode: &Mode) -> Value {
    match mode {
        Mode::Values(v) => Value::numbers(v),
        other => Value::Text(other.to_string()),
    }
}

fn statistics_value(s: &Statistics, precision: usize) -> Value {
    Value::object([
        ("mean", Value::Number(s.mean)),
        ("median", Value::Number(s.median)),
        ("mode", mode_value(&s.mode)),
        ("variance", Value::Number(s.variance)),
        ("standardDeviation", Value::Number(s.standard_deviation)),
        ("count", Value::Number(s.count as f64)),
        ("sum", Value::Number(s.sum)),
        ("display", Value::Text(s.display(precision))),
    ])
}

static VALUES_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("values", "List<Number> | Number...", "Sample values"),
];

// ============ statistics ============

pub struct StatisticsFn;

static STATISTICS_EXAMPLES: [&str; 2] = [
    "statistics([1, 2, 2, 3]) → {mean: 2, median: 2, mode: [2], variance: 0.5, ...}",
    "statistics() → {count: 0, mode: \"N/A\", ...}",
];

static STATISTICS_RELATED: [&str; 5] = ["mean", "median", "mode", "variance", "std_dev"];

impl FunctionPlugin for StatisticsFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "statistics",
            description: "Mean, median, mode, population variance, standard deviation, count and sum",
            usage: "statistics(values)",
            args: &VALUES_ARGS,
            returns: "Object",
            examples: &STATISTICS_EXAMPLES,
            category: "statistics",
            related: &STATISTICS_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        match extract_numbers(args, "statistics") {
            Ok(data) => statistics_value(&calculate(&data), ctx.precision),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ single-field functions ============

/// Function returning one field of `Statistics`
pub struct StatField {
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    returns: &'static str,
    examples: &'static [&'static str],
    pick: fn(&Statistics) -> Value,
}

static FIELD_RELATED: [&str; 1] = ["statistics"];

impl FunctionPlugin for StatField {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: self.name,
            description: self.description,
            usage: self.usage,
            args: &VALUES_ARGS,
            returns: self.returns,
            examples: self.examples,
            category: "statistics",
            related: &FIELD_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match extract_numbers(args, self.name) {
            Ok(data) => (self.pick)(&calculate(&data)),
            Err(e) => Value::Error(e),
        }
    }
}

pub const MEAN: StatField = StatField {
    name: "mean",
    description: "Arithmetic mean",
    usage: "mean(values)",
    returns: "Number",
    examples: &["mean(1, 2, 3, 4) → 2.5"],
    pick: |s| Value::Number(s.mean),
};

pub const MEDIAN: StatField = StatField {
    name: "median",
    description: "Middle value; mean of the two middle values for even counts",
    usage: "median(values)",
    returns: "Number",
    examples: &["median(4, 1, 3, 2) → 2.5"],
    pick: |s| Value::Number(s.median),
};

pub const MODE: StatField = StatField {
    name: "mode",
    description: "Most frequent values (ascending), or \"No mode\" when all values are unique",
    usage: "mode(values)",
    returns: "List<Number> | Text",
    examples: &["mode(1, 2, 2, 3) → [2]", "mode(1, 2, 3) → \"No mode\""],
    pick: |s| mode_value(&s.mode),
};

pub const VARIANCE: StatField = StatField {
    name: "variance",
    description: "Population variance (divides by n)",
    usage: "variance(values)",
    returns: "Number",
    examples: &["variance(1, 2, 2, 3) → 0.5"],
    pick: |s| Value::Number(s.variance),
};

pub const STD_DEV: StatField = StatField {
    name: "std_dev",
    description: "Population standard deviation",
    usage: "std_dev(values)",
    returns: "Number",
    examples: &["std_dev(2, 4, 4, 4, 5, 5, 7, 9) → 2"],
    pick: |s| Value::Number(s.standard_deviation),
};
