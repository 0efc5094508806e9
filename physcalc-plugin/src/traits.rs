//! Function plugin trait and its help metadata

use physcalc_core::Value;
use crate::EvalContext;
use serde::Serialize;

/// One positional parameter of a calculator function
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    /// Accepted shapes, e.g. `"Matrix"` or `"List<Number> | Number..."`
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ArgMeta {
    pub const fn required(name: &'static str, kind: &'static str, description: &'static str) -> Self {
        Self { name, kind, description, optional: false, default: None }
    }

    pub const fn optional(name: &'static str, kind: &'static str, description: &'static str, default: &'static str) -> Self {
        Self { name, kind, description, optional: true, default: Some(default) }
    }

    fn to_value(&self) -> Value {
        let mut fields = vec![
            ("name", Value::from(self.name)),
            ("type", Value::from(self.kind)),
            ("description", Value::from(self.description)),
            ("optional", Value::Bool(self.optional)),
        ];
        if let Some(default) = self.default {
            fields.push(("default", Value::from(default)));
        }
        Value::object(fields)
    }
}

/// Help metadata every calculator function carries
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
    /// One of `base`, `matrix`, `polynomial`, `vector`, `units`, `statistics`
    pub category: &'static str,
    pub related: &'static [&'static str],
}

fn texts(items: &[&'static str]) -> Value {
    Value::List(items.iter().map(|s| Value::from(*s)).collect())
}

impl FunctionMeta {
    /// Full help entry
    pub fn to_help(&self) -> Value {
        Value::object([
            ("name", Value::from(self.name)),
            ("description", Value::from(self.description)),
            ("usage", Value::from(self.usage)),
            ("returns", Value::from(self.returns)),
            ("category", Value::from(self.category)),
            ("args", Value::List(self.args.iter().map(ArgMeta::to_value).collect())),
            ("examples", texts(self.examples)),
            ("related", texts(self.related)),
        ])
    }

    /// Short listing entry
    pub fn summary(&self) -> Value {
        Value::object([
            ("name", Value::from(self.name)),
            ("description", Value::from(self.description)),
            ("usage", Value::from(self.usage)),
            ("category", Value::from(self.category)),
        ])
    }
}

/// Pure calculator function: same arguments, same result, no side effects
pub trait FunctionPlugin: Send + Sync {
    fn meta(&self) -> FunctionMeta;
    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value;

    fn name(&self) -> &'static str {
        self.meta().name
    }
}
