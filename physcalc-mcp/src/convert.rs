//! JSON <-> Value conversion at the protocol boundary

use physcalc::Value;
use serde_json::{json, Value as JsonValue};

/// Strings stay text: digit strings such as "1010" are arguments in their
/// own right and must not be reinterpreted as numbers.
pub fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match n.as_f64() {
            Some(x) => Value::Number(x),
            None => Value::Text(n.to_string()),
        },
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(arr) => Value::List(arr.iter().map(json_to_value).collect()),
        JsonValue::Object(obj) => Value::Object(obj.iter().map(|(k, v)| (k.clone(), json_to_value(v))).collect()),
    }
}

pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        // Non-finite numbers have no JSON form
        Value::Number(n) => serde_json::Number::from_f64(*n).map_or(JsonValue::Null, JsonValue::Number),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::List(l) => JsonValue::Array(l.iter().map(value_to_json).collect()),
        Value::Object(o) => JsonValue::Object(o.iter().map(|(k, v)| (k.clone(), value_to_json(v))).collect()),
        Value::Error(e) => json!({
            "_error": {
                "code": e.code,
                "message": e.message,
                "suggestion": e.suggestion,
                "function": e.function,
            }
        }),
    }
}

/// Human-readable rendering of a result for the text content block
pub fn format_result(value: &Value) -> String {
    match value {
        Value::Object(map) => match map.get("display") {
            Some(Value::Text(d)) => d.clone(),
            _ => value.to_string(),
        },
        Value::Error(e) => e.to_string(),
        _ => value.to_string(),
    }
}
