//! JSON-RPC 2.0 request handling and tool dispatch

use crate::convert::{format_result, json_to_value, value_to_json};
use physcalc::{Calculator, Value};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "physcalc";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    /// Always present; `null` when the request id could not be read
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: INVALID_PARAMS,
            message: message.into(),
            data: None,
        }
    }
}

impl McpResponse {
    pub fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<JsonValue>, error: McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    pub fn parse_error(details: impl std::fmt::Display) -> Self {
        Self::failure(None, McpError {
            code: PARSE_ERROR,
            message: format!("Parse error: {}", details),
            data: None,
        })
    }
}

pub fn handle_request(calc: &Calculator, request: &McpRequest) -> McpResponse {
    debug!(method = %request.method, "handling request");

    let result = match request.method.as_str() {
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(tools_list(calc)),
        "tools/call" => handle_tool_call(calc, &request.params),
        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse::success(request.id.clone(), r),
        Err(e) => McpResponse::failure(request.id.clone(), e),
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version
    let protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client, protocol, "client connected");

    Ok(json!({
        "protocolVersion": protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Scientific calculator: base conversion, matrices, polynomials, vectors, units, statistics"
        },
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "instructions": "Call 'calculate' with a function name and its arguments. Use 'help' or 'list_functions' to discover functions."
    }))
}

fn tools_list(calc: &Calculator) -> JsonValue {
    let categories = calc.categories();
    json!({
        "tools": [
            {
                "name": "calculate",
                "description": "Call a calculator function by name. Returns the result as JSON plus a readable rendering.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "function": {
                            "type": "string",
                            "description": "Function name, e.g. 'inverse', 'solve_cubic', 'convert_units'"
                        },
                        "args": {
                            "type": "array",
                            "description": "Positional arguments. Matrices are nested arrays, vectors are 2- or 3-element arrays, digit strings stay strings.",
                            "default": []
                        }
                    },
                    "required": ["function"]
                }
            },
            {
                "name": "help",
                "description": "Documentation for one function, or an overview of all functions when no name is given",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Function name" }
                    }
                }
            },
            {
                "name": "list_functions",
                "description": "List available functions, optionally filtered by category",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "enum": categories }
                    }
                }
            },
            {
                "name": "list_units",
                "description": "List unit categories, or the units of one category",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "enum": ["length", "mass", "temperature", "force", "energy"]
                        }
                    }
                }
            }
        ]
    })
}

fn handle_tool_call(calc: &Calculator, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "calculate" => tool_calculate(calc, &args),
        "help" => Ok(tool_result(&calc.help(optional_str(&args, "name")), format_help)),
        "list_functions" => Ok(tool_result(&calc.list_functions(optional_str(&args, "category")), format_result)),
        "list_units" => tool_list_units(calc, &args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn optional_str<'a>(args: &'a JsonValue, key: &str) -> Option<&'a str> {
    args.get(key).and_then(|v| v.as_str())
}

fn tool_calculate(calc: &Calculator, args: &JsonValue) -> Result<JsonValue, McpError> {
    let function = optional_str(args, "function")
        .ok_or_else(|| McpError::invalid_params("Missing function argument"))?;

    let call_args: Vec<Value> = match args.get("args") {
        None | Some(JsonValue::Null) => Vec::new(),
        Some(JsonValue::Array(items)) => items.iter().map(json_to_value).collect(),
        Some(_) => return Err(McpError::invalid_params("'args' must be an array")),
    };

    let result = calc.call(function, &call_args);
    Ok(tool_result(&result, format_result))
}

fn tool_list_units(calc: &Calculator, args: &JsonValue) -> Result<JsonValue, McpError> {
    let call_args: Vec<Value> = optional_str(args, "category")
        .map(|c| vec![Value::from(c)])
        .unwrap_or_default();
    Ok(tool_result(&calc.call("list_units", &call_args), format_result))
}

fn tool_result(value: &Value, render: fn(&Value) -> String) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": render(value) }],
        "data": value_to_json(value),
        "isError": value.is_error()
    })
}

fn format_help(help: &Value) -> String {
    match help {
        Value::Object(map) if map.contains_key("name") => {
            let mut out = String::new();
            if let Some(Value::Text(n)) = map.get("name") {
                out.push_str(&format!("# {}\n\n", n));
            }
            if let Some(Value::Text(d)) = map.get("description") {
                out.push_str(&format!("{}\n\n", d));
            }
            if let Some(Value::Text(u)) = map.get("usage") {
                out.push_str(&format!("**Usage:** `{}`\n\n", u));
            }
            if let Some(Value::Text(r)) = map.get("returns") {
                out.push_str(&format!("**Returns:** {}\n", r));
            }
            out
        }
        other => format_result(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, params: JsonValue) -> McpRequest {
        McpRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    fn call_tool(name: &str, arguments: JsonValue) -> JsonValue {
        let calc = Calculator::with_standard_library();
        let response = handle_request(&calc, &request("tools/call", json!({"name": name, "arguments": arguments})));
        assert!(response.error.is_none());
        response.result.unwrap()
    }

    #[test]
    fn test_initialize_echoes_protocol() {
        let calc = Calculator::with_standard_library();
        let r = handle_request(&calc, &request("initialize", json!({"protocolVersion": "2024-11-05"})));
        let result = r.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(r.id, Some(json!(1)));
    }

    #[test]
    fn test_parse_error_reply_has_null_id() {
        let err = serde_json::from_str::<McpRequest>("{not json").unwrap_err();
        let json = serde_json::to_value(McpResponse::parse_error(err)).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json.get("id"), Some(&JsonValue::Null));
        assert_eq!(json["error"]["code"], PARSE_ERROR);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_unknown_method() {
        let calc = Calculator::with_standard_library();
        let r = handle_request(&calc, &request("resources/list", json!({})));
        assert_eq!(r.error.unwrap().code, METHOD_NOT_FOUND);
    }

    #[test]
    fn test_tools_list() {
        let calc = Calculator::with_standard_library();
        let result = handle_request(&calc, &request("tools/list", json!({}))).result.unwrap();
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["calculate", "help", "list_functions", "list_units"]);
    }

    #[test]
    fn test_calculate_inverse() {
        let result = call_tool("calculate", json!({"function": "inverse", "args": [[[4, 7], [2, 6]]]}));
        assert_eq!(result["isError"], false);
        assert_eq!(result["data"]["rows"], 2.0);
        let data = result["data"]["data"].as_array().unwrap();
        assert!((data[0][0].as_f64().unwrap() - 0.6).abs() < 1e-9);
        assert!((data[1][1].as_f64().unwrap() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_keeps_digit_strings() {
        let result = call_tool("calculate", json!({"function": "convert_base", "args": ["1010", "binary", "decimal"]}));
        assert_eq!(result["data"], "10");
        assert_eq!(result["content"][0]["text"], "10");
    }

    #[test]
    fn test_calculate_error_is_flagged() {
        let result = call_tool("calculate", json!({"function": "inverse", "args": [[[1, 2], [2, 4]]]}));
        assert_eq!(result["isError"], true);
        assert_eq!(result["data"]["_error"]["code"], "SINGULAR");
    }

    #[test]
    fn test_calculate_rejects_non_array_args() {
        let calc = Calculator::with_standard_library();
        let r = handle_request(&calc, &request("tools/call", json!({
            "name": "calculate",
            "arguments": {"function": "mean", "args": 3}
        })));
        assert_eq!(r.error.unwrap().code, INVALID_PARAMS);
    }

    #[test]
    fn test_help_tool() {
        let result = call_tool("help", json!({"name": "solve_quadratic"}));
        assert!(result["content"][0]["text"].as_str().unwrap().starts_with("# solve_quadratic"));
        assert_eq!(result["data"]["category"], "polynomial");
    }

    #[test]
    fn test_list_units_tool() {
        let result = call_tool("list_units", json!({"category": "temperature"}));
        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("kelvin"));
    }

    #[test]
    fn test_unknown_tool() {
        let calc = Calculator::with_standard_library();
        let r = handle_request(&calc, &request("tools/call", json!({"name": "eval"})));
        assert_eq!(r.error.unwrap().code, INVALID_PARAMS);
    }
}
