pub mod cookie;
pub mod element;

use serde_json::Value;

/// Renders `(func)(arg1, arg2, ...)` with JSON-encoded arguments.
pub fn build_js_call(func: &str, args: &[Value]) -> String {
    let args_str = args
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})({})", func.trim(), args_str)
}
