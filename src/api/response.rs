use crate::errors::AppError;
use serde_json::json;

pub fn ok(id: &serde_json::Value, status: u16, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "status": status,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &serde_json::Value,
    status: u16,
    code: &str,
    message: impl Into<String>,
) -> serde_json::Value {
    json!({
        "id": id,
        "status": status,
        "ok": false,
        "error": {
            "code": code,
            "message": message.into(),
        },
    })
}

/// Render an application error with its own status and code.
pub fn from_app_error(id: &serde_json::Value, e: &AppError) -> serde_json::Value {
    err(id, e.status(), e.code(), e.to_string())
}
