use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::http::response::{Success, TextResult};
use crate::transform;

/// Body of `POST /api/uppercase`.
#[derive(Debug, Default, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

pub async fn uppercase_text(payload: Result<Json<TextRequest>, JsonRejection>) -> AppResult<Json<Success<TextResult>>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::JsonSyntaxError(e)) => {
            return Err(AppError::validation_with("invalid json", e.body_text()));
        }
        // No JSON content type, or a JSON value that isn't an object: there
        // is no `text` to read.
        Err(JsonRejection::MissingJsonContentType(_)) | Err(JsonRejection::JsonDataError(_)) => TextRequest::default(),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(AppError::BodyTooLarge(rejection.body_text()));
        }
        Err(rejection) => {
            return Err(AppError::validation_with("invalid body", rejection.body_text()));
        }
    };

    let text = request
        .text
        .and_then(coerce_to_string)
        .ok_or_else(|| AppError::validation("missing text"))?;

    let result = transform::uppercase(&text);

    tracing::debug!(input_chars = transform::char_count(&text), "Uppercased text");

    Ok(Json(Success::new(TextResult { result })))
}

/// String form of a JSON value; `None` for null.
///
/// Numbers and booleans use their JSON spelling. Arrays and objects become
/// compact JSON text.
pub fn coerce_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
