//! Response envelope types.
//!
//! Every body the service writes is a JSON object with a `success` flag.
//! Successful payloads are flattened next to it; failures carry an `error`
//! code plus an optional `message`.

use serde::Serialize;
use serde_json::Value;

/// `{success:true, ...payload}`.
#[derive(Debug, Clone, Serialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(payload: T) -> Self {
        Self { success: true, payload }
    }
}

/// Payload of `POST /api/uppercase`.
#[derive(Debug, Clone, Serialize)]
pub struct TextResult {
    pub result: String,
}

/// Payload of `POST /api/uppercase-file`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub result: String,
    pub file_name: String,
    pub original_length: usize,
    pub converted_length: usize,
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub message: &'static str,
    pub version: &'static str,
}

/// Payload of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Value,
}

/// `{success:false, error, message?, availableEndpoints?}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: Option<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message,
            available_endpoints: None,
        }
    }

    pub fn with_endpoints(mut self, endpoints: Value) -> Self {
        self.available_endpoints = Some(endpoints);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_flattens_payload() {
        let body = serde_json::to_value(Success::new(TextResult { result: "ABC".into() })).unwrap();
        assert_eq!(body, json!({"success": true, "result": "ABC"}));
    }

    #[test]
    fn test_file_result_uses_camel_case() {
        let body = serde_json::to_value(Success::new(FileResult {
            result: "HI".into(),
            file_name: "a.txt".into(),
            original_length: 2,
            converted_length: 2,
        }))
        .unwrap();
        assert_eq!(body["fileName"], "a.txt");
        assert_eq!(body["originalLength"], 2);
        assert_eq!(body["convertedLength"], 2);
    }
}
