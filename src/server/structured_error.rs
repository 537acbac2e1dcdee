use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::logging::get_log_file_path;
use crate::server::error_mapping::ToStructuredError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    pub code: String,
}

/// Error payload carried in the `error` field of item responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StructuredError {
    #[serde(default)]
    pub logs: String,
    pub messages: Vec<ErrorMessage>,
}

impl StructuredError {
    pub fn new(code: &str, message: String) -> Self {
        Self {
            logs: get_log_file_path().to_string(),
            messages: vec![ErrorMessage {
                message,
                tip: None,
                code: code.to_string(),
            }],
        }
    }

    #[must_use]
    pub fn with_tip(mut self, tip: &str) -> Self {
        if let Some(msg) = self.messages.first_mut() {
            msg.tip = Some(tip.to_string());
        }
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            // Fallback: produce a minimal valid JSON manually
            r#"{"logs":"","messages":[{"message":"serialization error","code":"INTERNAL_ERROR"}]}"#.to_string()
        })
    }

    /// Parse an `error` field back into its structured form.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// First message and code, for user-facing display.
    #[must_use]
    pub fn first(&self) -> Option<&ErrorMessage> {
        self.messages.first()
    }
}

/// Convenience function to convert a domain error into a structured JSON error string.
pub fn to_error_json<E: ToStructuredError + Display>(err: &E) -> String {
    let (code, tip) = err.error_code_and_tip();
    let mut se = StructuredError::new(code, err.to_string());
    if let Some(tip) = tip {
        se = se.with_tip(tip);
    }
    se.to_json()
}

/// Human-readable text for an `error` field.
///
/// Falls back to the raw string when it is not structured JSON.
#[must_use]
pub fn error_message(error: &str) -> String {
    StructuredError::from_json(error)
        .and_then(|se| se.first().map(|m| m.message.clone()))
        .unwrap_or_else(|| error.to_string())
}

#[cfg(test)]
#[path = "structured_error_tests.rs"]
mod tests;
