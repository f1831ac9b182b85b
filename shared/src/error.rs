use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

/// Every failure a user action can run into, from the network up to form checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is what gets shown to the user.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Serialization(String),
}

impl ClientError {
    /// Builds an `Api` error from a failed response, see [`api_error_message`].
    pub fn api(status: u16, status_text: &str, body: &str) -> Self {
        Self::Api {
            status,
            message: api_error_message(status, status_text, body),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Message for the inline error region.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Logs the error tagged with the handler it was caught in.
    pub fn log(&self, context: &str) {
        log::error!("[{}] {}", context, self);
    }
}

/// Picks the message for a non-2xx response.
///
/// A JSON body with a non-empty `error` string wins. A JSON body without one
/// falls back to the generic status line, while a body that is not JSON at all
/// falls back to the status text first.
pub fn api_error_message(status: u16, status_text: &str, body: &str) -> String {
    let fallback = format!("HTTP error! status: {}", status);
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .unwrap_or(fallback),
        Err(_) if !status_text.trim().is_empty() => status_text.to_string(),
        Err(_) => fallback,
    }
}

impl From<ValidationErrors> for ClientError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for \"{}\"", field),
                })
            })
            .collect();
        messages.sort();
        Self::Validation(messages.join("; "))
    }
}

impl From<JsonError> for ClientError {
    fn from(error: JsonError) -> Self {
        Self::Decode(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
