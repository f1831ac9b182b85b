use serde::{Deserialize, Serialize};

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Body returned after a successful create
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedResponse {
    /// Id assigned by the server
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_response_deserialization() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error":"venue not found"}"#).unwrap();
        assert_eq!(parsed.error, "venue not found");
    }

    #[test]
    fn test_created_response_deserialization() {
        let parsed: CreatedResponse = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(parsed, CreatedResponse { id: 42 });
    }
}
