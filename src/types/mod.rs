mod mail;

pub use mail::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A mail or chat entry exactly as Graph returned it
pub type Message = Value;

/// Access token with expiration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub value: String,
    /// Unix timestamp (seconds); informational only, never refreshed
    pub expires: u64,
}

/// Token endpoint response. Every field is optional so a body without
/// `access_token` still parses and can be reported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Graph collection envelope; only `value` is kept
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub value: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_without_value_is_empty() {
        let c: Collection = serde_json::from_str(r#"{"@odata.context":"x"}"#).unwrap();
        assert!(c.value.is_empty());
    }

    #[test]
    fn collection_keeps_unknown_fields() {
        let c: Collection = serde_json::from_str(
            r#"{"value":[{"id":"1","extra":{"nested":true}}],"@odata.nextLink":"n"}"#,
        )
        .unwrap();
        assert_eq!(c.value.len(), 1);
        assert_eq!(c.value[0]["extra"]["nested"], Value::Bool(true));
    }

    #[test]
    fn token_response_tolerates_error_body() {
        let t: TokenResponse = serde_json::from_str(
            r#"{"error":"invalid_client","error_description":"bad secret"}"#,
        )
        .unwrap();
        assert!(t.access_token.is_none());
        assert_eq!(t.error.as_deref(), Some("invalid_client"));
    }
}
