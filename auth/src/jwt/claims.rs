use std::collections::HashMap;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of an access token, in seconds (24 hours).
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 86_400;

/// Access token claims.
///
/// `sub` is kept as a raw JSON value so a token carrying a non-string subject
/// still decodes and is reported as missing its subject rather than as
/// malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<serde_json::Value>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Any other field found in the payload
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create claims for an access token issued at `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - User identifier
    /// * `issued_at` - Issuance instant; expiry is 24 hours later
    ///
    /// # Returns
    /// Claims with sub, iat and exp set
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>) -> Self {
        let expiration = issued_at + Duration::seconds(ACCESS_TOKEN_TTL_SECONDS);

        Self {
            sub: Some(serde_json::Value::String(subject.to_string())),
            iat: Some(issued_at.timestamp()),
            exp: Some(expiration.timestamp()),
            extra: HashMap::new(),
        }
    }

    /// Subject as a string, if present, a string, and non-empty.
    pub fn subject(&self) -> Option<&str> {
        self.sub
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}
