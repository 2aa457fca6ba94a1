use std::env;
use std::fmt;

use thiserror::Error;

/// Environment variable holding the access token signing key.
pub const SIGNING_KEY_VAR: &str = "JWT_SECRET";

/// Environment variable holding the password hashing salt.
pub const HASHING_SALT_VAR: &str = "USER_SALT";

/// Error raised while building the identity secrets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required secret: {0}")]
    MissingSecret(&'static str),
}

/// Validated secrets required by the identity model.
///
/// Built once at startup and shared read-only afterwards. Both values are
/// guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretsConfig {
    signing_key: String,
    hashing_salt: String,
}

impl SecretsConfig {
    /// Build secrets from explicit values.
    ///
    /// # Errors
    /// * `MissingSecret` - Either value is empty
    pub fn new(
        signing_key: impl Into<String>,
        hashing_salt: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let signing_key = Self::required(SIGNING_KEY_VAR, Some(signing_key.into()))?;
        let hashing_salt = Self::required(HASHING_SALT_VAR, Some(hashing_salt.into()))?;

        Ok(Self {
            signing_key,
            hashing_salt,
        })
    }

    /// Load secrets from the process environment (`JWT_SECRET`, `USER_SALT`).
    ///
    /// # Errors
    /// * `MissingSecret` - A variable is unset, not unicode, or empty
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|name| env::var(name).ok())
    }

    /// Load secrets through an arbitrary lookup function.
    ///
    /// # Errors
    /// * `MissingSecret` - The lookup returns nothing or an empty string
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let signing_key = Self::required(SIGNING_KEY_VAR, lookup(SIGNING_KEY_VAR))?;
        let hashing_salt = Self::required(HASHING_SALT_VAR, lookup(HASHING_SALT_VAR))?;

        Ok(Self {
            signing_key,
            hashing_salt,
        })
    }

    fn required(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
        value
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingSecret(name))
    }

    pub fn signing_key(&self) -> &[u8] {
        self.signing_key.as_bytes()
    }

    pub fn hashing_salt(&self) -> &[u8] {
        self.hashing_salt.as_bytes()
    }
}

impl fmt::Debug for SecretsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretsConfig")
            .field("signing_key", &"<redacted>")
            .field("hashing_salt", &"<redacted>")
            .finish()
    }
}
