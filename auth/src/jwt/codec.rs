use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Subject extracted from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSubject {
    pub id: String,
}

/// Issues and verifies signed, time-limited access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Verification checks the signature and,
/// when present, the `exp` claim: a token is rejected from its `exp` second
/// onwards. Audience and issuer claims are not checked.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
}

impl TokenCodec {
    /// Create a new codec with a signing key.
    ///
    /// # Arguments
    /// * `signing_key` - Secret key shared by issuance and verification
    pub fn new(signing_key: &[u8]) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        // A signed payload without `exp` or `sub` is still a well-formed token
        validation.required_spec_claims.clear();
        validation.validate_aud = false;
        // Expiry is checked in `verify`, where `now == exp` already counts
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
            algorithm,
            validation,
        }
    }

    /// Issue an access token for `subject`, valid for 24 hours from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue an access token as if it were created at `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, issued_at))
    }

    /// Sign arbitrary claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify an access token and extract its subject.
    ///
    /// # Errors
    /// * `VerificationFailed` - Bad signature, expired, or malformed token
    /// * `MissingSubjectClaim` - Token is valid but carries no string `sub`
    pub fn verify(&self, token: &str) -> Result<VerifiedSubject, JwtError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| JwtError::VerificationFailed(e.to_string()))?;

        if token_data
            .claims
            .exp
            .is_some_and(|exp| exp <= Utc::now().timestamp())
        {
            return Err(JwtError::VerificationFailed("ExpiredSignature".to_string()));
        }

        token_data
            .claims
            .subject()
            .map(|id| VerifiedSubject { id: id.to_string() })
            .ok_or(JwtError::MissingSubjectClaim)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}
