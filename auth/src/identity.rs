use std::sync::Arc;

use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::jwt::VerifiedSubject;
use crate::password::PasswordHasher;

/// Identity of the party behind an operation.
///
/// The two variants expose disjoint capabilities: only a known user can have
/// a token issued for it, only an anonymous actor can hash credentials and
/// verify tokens.
#[derive(Debug, Clone)]
pub enum UserIdentity {
    Known(KnownUser),
    Anonymous(AnonymousActor),
}

impl UserIdentity {
    /// Identifier of the subject, if it is a known user.
    pub fn id(&self) -> Option<&str> {
        match self {
            UserIdentity::Known(user) => Some(user.id()),
            UserIdentity::Anonymous(_) => None,
        }
    }
}

impl From<KnownUser> for UserIdentity {
    fn from(user: KnownUser) -> Self {
        UserIdentity::Known(user)
    }
}

impl From<AnonymousActor> for UserIdentity {
    fn from(actor: AnonymousActor) -> Self {
        UserIdentity::Anonymous(actor)
    }
}

/// A persisted user, identified by an immutable id.
#[derive(Debug, Clone)]
pub struct KnownUser {
    id: String,
    token_codec: Arc<TokenCodec>,
}

impl KnownUser {
    pub(crate) fn new(id: String, token_codec: Arc<TokenCodec>) -> Self {
        Self { id, token_codec }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Issue a 24-hour access token whose subject is this user's id.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_access_token(&self) -> Result<String, JwtError> {
        self.token_codec.issue(&self.id)
    }
}

/// A party with no established identity.
#[derive(Debug, Clone)]
pub struct AnonymousActor {
    password_hasher: Arc<PasswordHasher>,
    token_codec: Arc<TokenCodec>,
}

impl AnonymousActor {
    pub(crate) fn new(password_hasher: Arc<PasswordHasher>, token_codec: Arc<TokenCodec>) -> Self {
        Self {
            password_hasher,
            token_codec,
        }
    }

    /// Digest a plaintext password for storage or comparison.
    pub fn hash_password(&self, password: &str) -> String {
        self.password_hasher.hash(password)
    }

    /// Verify an access token and extract the user id it was issued for.
    ///
    /// # Errors
    /// * `VerificationFailed` - Bad signature, expired, or malformed token
    /// * `MissingSubjectClaim` - Token carries no string subject
    pub fn verify_access_token(&self, token: &str) -> Result<VerifiedSubject, JwtError> {
        self.token_codec.verify(token)
    }
}
