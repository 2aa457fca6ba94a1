use std::sync::Arc;

use crate::config::SecretsConfig;
use crate::identity::AnonymousActor;
use crate::identity::KnownUser;
use crate::identity::UserIdentity;
use crate::jwt::TokenCodec;
use crate::password::PasswordHasher;

/// Builds identities from one validated set of secrets.
///
/// Holds the keyed password hasher and token codec; constructing identities
/// only clones shared handles, so an `Authenticator` can be shared across
/// any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Authenticator {
    password_hasher: Arc<PasswordHasher>,
    token_codec: Arc<TokenCodec>,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secrets` - Validated signing key and hashing salt
    pub fn new(secrets: &SecretsConfig) -> Self {
        Self {
            password_hasher: Arc::new(PasswordHasher::new(secrets.hashing_salt())),
            token_codec: Arc::new(TokenCodec::new(secrets.signing_key())),
        }
    }

    /// Identity of a persisted user.
    pub fn known(&self, id: impl Into<String>) -> KnownUser {
        KnownUser::new(id.into(), Arc::clone(&self.token_codec))
    }

    /// Identity of a party that is not (yet) a user.
    pub fn anonymous(&self) -> AnonymousActor {
        AnonymousActor::new(
            Arc::clone(&self.password_hasher),
            Arc::clone(&self.token_codec),
        )
    }

    /// Known identity when an id was resolved, anonymous otherwise.
    pub fn identify(&self, id: Option<String>) -> UserIdentity {
        match id {
            Some(id) => self.known(id).into(),
            None => self.anonymous().into(),
        }
    }
}
