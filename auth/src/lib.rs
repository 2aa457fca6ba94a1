//! Identity and credential library
//!
//! Provides the identity model shared by the service layers:
//! - Secrets loading and validation (`JWT_SECRET`, `USER_SALT`)
//! - Password hashing (HMAC-SHA-512, hex digest)
//! - Access token issuance and verification (HS256 JWT, 24h validity)
//! - A `UserIdentity` sum type splitting those capabilities between known
//!   users and anonymous actors
//!
//! Services define their own persistence and request-handling traits and
//! build on these primitives.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{Authenticator, SecretsConfig};
//!
//! let secrets = SecretsConfig::new("signing-key", "hashing-salt").unwrap();
//! let auth = Authenticator::new(&secrets);
//!
//! let digest = auth.anonymous().hash_password("my_password");
//! assert_eq!(digest, auth.anonymous().hash_password("my_password"));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Authenticator, SecretsConfig};
//!
//! let secrets = SecretsConfig::new("signing-key", "hashing-salt").unwrap();
//! let auth = Authenticator::new(&secrets);
//!
//! let token = auth.known("user-id").issue_access_token().unwrap();
//! let subject = auth.anonymous().verify_access_token(&token).unwrap();
//! assert_eq!(subject.id, "user-id");
//! ```
//!
//! ## Dispatching on Identity
//! ```
//! use auth::{Authenticator, SecretsConfig, UserIdentity};
//!
//! let secrets = SecretsConfig::new("signing-key", "hashing-salt").unwrap();
//! let auth = Authenticator::new(&secrets);
//!
//! match auth.identify(Some("user-id".to_string())) {
//!     UserIdentity::Known(user) => println!("Token: {}", user.issue_access_token().unwrap()),
//!     UserIdentity::Anonymous(_) => println!("No such user"),
//! }
//! ```

pub mod authenticator;
pub mod config;
pub mod identity;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use config::ConfigError;
pub use config::SecretsConfig;
pub use identity::AnonymousActor;
pub use identity::KnownUser;
pub use identity::UserIdentity;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use jwt::VerifiedSubject;
pub use password::PasswordHasher;
