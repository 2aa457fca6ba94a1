use crate::domain::user::models::UserId;

/// Identity attached to a request once its bearer token has been verified
/// and resolved to a stored user. Lives for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedContext {
    pub user_id: UserId,
}
