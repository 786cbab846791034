//! User context for store operations.
//!
//! There is no authentication yet: every request runs as the default user.
//! Keeping the context explicit means a real auth collaborator can be
//! substituted later without touching the store or the handlers' bodies.

/// The user on whose behalf a store-touching operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: i64,
}

/// The hardcoded single-user context used until authentication exists.
pub const DEFAULT_USER: UserContext = UserContext { user_id: 1 };
