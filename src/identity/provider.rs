// Keep boundary request/response shapes as plain Rust structs; the provider
// implementation (credential exchange, refresh, sign-out) lives outside this
// crate and is consumed through this trait only.

use async_trait::async_trait;

use super::claims::Token;
use crate::error::GateResult;

/// Result of a session fetch. `tokens` is absent when no session exists but
/// the provider chose to answer rather than fail.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    pub tokens: Option<TokenPair>,
}

#[derive(Debug, Clone, Default)]
pub struct TokenPair {
    pub id_token: Option<Token>,
    pub access_token: Option<Token>,
}

/// Identity attributes of the signed-in principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
    /// Login id from the sign-in details (usually the email), when known.
    pub login_id: Option<String>,
}

/// Session provider boundary. `fetch_auth_session` refreshes transparently;
/// `current_user` doubles as the liveness check used by the navigation guard.
/// Both fail with a session error when unauthenticated.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn fetch_auth_session(&self) -> GateResult<AuthSession>;
    async fn current_user(&self) -> GateResult<AuthenticatedUser>;
}
