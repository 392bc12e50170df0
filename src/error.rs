//! Unified error model for the access-control core.
//! One enum covers the session, claims and data-store failure classes so
//! callers can branch on the class without string matching.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GateError {
    /// No session, expired session, or a refresh failure at the provider.
    Session { code: String, message: String },
    /// Token present but its claims could not be decoded.
    Claims { code: String, message: String },
    /// Data-store read failed in transit (distinct from "record absent").
    Query { code: String, message: String },
    /// Data-store write rejected at the application level (GraphQL errors
    /// side channel rather than a transport failure).
    Create { code: String, message: String },
    /// Network-level failure talking to a collaborator.
    Transport { code: String, message: String },
    Internal { code: String, message: String },
}

impl GateError {
    pub fn code_str(&self) -> &str {
        match self {
            GateError::Session { code, .. }
            | GateError::Claims { code, .. }
            | GateError::Query { code, .. }
            | GateError::Create { code, .. }
            | GateError::Transport { code, .. }
            | GateError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GateError::Session { message, .. }
            | GateError::Claims { message, .. }
            | GateError::Query { message, .. }
            | GateError::Create { message, .. }
            | GateError::Transport { message, .. }
            | GateError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn session<S: Into<String>>(code: S, msg: S) -> Self { GateError::Session { code: code.into(), message: msg.into() } }
    pub fn claims<S: Into<String>>(code: S, msg: S) -> Self { GateError::Claims { code: code.into(), message: msg.into() } }
    pub fn query<S: Into<String>>(code: S, msg: S) -> Self { GateError::Query { code: code.into(), message: msg.into() } }
    pub fn create<S: Into<String>>(code: S, msg: S) -> Self { GateError::Create { code: code.into(), message: msg.into() } }
    pub fn transport<S: Into<String>>(code: S, msg: S) -> Self { GateError::Transport { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { GateError::Internal { code: code.into(), message: msg.into() } }

    /// True for the failure class the navigation guard answers with a
    /// redirect to the login route rather than an error surface.
    pub fn redirects_to_login(&self) -> bool {
        matches!(self, GateError::Session { .. })
    }

    /// True when the role resolver must fall back to the anonymous role set
    /// instead of propagating. Session and claims failures both qualify.
    pub fn fails_open(&self) -> bool {
        matches!(
            self,
            GateError::Session { .. } | GateError::Claims { .. } | GateError::Transport { .. }
        )
    }
}

impl Display for GateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for GateError {}

pub type GateResult<T> = Result<T, GateError>;

impl From<anyhow::Error> for GateError {
    fn from(err: anyhow::Error) -> Self {
        // Default mapping: treat as Internal unless downcasted elsewhere
        GateError::Internal { code: "internal_error".into(), message: err.to_string() }
    }
}

impl From<reqwest::Error> for GateError {
    fn from(err: reqwest::Error) -> Self {
        GateError::Transport { code: "transport_error".into(), message: err.to_string() }
    }
}
