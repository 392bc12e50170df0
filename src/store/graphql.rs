//! GraphQL adapter over the generated user documents. The documents are
//! opaque strings with typed variables; only the fields this crate reads are
//! selected. Each call asks the session provider for an ID token and sends
//! it when present, falling back to an unauthenticated request on any
//! session failure.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{CreateUserInput, UserLookup, UserRecord, UserStore};
use crate::config::GateConfig;
use crate::error::GateError;
use crate::identity::SessionProvider;

pub const GET_USER: &str = "query GetUser($id: ID!) {\n  getUser(id: $id) {\n    id\n    username\n    email\n    firstName\n    lastName\n    groupName\n  }\n}";

pub const CREATE_USER: &str = "mutation CreateUser($input: CreateUserInput!) {\n  createUser(input: $input) {\n    id\n    username\n    email\n    firstName\n    lastName\n    groupName\n  }\n}";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<ErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    message: String,
}

pub struct GraphQlUserStore {
    http: reqwest::Client,
    endpoint: String,
    provider: Arc<dyn SessionProvider>,
}

impl GraphQlUserStore {
    pub fn new(config: &GateConfig, provider: Arc<dyn SessionProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.graphql_endpoint.clone(),
            provider,
        }
    }

    /// ID token for the auth header, or None when no session is available.
    async fn auth_token(&self) -> Option<String> {
        match self.provider.fetch_auth_session().await {
            Ok(session) => session
                .tokens
                .and_then(|t| t.id_token)
                .map(|tok| tok.raw),
            Err(e) => {
                debug!(error = %e, "no session for data-store call, proceeding unauthenticated");
                None
            }
        }
    }

    async fn post(&self, query: &str, variables: serde_json::Value) -> Result<Envelope, GateError> {
        let mut req = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }));
        if let Some(token) = self.auth_token().await {
            req = req.header("Authorization", token);
        }
        let resp = req.send().await?;
        let envelope: Envelope = resp
            .json()
            .await
            .map_err(|e| GateError::transport("transport_error".into(), format!("malformed response: {e}")))?;
        Ok(envelope)
    }
}

/// Map a `getUser` response envelope: error side channel or an unreadable
/// record reports `QueryError`; a null selection is genuine absence.
fn lookup_from_envelope(envelope: Envelope) -> UserLookup {
    if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
        return UserLookup::QueryError(GateError::query(
            "query_failed".into(),
            errors[0].message.clone(),
        ));
    }
    let record = envelope
        .data
        .and_then(|d| d.get("getUser").cloned())
        .filter(|v| !v.is_null());
    match record {
        None => UserLookup::NotFound,
        Some(v) => match serde_json::from_value::<UserRecord>(v) {
            Ok(rec) => UserLookup::Found(rec),
            Err(e) => UserLookup::QueryError(GateError::query(
                "query_failed".into(),
                format!("unreadable user record: {e}"),
            )),
        },
    }
}

/// Map a `createUser` response envelope. Application-level errors carry the
/// first message; a missing record is a create failure, not absence.
fn created_from_envelope(envelope: Envelope) -> Result<UserRecord, GateError> {
    if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
        return Err(GateError::create("create_failed".into(), errors[0].message.clone()));
    }
    let record = envelope
        .data
        .and_then(|d| d.get("createUser").cloned())
        .filter(|v| !v.is_null())
        .ok_or_else(|| GateError::create("create_failed", "create returned no record"))?;
    serde_json::from_value(record)
        .map_err(|e| GateError::create("create_failed".into(), format!("unreadable user record: {e}")))
}

#[async_trait]
impl UserStore for GraphQlUserStore {
    async fn get_user(&self, id: &str) -> UserLookup {
        match self.post(GET_USER, json!({ "id": id })).await {
            Ok(envelope) => lookup_from_envelope(envelope),
            Err(e) => UserLookup::QueryError(e),
        }
    }

    async fn create_user(&self, input: CreateUserInput) -> Result<UserRecord, GateError> {
        let envelope = self.post(CREATE_USER, json!({ "input": input })).await?;
        created_from_envelope(envelope)
    }
}
