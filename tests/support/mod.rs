//! In-memory fakes for the session provider and user store, with call
//! counters so tests can assert which collaborator calls happened.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use catalog_gate::error::{GateError, GateResult};
use catalog_gate::identity::{
    AuthSession, AuthenticatedUser, SessionProvider, Token, TokenClaims, TokenPair,
};
use catalog_gate::store::{CreateUserInput, UserLookup, UserRecord, UserStore};

/// Route test diagnostics through tracing; repeated init calls are ignored.
pub fn init_logs() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}

pub struct FakeProvider {
    /// Groups carried by the access token; `None` makes session fetch fail.
    pub groups: Option<Vec<String>>,
    /// Current user; `None` makes the liveness check fail.
    pub user: Option<AuthenticatedUser>,
    pub session_calls: AtomicUsize,
    pub liveness_calls: AtomicUsize,
    /// When set, the first liveness call parks until `release` is notified.
    pub block_first_liveness: AtomicBool,
    pub entered_liveness: Notify,
    pub release_liveness: Notify,
}

impl FakeProvider {
    pub fn with_groups(groups: &[&str]) -> Self {
        Self {
            groups: Some(groups.iter().map(|s| s.to_string()).collect()),
            user: Some(alice()),
            ..Self::unauthenticated()
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            groups: None,
            user: None,
            session_calls: AtomicUsize::new(0),
            liveness_calls: AtomicUsize::new(0),
            block_first_liveness: AtomicBool::new(false),
            entered_liveness: Notify::new(),
            release_liveness: Notify::new(),
        }
    }

    pub fn session_call_count(&self) -> usize {
        self.session_calls.load(Ordering::SeqCst)
    }

    pub fn liveness_call_count(&self) -> usize {
        self.liveness_calls.load(Ordering::SeqCst)
    }
}

pub fn alice() -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: "u-1".to_string(),
        username: "alice".to_string(),
        login_id: Some("alice@example.com".to_string()),
    }
}

#[async_trait]
impl SessionProvider for FakeProvider {
    async fn fetch_auth_session(&self) -> GateResult<AuthSession> {
        self.session_calls.fetch_add(1, Ordering::SeqCst);
        let Some(groups) = &self.groups else {
            return Err(GateError::session("no_session", "no current session"));
        };
        let claims = TokenClaims { sub: "u-1".to_string(), groups: groups.clone(), ..Default::default() };
        Ok(AuthSession {
            tokens: Some(TokenPair {
                id_token: None,
                access_token: Some(Token::from_claims(claims)),
            }),
        })
    }

    async fn current_user(&self) -> GateResult<AuthenticatedUser> {
        self.liveness_calls.fetch_add(1, Ordering::SeqCst);
        if self.block_first_liveness.swap(false, Ordering::SeqCst) {
            self.entered_liveness.notify_one();
            self.release_liveness.notified().await;
        }
        match &self.user {
            Some(u) => Ok(u.clone()),
            None => Err(GateError::session("no_session", "not authenticated")),
        }
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    pub records: Mutex<HashMap<String, UserRecord>>,
    pub get_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    /// When set, lookups report a transport failure instead of answering.
    pub fail_queries: AtomicBool,
    /// When set, creates report this message through the error side channel.
    pub create_app_error: Mutex<Option<String>>,
}

impl MemoryUserStore {
    pub fn get_call_count(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn create_call_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_user(&self, id: &str) -> UserLookup {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries.load(Ordering::SeqCst) {
            return UserLookup::QueryError(GateError::query("query_failed", "simulated outage"));
        }
        match self.records.lock().unwrap().get(id) {
            Some(rec) => UserLookup::Found(rec.clone()),
            None => UserLookup::NotFound,
        }
    }

    async fn create_user(&self, input: CreateUserInput) -> Result<UserRecord, GateError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = self.create_app_error.lock().unwrap().clone() {
            return Err(GateError::create("create_failed".to_string(), msg));
        }
        let record = UserRecord {
            id: input.id.clone(),
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            group_name: None,
        };
        self.records.lock().unwrap().insert(input.id, record.clone());
        Ok(record)
    }
}
