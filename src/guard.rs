//! Navigation guard: decides allow/redirect for every route transition.
//! Public paths and routes without an auth requirement resolve without
//! touching the session provider; everything else rides on one liveness
//! check per attempt.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::identity::SessionProvider;
use crate::routes;

/// Per-attempt lifecycle. An attempt is `Pending` while its liveness check
/// is outstanding and `Resolved` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Pending,
    Resolved(GuardOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    /// Deny: rewrite the in-flight navigation to this path. The originally
    /// requested destination is discarded.
    Redirect(String),
    /// A newer attempt started while this one's check was in flight; the
    /// stale result must not be acted on.
    Superseded,
}

pub struct NavigationGuard {
    provider: Arc<dyn SessionProvider>,
    login_path: String,
    attempts: AtomicU64,
    /// State of the newest attempt. A superseded attempt never writes here.
    state: Mutex<GuardState>,
}

impl NavigationGuard {
    pub fn new(provider: Arc<dyn SessionProvider>, login_path: impl Into<String>) -> Self {
        Self {
            provider,
            login_path: login_path.into(),
            attempts: AtomicU64::new(0),
            state: Mutex::new(GuardState::Resolved(GuardOutcome::Allow)),
        }
    }

    /// Decide a transition to `path`. The host router serializes attempts;
    /// the sequence number only protects against a check that lands after a
    /// newer attempt has already started.
    pub async fn before_each(&self, path: &str) -> GuardOutcome {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.lock().unwrap() = GuardState::Pending;

        // Allow-list and unflagged routes short-circuit with no provider call.
        if routes::is_public_path(path) || !routes::requires_auth(path) {
            return self.resolve(attempt, GuardOutcome::Allow);
        }

        let live = self.provider.current_user().await;
        if self.attempts.load(Ordering::SeqCst) != attempt {
            debug!(path, attempt, "liveness result landed after a newer navigation");
            return GuardOutcome::Superseded;
        }
        match live {
            Ok(_) => self.resolve(attempt, GuardOutcome::Allow),
            Err(e) => {
                debug!(path, error = %e, "liveness check failed, redirecting to login");
                self.resolve(attempt, GuardOutcome::Redirect(self.login_path.clone()))
            }
        }
    }

    /// Record the outcome for `attempt` unless a newer attempt has taken
    /// over the state slot in the meantime.
    fn resolve(&self, attempt: u64, outcome: GuardOutcome) -> GuardOutcome {
        if self.attempts.load(Ordering::SeqCst) == attempt {
            *self.state.lock().unwrap() = GuardState::Resolved(outcome.clone());
        }
        outcome
    }

    /// State of the newest attempt: `Pending` while its check is in flight,
    /// `Resolved` once decided.
    pub fn current_state(&self) -> GuardState {
        self.state.lock().unwrap().clone()
    }

    /// Sequence number of the most recent attempt.
    pub fn attempts_started(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }
}
