//! First-use user provisioning: ensure a record exists for the signed-in
//! principal, creating it from session attributes when absent. Reconciling
//! an already-provisioned principal is a no-op detected by lookup, not by a
//! unique-constraint failure.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::GateResult;
use crate::identity::SessionProvider;
use crate::store::{CreateUserInput, UserLookup, UserRecord, UserStore};

pub struct Reconciler {
    provider: Arc<dyn SessionProvider>,
    store: Arc<dyn UserStore>,
    placeholder_email: String,
}

impl Reconciler {
    pub fn new(
        provider: Arc<dyn SessionProvider>,
        store: Arc<dyn UserStore>,
        placeholder_email: impl Into<String>,
    ) -> Self {
        Self { provider, store, placeholder_email: placeholder_email.into() }
    }

    /// Return the principal's record, creating it on first use. Session
    /// failures and application-level create errors surface to the caller.
    pub async fn ensure_user_exists(&self) -> GateResult<UserRecord> {
        let user = self.provider.current_user().await?;

        match self.store.get_user(&user.user_id).await {
            UserLookup::Found(record) => {
                debug!(user_id = %user.user_id, "user record already provisioned");
                return Ok(record);
            }
            UserLookup::NotFound => {}
            // Policy: a failed lookup falls through to create rather than
            // aborting; the create either lands or reports its own error.
            UserLookup::QueryError(e) => {
                warn!(user_id = %user.user_id, error = %e, "user lookup failed, attempting create");
            }
        }

        let input = CreateUserInput {
            id: user.user_id.clone(),
            username: user.username.clone(),
            email: user.login_id.clone().unwrap_or_else(|| self.placeholder_email.clone()),
            first_name: Some(String::new()),
            last_name: Some(String::new()),
        };
        let record = self.store.create_user(input).await?;
        debug!(user_id = %record.id, "user record created");
        Ok(record)
    }

    /// Non-throwing wrapper for bootstrap paths: logs and reports success as
    /// a bool so a provisioning failure never blocks navigation.
    pub async fn try_ensure_user_exists(&self) -> bool {
        match self.ensure_user_exists().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "could not ensure user exists, continuing anyway");
                false
            }
        }
    }
}
