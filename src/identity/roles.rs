use std::sync::Arc;

use tracing::{debug, warn};

use super::provider::{AuthSession, SessionProvider};

pub const ADMIN_GROUP: &str = "Admin";
pub const USER_GROUP: &str = "User";

/// Roles derived from the access token's group claim. The anonymous case is
/// an explicit variant so the fail-open path stays visible in the type
/// rather than hiding behind catch-all suppression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleSet {
    /// No usable session or claims; least privilege.
    #[default]
    Anonymous,
    /// Live session; `groups` may be empty.
    Known { groups: Vec<String> },
}

impl RoleSet {
    pub fn from_groups(groups: Vec<String>) -> Self {
        RoleSet::Known { groups }
    }

    /// Groups as carried by the access token of a fetched session; a live
    /// session without an access token or group claim yields empty groups.
    pub fn from_session(session: &AuthSession) -> Self {
        let groups = session
            .tokens
            .as_ref()
            .and_then(|t| t.access_token.as_ref())
            .map(|tok| tok.claims.groups.clone())
            .unwrap_or_default();
        RoleSet::Known { groups }
    }

    pub fn is_admin(&self) -> bool {
        self.has_group(ADMIN_GROUP)
    }

    pub fn is_user(&self) -> bool {
        self.has_group(USER_GROUP)
    }

    pub fn groups(&self) -> &[String] {
        match self {
            RoleSet::Anonymous => &[],
            RoleSet::Known { groups } => groups,
        }
    }

    fn has_group(&self, name: &str) -> bool {
        self.groups().iter().any(|g| g == name)
    }
}

/// Derives the current role set from the session provider. Fail-open: any
/// provider failure resolves to `RoleSet::Anonymous`, never an error.
pub struct RoleResolver {
    provider: Arc<dyn SessionProvider>,
}

impl RoleResolver {
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self { provider }
    }

    pub async fn resolve(&self) -> RoleSet {
        match self.provider.fetch_auth_session().await {
            Ok(session) => RoleSet::from_session(&session),
            // Every failure resolves anonymous; the expected fail-open
            // classes log quietly, anything else is worth a warning.
            Err(e) if e.fails_open() => {
                debug!(error = %e, "session fetch failed, resolving anonymous roles");
                RoleSet::Anonymous
            }
            Err(e) => {
                warn!(error = %e, "unexpected provider failure, resolving anonymous roles");
                RoleSet::Anonymous
            }
        }
    }
}
