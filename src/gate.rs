//! Thin facade composing the resolver, capability gate and reconciler into
//! the surface the UI layer consumes.

use std::sync::Arc;

use crate::config::GateConfig;
use crate::error::GateResult;
use crate::identity::{
    capability_allowed, AuthenticatedUser, Capability, RoleResolver, RoleSet, SessionProvider,
};
use crate::provision::Reconciler;
use crate::store::{UserRecord, UserStore};

/// Signed-in principal together with their resolved roles.
#[derive(Debug, Clone)]
pub struct CurrentUserInfo {
    pub user: AuthenticatedUser,
    pub roles: RoleSet,
}

pub struct AccessGate {
    resolver: RoleResolver,
    reconciler: Reconciler,
    provider: Arc<dyn SessionProvider>,
}

impl AccessGate {
    pub fn new(
        config: &GateConfig,
        provider: Arc<dyn SessionProvider>,
        store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            resolver: RoleResolver::new(provider.clone()),
            reconciler: Reconciler::new(provider.clone(), store, config.placeholder_email.clone()),
            provider,
        }
    }

    /// Current roles; anonymous on any provider failure.
    pub async fn get_user_roles(&self) -> RoleSet {
        self.resolver.resolve().await
    }

    pub async fn is_user_admin(&self) -> bool {
        self.get_user_roles().await.is_admin()
    }

    pub async fn can_create_products(&self) -> bool {
        capability_allowed(&self.get_user_roles().await, Capability::CreateProducts)
    }

    pub async fn can_comment_on_products(&self) -> bool {
        capability_allowed(&self.get_user_roles().await, Capability::CommentOnProducts)
    }

    /// Identity attributes plus roles. Unlike role resolution this surfaces
    /// the session failure, since callers need the identity itself.
    pub async fn get_current_user_info(&self) -> GateResult<CurrentUserInfo> {
        let user = self.provider.current_user().await?;
        let roles = self.resolver.resolve().await;
        Ok(CurrentUserInfo { user, roles })
    }

    pub async fn ensure_user_exists(&self) -> GateResult<UserRecord> {
        self.reconciler.ensure_user_exists().await
    }

    pub async fn try_ensure_user_exists(&self) -> bool {
        self.reconciler.try_ensure_user_exists().await
    }
}
