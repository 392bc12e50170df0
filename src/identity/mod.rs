//! Identity: session-provider boundary, typed token claims, role resolution
//! and the capability gate. Keep the public surface thin and split
//! implementation across sub-modules.

mod claims;
mod provider;
mod roles;
mod capability;

pub use claims::{Token, TokenClaims};
pub use provider::{AuthSession, AuthenticatedUser, SessionProvider, TokenPair};
pub use roles::{RoleResolver, RoleSet, ADMIN_GROUP, USER_GROUP};
pub use capability::{capability_allowed, Capability};
