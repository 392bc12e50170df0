use super::roles::RoleSet;

/// App-level capabilities gated on the resolved roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    CreateProducts,
    CommentOnProducts,
}

/// Pure capability check over an already-resolved role set. Product creation
/// is reserved to admins; commenting is open to admins and standard users.
pub fn capability_allowed(roles: &RoleSet, cap: Capability) -> bool {
    match cap {
        Capability::CreateProducts => roles.is_admin(),
        Capability::CommentOnProducts => roles.is_admin() || roles.is_user(),
    }
}
