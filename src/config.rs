//! Explicit runtime configuration. Constructed once at process start and
//! passed by reference to the adapters; there is no global mutable client
//! configuration anywhere in this crate.

#[derive(Debug, Clone)]
pub struct GateConfig {
    /// GraphQL endpoint of the data store.
    pub graphql_endpoint: String,
    /// Route the navigation guard redirects to on a failed liveness check.
    pub login_path: String,
    /// Sentinel email used when the session carries no login id.
    pub placeholder_email: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: "http://localhost:20002/graphql".to_string(),
            login_path: "/login".to_string(),
            placeholder_email: "unknown@example.com".to_string(),
        }
    }
}

impl GateConfig {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            graphql_endpoint: std::env::var("CATALOG_GQL_ENDPOINT").unwrap_or(d.graphql_endpoint),
            login_path: std::env::var("CATALOG_LOGIN_PATH").unwrap_or(d.login_path),
            placeholder_email: std::env::var("CATALOG_PLACEHOLDER_EMAIL").unwrap_or(d.placeholder_email),
        }
    }
}
