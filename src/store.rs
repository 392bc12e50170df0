//! Data-store boundary: the user table as seen through the generated
//! GraphQL documents. Lookup keeps genuine absence distinct from transport
//! failure so create-on-error stays an explicit caller policy.

pub mod graphql;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// Persistent user record, keyed by the identity subject id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Group label assigned at confirmation time, when present.
    #[serde(default, rename = "groupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

/// Three-way lookup result: a transport failure is not "absent".
#[derive(Debug)]
pub enum UserLookup {
    Found(UserRecord),
    NotFound,
    QueryError(GateError),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: &str) -> UserLookup;
    /// Create a record. Application-level errors reported in the response
    /// side channel surface as `GateError::Create` with the first message.
    async fn create_user(&self, input: CreateUserInput) -> Result<UserRecord, GateError>;
}
