//! Domain DTOs for the users API.
//!
//! # Design
//! These types mirror the sample-server's schema but are defined
//! independently, keeping the client crate free of server dependencies.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single user record returned by the API. `name` and `email` are nullable;
/// `id` is assigned by the server and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Request payload for creating a new user. Null fields are sent as-is and
/// stored as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Request payload for a partial update. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
