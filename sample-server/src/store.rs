//! In-memory user store with monotonic ID assignment.
//!
//! # Design
//! `UserStore` owns the only mutable state in the server: a map from ID to
//! user record behind an async `RwLock`, plus an atomic counter for ID
//! assignment. Every operation is single-step and linearizable; nothing here
//! blocks on anything but the lock itself. "Not found" on read paths is a
//! value (`Option`), not an error — only update and delete report structured
//! failures.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Shared secret required to authorize deletions.
pub const TOKEN: &str = "123";

/// First ID handed out to user-created records. Seed records sit below this
/// and are never reassigned.
const FIRST_ASSIGNED_ID: u32 = 100;

/// A single user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Request payload for creating a user. Both fields are nullable.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request payload for a partial update. Fields left out of the JSON remain
/// unchanged on the stored record.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Structured failure outcomes of store mutations. Both are expected,
/// recoverable results reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record exists for the given ID.
    NotFound,

    /// The supplied deletion token did not match the shared secret.
    Unauthorized,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "user not found"),
            StoreError::Unauthorized => write!(f, "invalid token"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Process-lifetime store mapping IDs to user records.
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<HashMap<u32, User>>,
    next_id: AtomicU32,
}

impl UserStore {
    /// Create a store pre-populated with the three seed records.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(seed_records()),
            next_id: AtomicU32::new(FIRST_ASSIGNED_ID),
        }
    }

    /// Insert a new record under the next counter value and return it.
    /// Never fails; concurrent calls always receive distinct IDs.
    pub async fn create(&self, name: Option<String>, email: Option<String>) -> User {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = User { id, name, email };
        self.users.write().await.insert(id, user.clone());
        user
    }

    /// All records sorted ascending by ID, optionally filtered to an exact
    /// (case-sensitive) name match.
    pub async fn list_all(&self, name_filter: Option<&str>) -> Vec<User> {
        let users = self.users.read().await;
        let mut result: Vec<User> = users
            .values()
            .filter(|user| match name_filter {
                Some(name) => user.name.as_deref() == Some(name),
                None => true,
            })
            .cloned()
            .collect();
        result.sort_by_key(|user| user.id);
        result
    }

    /// Look up a record by ID. Absence is a valid result, not an error.
    pub async fn get(&self, id: u32) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    /// Overwrite only the fields present in `updates`, leaving the rest
    /// untouched.
    pub async fn update(&self, id: u32, updates: UpdateUser) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(name) = updates.name {
            user.name = Some(name);
        }
        if let Some(email) = updates.email {
            user.email = Some(email);
        }
        Ok(())
    }

    /// Remove the record if present. Removing an absent ID is not an error;
    /// a mismatched token is.
    pub async fn delete(&self, id: u32, token: &str) -> Result<(), StoreError> {
        if token != TOKEN {
            return Err(StoreError::Unauthorized);
        }
        self.users.write().await.remove(&id);
        Ok(())
    }

    /// Drop all records and reinsert the three seed records. The ID counter
    /// keeps running; freed IDs are never reused.
    pub async fn reset(&self) {
        let mut users = self.users.write().await;
        *users = seed_records();
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    pub async fn contains(&self, id: u32) -> bool {
        self.users.read().await.contains_key(&id)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_records() -> HashMap<u32, User> {
    [
        seed_user(0, "admin", "admin@mail.ru"),
        seed_user(1, "user", "user@mail.ru"),
        seed_user(2, "Sergey", "guest@mail.ru"),
    ]
    .into_iter()
    .map(|user| (user.id, user))
    .collect()
}

fn seed_user(id: u32, name: &str, email: &str) -> User {
    User {
        id,
        name: Some(name.to_string()),
        email: Some(email.to_string()),
    }
}
