//! Stateless HTTP request builder and response parser for the users API.
//!
//! # Design
//! `UserClient` holds only a `base_url` and carries no mutable state between
//! calls. Each REST operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateUser, UpdateUser, User};

/// ID of the pre-seeded administrator record.
pub const ADMIN_ID: u32 = 0;

/// Synchronous, stateless client for the users API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_create_user(&self, input: &CreateUser) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/user", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// List all users, optionally filtered to an exact name match.
    pub fn build_list_users(&self, name: Option<&str>) -> HttpRequest {
        let path = match name {
            Some(name) => format!("{}/users?name={name}", self.base_url),
            None => format!("{}/users", self.base_url),
        };
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_user(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/user/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Fetch the pre-seeded administrator record (ID 0).
    pub fn build_get_admin(&self) -> HttpRequest {
        self.build_get_user(ADMIN_ID)
    }

    pub fn build_update_user(&self, id: u32, input: &UpdateUser) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/user/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Delete a user. The token travels in the `Authorization` header and
    /// must match the server's shared secret.
    pub fn build_delete_user(&self, id: u32, token: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/user/{id}", self.base_url),
            headers: vec![("authorization".to_string(), token.to_string())],
            body: None,
        }
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Absence is a valid result on read paths: a 404 decodes to `Ok(None)`.
    pub fn parse_get_user(&self, response: HttpResponse) -> Result<Option<User>, ApiError> {
        if response.status == 404 {
            return Ok(None);
        }
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// A successful partial update carries no body (204).
    pub fn parse_update_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        401 => Err(ApiError::Unauthorized),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
