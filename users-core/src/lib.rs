//! Synchronous API client core for the users service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `UserClient` is stateless — it holds only `base_url`.
//! - Each REST operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), replacing the original's declarative
//!   route annotations with one explicit method pair per operation.
//! - "User not found" on GET is decoded as `Ok(None)` rather than an error;
//!   absence is a valid result on read paths.
//! - DTOs are defined independently from the sample-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{UserClient, ADMIN_ID};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateUser, UpdateUser, User};
