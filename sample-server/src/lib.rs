//! Sample users REST service backed by an in-memory store.
//!
//! # Overview
//! Exposes the user CRUD surface over HTTP. All state lives in [`UserStore`];
//! the handlers here only translate between HTTP and store operations.
//!
//! # Routes
//! - `POST /user` — create, returns the record with its assigned ID.
//! - `GET /users?name=` — list, optionally filtered to an exact name match.
//! - `GET /user/{id}` — fetch one record, 404 when absent.
//! - `PATCH /user/{id}` — partial update, 204 on success.
//! - `DELETE /user/{id}` — requires the shared secret in `Authorization`.

pub mod store;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::debug;

pub use store::{CreateUser, StoreError, UpdateUser, User, UserStore, TOKEN};

type AppState = Arc<UserStore>;

/// Build the router with a freshly seeded store.
pub fn app() -> Router {
    app_with_store(Arc::new(UserStore::new()))
}

/// Build the router around an existing store handle. Tests keep a clone of
/// the handle to reset or inspect the store directly.
pub fn app_with_store(store: AppState) -> Router {
    Router::new()
        .route("/user", post(create_user))
        .route("/users", get(list_users))
        .route(
            "/user/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_user(
    State(store): State<AppState>,
    Json(input): Json<CreateUser>,
) -> (StatusCode, Json<User>) {
    let user = store.create(input.name, input.email).await;
    debug!(id = user.id, "created user");
    (StatusCode::CREATED, Json(user))
}

#[derive(Deserialize)]
struct ListParams {
    name: Option<String>,
}

async fn list_users(
    State(store): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<User>> {
    Json(store.list_all(params.name.as_deref()).await)
}

async fn get_user(
    State(store): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<User>, StatusCode> {
    store.get(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(store): State<AppState>,
    Path(id): Path<u32>,
    Json(input): Json<UpdateUser>,
) -> Result<(StatusCode, [(&'static str, &'static str); 1]), StatusCode> {
    store
        .update(id, input)
        .await
        .map(|()| (StatusCode::NO_CONTENT, [("Patch-Id", "7")]))
        .map_err(|_| StatusCode::NOT_FOUND)
}

async fn delete_user(
    State(store): State<AppState>,
    Path(id): Path<u32>,
    headers: HeaderMap,
) -> StatusCode {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    match store.delete(id, token).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::UNAUTHORIZED,
    }
}
