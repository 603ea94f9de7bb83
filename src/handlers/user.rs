// src/handlers/user.rs
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    Json,
};
use tracing::instrument;

use crate::dtos::page::{PageQuery, UserPage};
use crate::dtos::user::{UserPayload, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

// Decoding failures (malformed JSON, non-numeric query values) keep the
// same {"message"} error shape as the validation failures behind them.
fn bad_query(rejection: QueryRejection) -> AppError {
    AppError::validation(rejection.body_text())
}

fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::validation(rejection.body_text())
}

// GET /users - paged list
#[instrument(skip(state, query))]
pub async fn get_users(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<UserPage>, AppError> {
    let Query(query) = query.map_err(bad_query)?;
    let request = query.into_request()?;
    let (users, total) = state.users.get_users(&request).await?;
    Ok(Json(UserPage::new(users, &request, total)))
}

// GET /users/:id - single user
#[instrument(skip(state))]
pub async fn get_user(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

// POST /users - create, responds with the new id and a Location header
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<i64>), AppError> {
    let Json(payload) = payload.map_err(bad_body)?;
    let new_user = payload.validated()?;
    let id = state.users.create_user(new_user).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{id}"))],
        Json(id),
    ))
}

// PUT /users/:id - full overwrite
#[instrument(skip(state, payload))]
pub async fn update_user(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload.map_err(bad_body)?;
    let new_user = payload.validated()?;
    state.users.update_user(id, new_user).await?;
    Ok(StatusCode::NO_CONTENT)
}

// DELETE /users/:id
#[instrument(skip(state))]
pub async fn delete_user(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
