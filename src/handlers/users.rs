//! User CRUD handlers
//!
//! Seven operations over the [`UserStore`]: list, get, create, full
//! update (name), partial hours update, delete-all, delete-by-id. The
//! handlers do input validation and status-code selection; everything
//! else is a single round trip to the store.
//!
//! NotFound and BadRequest responses carry an empty body — the upstream
//! API contract is the bare status code.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{Error, Result},
    models::{AddHours, CreateUser, UpdateUser, User},
    state::AppState,
    store::UserStore,
};

/// `GET /users` — list every user in store order
pub async fn list_users<S: UserStore>(State(state): State<AppState<S>>) -> Result<Json<Vec<User>>> {
    let users = state.store().find_all().await?;
    tracing::info!("GET /users - returning {} users", users.len());
    Ok(Json(users))
}

/// `GET /users/{id}` — fetch one user, 404 if absent
pub async fn get_user<S: UserStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
) -> Result<Json<User>> {
    tracing::info!("GET /users/{} - fetching user", id);
    let user = state
        .store()
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

/// `POST /users` — create a user, 400 if the name is missing or blank
///
/// The assigned id comes from the store; `hoursWorked` is forced to 0
/// regardless of what the client sends.
pub async fn create_user<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>)> {
    let name = payload
        .trimmed_name()
        .ok_or_else(|| Error::BadRequest("name is required and must be non-empty".to_string()))?;

    let user = state.store().create(name.to_string()).await?;
    tracing::info!("POST /users - created user {} ({})", user.id, user.name);
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /users/{id}` — overwrite the name if the payload carries a
/// non-blank one, 404 if absent
///
/// A missing or blank name leaves the stored name unchanged; hours are
/// never touched here.
pub async fn update_user<S: UserStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<User>> {
    let mut user = state
        .store()
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("user {}", id)))?;

    if let Some(name) = payload.trimmed_name() {
        user.name = name.to_string();
    }

    let user = state.store().save(user).await?;
    tracing::info!("PUT /users/{} - name is now {}", id, user.name);
    Ok(Json(user))
}

/// `PATCH /users/{id}` — add hours to the counter
///
/// Existence is checked first, so an absent id is a 404 even when the
/// amount is also invalid; a non-positive amount on an existing user is
/// a 400 and leaves the counter untouched.
pub async fn add_hours<S: UserStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
    Json(payload): Json<AddHours>,
) -> Result<Json<User>> {
    let mut user = state
        .store()
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("user {}", id)))?;

    if payload.hours_to_add <= 0 {
        return Err(Error::BadRequest(
            "hoursToAdd must be a positive number".to_string(),
        ));
    }

    user.hours_worked += payload.hours_to_add as u64;
    let user = state.store().save(user).await?;
    tracing::info!(
        "PATCH /users/{} - added {} hours, total {}",
        id,
        payload.hours_to_add,
        user.hours_worked
    );
    Ok(Json(user))
}

/// `DELETE /users` — remove every user and return the (empty) sequence
pub async fn delete_all_users<S: UserStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<User>>> {
    state.store().delete_all().await?;
    let users = state.store().find_all().await?;
    tracing::info!("DELETE /users - all users removed");
    Ok(Json(users))
}

/// `DELETE /users/{id}` — remove one user and return it, 404 if absent
pub async fn delete_user<S: UserStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
) -> Result<Json<User>> {
    let user = state
        .store()
        .delete(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("user {}", id)))?;
    tracing::info!("DELETE /users/{} - removed {}", id, user.name);
    Ok(Json(user))
}
