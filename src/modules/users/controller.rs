use axum::{Extension, Json, extract::State};
use gatehouse_auth::Principal;
use gatehouse_core::{AppError, MessageResponse};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{DeleteUserParams, DeletionRequest, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedPath;

/// List users (any authenticated caller)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(state.users.as_ref())?;
    Ok(Json(users))
}

/// Delete a user (admins only)
///
/// Reached only after `authenticate` and the `AdminGate::DELETE_USER` gate
/// have both passed; the principal comes from the request extensions.
#[utoipa::path(
    delete,
    path = "/api/users/{username}",
    params(DeleteUserParams),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = MessageResponse),
        (status = 403, description = "Forbidden - Only admins can delete users", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 422, description = "Invalid username", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, principal), fields(principal = %principal.id))]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidatedPath(params): ValidatedPath<DeleteUserParams>,
) -> Result<Json<MessageResponse>, AppError> {
    let request = DeletionRequest::new(params.username, principal);
    let user = UserService::delete_user(state.users.as_ref(), &request)?;

    Ok(Json(MessageResponse::new(format!(
        "User {} deleted successfully",
        user.username
    ))))
}
