//! User data models and DTOs.
//!
//! - [`User`] - A directory entry
//! - [`DeleteUserParams`] - Path parameters of the delete route
//! - [`DeletionRequest`] - The command handed to the deletion collaborator

use chrono::{DateTime, Utc};
use gatehouse_auth::Principal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A user account in the directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            is_admin,
            created_at: Utc::now(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct DeleteUserParams {
    /// Username of the account to delete
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,
}

/// Request to remove exactly one account, on behalf of `requested_by`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequest {
    pub target: String,
    pub requested_by: Principal,
}

impl DeletionRequest {
    pub fn new(target: impl Into<String>, requested_by: Principal) -> Self {
        Self {
            target: target.into(),
            requested_by,
        }
    }
}
