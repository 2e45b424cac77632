use tracing::{info, instrument};

use crate::{
    metrics::track_user_deleted,
    modules::users::{
        directory::UserDirectory,
        model::{DeletionRequest, User},
    },
};
use gatehouse_core::AppError;

pub struct UserService;

impl UserService {
    #[instrument(skip(directory))]
    pub fn get_users(directory: &dyn UserDirectory) -> Result<Vec<User>, AppError> {
        directory.list()
    }

    /// Executes an approved deletion. Authorization is not re-checked here.
    #[instrument(skip(directory, request), fields(target = %request.target, requested_by = %request.requested_by.id))]
    pub fn delete_user(
        directory: &dyn UserDirectory,
        request: &DeletionRequest,
    ) -> Result<User, AppError> {
        let user = directory.delete(request)?;

        info!(user_id = %user.id, username = %user.username, "User deleted");
        track_user_deleted();

        Ok(user)
    }
}
