//! Storage seam for user accounts.
//!
//! Handlers never touch storage directly; they go through
//! [`UserService`](super::service::UserService), which holds a
//! `&dyn UserDirectory`.

use std::collections::BTreeMap;
use std::sync::RwLock;

use anyhow::anyhow;
use gatehouse_config::SeedUser;
use gatehouse_core::AppError;

use crate::modules::users::model::{DeletionRequest, User};

pub trait UserDirectory: Send + Sync {
    /// All users, ordered by username.
    fn list(&self) -> Result<Vec<User>, AppError>;

    /// Removes `request.target`, returning the removed entry.
    ///
    /// Fails with 404 when no such user exists.
    fn delete(&self, request: &DeletionRequest) -> Result<User, AppError>;
}

/// Process-local directory keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<BTreeMap<String, User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn from_seed(seed: &[SeedUser]) -> Self {
        Self::with_users(
            seed.iter()
                .map(|entry| User::new(entry.username.clone(), entry.is_admin)),
        )
    }

    pub fn contains(&self, username: &str) -> Result<bool, AppError> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal_error("User directory lock poisoned"))?;
        Ok(users.contains_key(username))
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn list(&self) -> Result<Vec<User>, AppError> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal_error("User directory lock poisoned"))?;
        Ok(users.values().cloned().collect())
    }

    fn delete(&self, request: &DeletionRequest) -> Result<User, AppError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::internal_error("User directory lock poisoned"))?;
        users
            .remove(&request.target)
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }
}
