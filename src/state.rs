use std::fmt;
use std::sync::Arc;

use gatehouse_config::{ConfigError, CorsConfig, JwtConfig, ServerConfig};

use crate::modules::users::directory::{InMemoryUserDirectory, UserDirectory};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserDirectory>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &"<redacted>")
            .field("cors_config", &self.cors_config)
            .field("server_config", &self.server_config)
            .finish_non_exhaustive()
    }
}

pub fn init_app_state() -> Result<AppState, ConfigError> {
    let server_config = ServerConfig::from_env();

    Ok(AppState {
        users: Arc::new(InMemoryUserDirectory::from_seed(&server_config.seed_users)),
        jwt_config: JwtConfig::from_env()?,
        cors_config: CorsConfig::from_env(),
        server_config,
    })
}
