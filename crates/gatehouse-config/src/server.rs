use std::env;

/// A directory entry created at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedUser {
    pub username: String,
    pub is_admin: bool,
}

impl SeedUser {
    /// Parses `name` or `name:admin`. Any other suffix yields a regular user.
    pub fn parse(entry: &str) -> Option<Self> {
        let entry = entry.trim();
        let (username, flag) = match entry.split_once(':') {
            Some((name, flag)) => (name.trim(), Some(flag.trim())),
            None => (entry, None),
        };

        if username.is_empty() {
            return None;
        }

        Some(Self {
            username: username.to_string(),
            is_admin: flag.is_some_and(|f| f.eq_ignore_ascii_case("admin")),
        })
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    pub seed_users: Vec<SeedUser>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            metrics_port: env::var("METRICS_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(9090),
            seed_users: parse_seed_users(
                &env::var("SEED_USERS").unwrap_or_else(|_| "admin:admin,alice,victim".to_string()),
            ),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn metrics_address(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}

fn parse_seed_users(raw: &str) -> Vec<SeedUser> {
    raw.split(',').filter_map(SeedUser::parse).collect()
}
