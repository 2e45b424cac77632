//! Command-line interface for the `gatehouse` binary.
//!
//! With no subcommand the binary runs the API server. Flags override the
//! corresponding environment variables.

use clap::{Parser, Subcommand};
use gatehouse_auth::create_access_token;
use gatehouse_config::{JwtConfig, ServerConfig};
use gatehouse_core::AppError;

#[derive(Parser, Debug)]
#[command(name = "gatehouse")]
#[command(about = "Gatehouse - admin-gated user deletion API", long_about = None)]
pub struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// API port (overrides PORT)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the API server (default)
    Serve,
    /// Print a signed development access token for a principal
    Token {
        /// Subject (user ID) to embed in the token
        subject: String,

        /// Grant the admin capability
        #[arg(long)]
        admin: bool,
    },
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
    }
}

pub fn issue_dev_token(
    subject: &str,
    admin: bool,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_access_token(subject, admin, jwt_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_config() -> ServerConfig {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            metrics_port: 9090,
            seed_users: vec![],
        }
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["gatehouse"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from(["gatehouse", "--host", "127.0.0.1", "--port", "8080"]);
        let mut config = server_config();
        cli.apply_overrides(&mut config);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_token_subcommand() {
        let cli = Cli::parse_from(["gatehouse", "token", "u1", "--admin"]);
        match cli.command {
            Some(Commands::Token { subject, admin }) => {
                assert_eq!(subject, "u1");
                assert!(admin);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_issue_dev_token_round_trips() {
        let config = JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 60,
        };
        let token = issue_dev_token("u2", false, &config).unwrap();
        let claims = gatehouse_auth::verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "u2");
        assert!(!claims.is_admin);
    }
}
