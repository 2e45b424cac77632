//! # Gatehouse Auth
//!
//! Authentication types and JWT utilities for the Gatehouse API.
//!
//! This crate provides:
//!
//! - [`claims`]: The JWT claim structure carried by access tokens
//! - [`jwt`]: Token creation and verification utilities
//! - [`principal`]: The authenticated actor and the capabilities it may hold
//!
//! Authentication ends here: a verified token becomes a [`Principal`].
//! Deciding what that principal may do is the job of the API's role middleware.
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_auth::{Principal, create_access_token, verify_token};
//! use gatehouse_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//!
//! let token = create_access_token("u1", true, &config)?;
//! let principal = Principal::from(verify_token(&token, &config)?);
//! assert!(principal.is_admin);
//! ```

pub mod claims;
pub mod jwt;
pub mod principal;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
pub use principal::{Capability, Principal};
