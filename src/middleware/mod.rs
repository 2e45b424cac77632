//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: Authentication: bearer JWT verification and the `authenticate` stage
//! - [`role`]: Authorization: capability gates applied after authentication
//!
//! # Request Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `authenticate` validates the JWT and attaches a `Principal` (401 on failure)
//! 3. `require_gate` evaluates the route's `AdminGate` (403 on denial)
//! 4. Handler executes if both stages pass
//!
//! Routes that only need an identity take the `AuthUser` extractor directly
//! and skip the gate.
//!
//! # Example
//!
//! ```ignore
//! use axum::middleware;
//! use tower::ServiceBuilder;
//! use crate::middleware::{auth::authenticate, role::{AdminGate, require_gate}};
//!
//! let stages = ServiceBuilder::new()
//!     .layer(middleware::from_fn_with_state(state.clone(), authenticate))
//!     .layer(middleware::from_fn_with_state(AdminGate::DELETE_USER, require_gate));
//! ```

pub mod auth;
pub mod role;
