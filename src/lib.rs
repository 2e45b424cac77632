//! # Gatehouse API
//!
//! A small REST API built with Rust and Axum that separates **authentication**
//! from **authorization** around one destructive route: deleting a user.
//!
//! - **Authentication** answers "is this request's identity genuine?". A bearer
//!   JWT is verified and becomes a [`Principal`](gatehouse_auth::Principal).
//! - **Authorization** answers "may this identity do this?". An
//!   [`AdminGate`](middleware::role::AdminGate) lets the request through only
//!   when the principal holds the admin capability.
//!
//! ## Request pipeline
//!
//! ```text
//! DELETE /api/users/{username}
//!     │
//!     ├─ authenticate      401 {"message": "..."} on missing/invalid token
//!     ├─ require_gate      403 {"message": "Forbidden: Only admins can delete users"}
//!     └─ delete_user       200 / 404 / 422
//! ```
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli.rs            # clap CLI (serve, token)
//! ├── middleware/       # auth (authentication) and role (authorization)
//! ├── modules/users/    # controller, service, directory, model, router
//! ├── docs.rs           # OpenAPI documentation
//! ├── logging.rs        # tracing setup and request logging
//! ├── metrics.rs        # Prometheus metrics
//! └── router.rs         # Main application router
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! PORT=3000
//! METRICS_PORT=9090
//! SEED_USERS=admin:admin,alice,victim
//! ```

pub mod cli;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use gatehouse_auth;
pub use gatehouse_config;
pub use gatehouse_core;
