//! # Gatehouse Core
//!
//! Core types shared by every Gatehouse crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`response`]: Small response bodies reused across handlers
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_core::errors::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("User not found"));
//! ```

pub mod errors;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use response::MessageResponse;
