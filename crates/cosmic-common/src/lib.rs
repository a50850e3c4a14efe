//! Cosmic Crew Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared plumbing for the Cosmic Crew workspace members:
//!
//! - **Logging**: `tracing` subscriber setup driven by `LOG_*` variables
//! - **Error Handling**: the common error and result types

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{CommonError, Result};
