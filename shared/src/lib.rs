//! Shared types for the Saffron back-office
//!
//! Domain models and response structures used by the server and its
//! integration tests.

pub mod models;
pub mod response;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use response::{API_CODE_SUCCESS, ApiResponse};
