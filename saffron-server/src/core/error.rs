//! Server-level errors
//!
//! Fatal startup/shutdown failures. Request-level errors live in
//! [`crate::utils::error::AppError`].

use thiserror::Error;

/// Server lifecycle errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings storage error: {0}")]
    Settings(#[from] crate::settings::StorageError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Server-level Result type
pub type Result<T> = std::result::Result<T, ServerError>;
