//! Unified error handling.
//!
//! The core itself has no fatal conditions - invalid quantities are clamped
//! and persistence failures degrade to an empty or stale state. `AppError`
//! exists for the surfaces around it: configuration, product supply, and
//! authentication, where a caller does need a typed failure.

use thiserror::Error;

use crate::auth::AuthError;
use crate::config::ConfigError;
use crate::fakestore::ApiError;
use crate::persistence::StorageError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// FakeStore API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Authentication failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
