//! Error handling types for limelight.
//!
//! This module provides error types used throughout the focus engine.

use thiserror::Error;

/// Comprehensive error type for focus-engine operations
#[derive(Debug, Error)]
pub enum LimelightError {
    /// A provider query (symbols, references) was rejected by the host
    #[error("Provider request failed: {message}")]
    Provider { message: String },

    /// The host editor surface reported a failure
    #[error("Host error: {message}")]
    Host { message: String },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for focus-engine operations
pub type LimelightResult<T> = Result<T, LimelightError>;

/// Helper functions for common error patterns
impl LimelightError {
    /// Create a provider error
    pub fn provider(message: impl Into<String>) -> Self {
        LimelightError::Provider {
            message: message.into(),
        }
    }

    /// Create a host error
    pub fn host(message: impl Into<String>) -> Self {
        LimelightError::Host {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        LimelightError::Internal(message.into())
    }
}
