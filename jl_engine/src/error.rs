//! Error types for the JL engine
//!
//! This module defines the error types used throughout the engine,
//! including camera parameters, display state and subsystem lifecycle.

use std::fmt;

/// Result type for JL engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// JL engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Lock or platform failure inside a subsystem
    BackendError(String),

    /// A numeric or geometric parameter is out of range (fov, clip planes, size...)
    InvalidParameter(String),

    /// Invalid resource (unknown camera key, duplicate name, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, display, render manager)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
