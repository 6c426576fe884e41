//! Error types for the Per Diem Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during per-diem calculation.

use thiserror::Error;

/// The main error type for the Per Diem Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use per_diem_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested employee tier was not found in the configuration.
    #[error("Invalid employee tier: {tier}")]
    InvalidTier {
        /// The tier name that was not found.
        tier: String,
    },

    /// The item pool configuration requested more high-value items than
    /// the universe contains.
    #[error("Invalid item pool: {requested} high-value items requested from a pool of {available}")]
    InvalidItemPool {
        /// The number of high-value items requested.
        requested: usize,
        /// The number of items available in the pool.
        available: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
