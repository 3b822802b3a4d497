//! Error types for the sitterscope panel core.
//!
//! This module defines the centralized error type [`SitterscopeError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error;

/// The main error type for sitterscope operations.
///
/// This enum consolidates the error conditions that can occur in the panel core.
/// The core itself performs no I/O; errors arise at its decode boundaries — the
/// result-page payload handed over by the transport collaborator, and
/// configuration supplied by the host.
#[derive(Debug, Error)]
pub enum SitterscopeError {
    /// A result page payload could not be decoded.
    ///
    /// Occurs when the transport collaborator hands over a response body that
    /// does not match the expected pagination envelope. Automatically converts
    /// from `serde_json::Error` using the `#[from]` attribute.
    #[error("Result page error: {0}")]
    Page(#[from] serde_json::Error),

    /// Configuration is invalid or malformed.
    ///
    /// Occurs when a TOML configuration document cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

/// A specialized `Result` type for sitterscope operations.
///
/// This is a type alias for `std::result::Result<T, SitterscopeError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, SitterscopeError>;
