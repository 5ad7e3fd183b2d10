//! Error types for Digital Monk operations.

use thiserror::Error;

/// Errors a fortune request can settle with.
///
/// The `Display` text of each variant is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FortuneError {
    #[error("API Key is not configured. Cannot connect to the digital monk's wisdom.")]
    MissingApiKey,

    #[error("Invalid API Key. Please check your configuration.")]
    InvalidApiKey,

    #[error("The digital monk's connection is unstable. Please try again later.")]
    ServiceUnavailable,
}

/// Errors raised by a key-value storage backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Errors raised when exporting history.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("No fortune history to download yet! Interact with the monk first.")]
    NothingToExport,
}

/// Errors raised when changing a selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{value:?} is not a valid option for {field}")]
    UnknownOption { field: &'static str, value: String },
}
