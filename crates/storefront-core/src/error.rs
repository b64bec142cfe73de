//! Error types for the storefront core

use thiserror::Error;

/// Failures that can end an upload session.
///
/// None of these are fatal: the widget turns every variant into a failure
/// notification and returns to idle.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The injected uploader refused the file
    #[error("Upload rejected: {0}")]
    Rejected(String),

    /// Reading the selected file failed (local preview or before sending)
    #[error("Could not read file: {0}")]
    LocalRead(#[from] std::io::Error),

    /// Transport or decode failure talking to the backend
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend configuration could not be used
    #[error("Invalid backend configuration: {0}")]
    Config(String),
}

/// Result type alias using UploadError
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors from loading or saving the site image settings file.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from the newsletter signup form.
#[derive(Error, Debug)]
pub enum NewsletterError {
    /// The address failed validation before anything was sent
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Subscription failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid backend configuration: {0}")]
    Config(String),
}
