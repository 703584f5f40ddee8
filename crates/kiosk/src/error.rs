//! Kiosk error types.

use thiserror::Error;

/// Errors that end an ordering session early.
///
/// Bad user input never shows up here; it is reported on the console and the
/// session carries on.
#[derive(Debug, Error)]
pub enum KioskError {
    /// Reading the customer's input or writing the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for kiosk results.
pub type Result<T> = std::result::Result<T, KioskError>;
