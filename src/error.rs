//! Error types for the Verity library.
//!
//! This module provides error handling for all Verity operations. All errors
//! are represented by the [`VerityError`] enum.
//!
//! # Examples
//!
//! ```
//! use verity::error::{Result, VerityError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VerityError::model("coefficient length mismatch"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Verity operations.
///
/// This enum represents all possible errors that can occur in the Verity
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum VerityError {
    /// I/O errors (reading model files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Model bundle errors (length mismatches, empty vocabulary, etc.)
    #[error("Model error: {0}")]
    Model(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VerityError.
pub type Result<T> = std::result::Result<T, VerityError>;

impl VerityError {
    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        VerityError::Model(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VerityError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VerityError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VerityError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
