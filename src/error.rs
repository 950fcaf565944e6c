//! Error types for storyweave operations.

use thiserror::Error;

/// Errors that can occur while importing or exporting a story.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The markup has no `tw-storydata` element.
    #[error("Not a Twine story export: {0}")]
    FormatNotRecognized(String),

    /// The backup text is not valid JSON (or a field has the wrong type).
    #[error("Malformed backup data: {0}")]
    MalformedData(#[from] serde_json::Error),

    /// The backup parsed but lacks a required field.
    #[error("Invalid backup: {0}")]
    SchemaInvalid(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
