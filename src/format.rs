//! Story file formats.

use std::path::Path;

/// A story file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Twine 2 published-story HTML (import only).
    Twine,
    /// JSON backup (import and export).
    Json,
    /// Standalone playable HTML (export only).
    Html,
}

impl Format {
    /// Detect the format to read a file as.
    ///
    /// HTML input is always treated as a Twine export; playable documents
    /// cannot be read back.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        match extension(path.as_ref())?.as_str() {
            "html" | "htm" => Some(Format::Twine),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Detect the format to write a file as.
    pub fn output_from_path(path: impl AsRef<Path>) -> Option<Self> {
        match extension(path.as_ref())?.as_str() {
            "html" | "htm" => Some(Format::Html),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// File extension used when saving in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Twine | Format::Html => "html",
            Format::Json => "json",
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
