// ── Model error types ──
//
// Records themselves never fail: assigning a field or appending a table
// entry is infallible. Errors only come from the edges -- parsing range
// strings and reading or writing documents.

use std::path::PathBuf;

use thiserror::Error;

use crate::document::Format;

/// Unified error type for the model crate.
#[derive(Debug, Error)]
pub enum ModelError {
    // ── Value errors ─────────────────────────────────────────────────
    #[error("invalid range value '{value}': {reason}")]
    InvalidRange { value: String, reason: String },

    #[error("unknown object '{name}'")]
    UnknownObject { name: String },

    // ── Document errors ──────────────────────────────────────────────
    #[error("cannot infer document format from '{}'", path.display())]
    UnknownFormat { path: PathBuf },

    #[error("failed to parse {format} document: {message}")]
    Parse { format: Format, message: String },

    #[error("failed to serialize {format} document: {message}")]
    Serialize { format: Format, message: String },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
