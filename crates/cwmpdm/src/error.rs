//! CLI error types with miette diagnostics.
//!
//! Maps `ModelError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use cwmpdm_config::ConfigError;
use cwmpdm_model::ModelError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Lookup ───────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(cwmpdm::not_found),
        help("Run: cwmpdm {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("File not found: {}", path.display())]
    #[diagnostic(code(cwmpdm::file_not_found))]
    FileNotFound { path: PathBuf },

    // ── Documents ────────────────────────────────────────────────────

    #[error("Cannot tell the document format of {}", path.display())]
    #[diagnostic(
        code(cwmpdm::unknown_format),
        help("Use a .json, .yaml, .yml or .toml file extension.")
    )]
    UnknownFormat { path: PathBuf },

    #[error("Invalid {format} document: {message}")]
    #[diagnostic(
        code(cwmpdm::invalid_document),
        help(
            "Keys are CWMP parameter names (e.g. \"AuthUserName\").\n\
             Run: cwmpdm template <object> for a starting point."
        )
    )]
    InvalidDocument { format: String, message: String },

    #[error("Could not render output: {message}")]
    #[diagnostic(code(cwmpdm::render))]
    Render { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(cwmpdm::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Config file already exists at {}", path.display())]
    #[diagnostic(
        code(cwmpdm::config_exists),
        help("Pass --force to overwrite it.")
    )]
    ConfigExists { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(code(cwmpdm::config))]
    Config(#[from] ConfigError),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(cwmpdm::io))]
    Io(#[from] io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::FileNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. }
            | Self::UnknownFormat { .. }
            | Self::InvalidDocument { .. }
            | Self::ConfigExists { .. } => exit_code::USAGE,
            Self::Render { .. } | Self::Config(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── ModelError → CliError mapping ────────────────────────────────────

impl From<ModelError> for CliError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownObject { name } => CliError::NotFound {
                resource_type: "object".into(),
                identifier: name,
                list_command: "objects".into(),
            },

            ModelError::Io { path, source } if source.kind() == io::ErrorKind::NotFound => {
                CliError::FileNotFound { path }
            }

            ModelError::Io { source, .. } => CliError::Io(source),

            ModelError::UnknownFormat { path } => CliError::UnknownFormat { path },

            ModelError::Parse { format, message } => CliError::InvalidDocument {
                format: format.to_string(),
                message,
            },

            ModelError::InvalidRange { value, reason } => CliError::Validation {
                field: "range".into(),
                reason: format!("'{value}': {reason}"),
            },

            ModelError::Serialize { format, message } => CliError::Render {
                message: format!("{format}: {message}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_object_exits_not_found() {
        let err = CliError::from(ModelError::UnknownObject {
            name: "Modem".into(),
        });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(err.to_string(), "object 'Modem' not found");
    }

    #[test]
    fn missing_file_exits_not_found() {
        let err = CliError::from(ModelError::Io {
            path: "gone.json".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert!(matches!(err, CliError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn parse_failure_is_a_usage_error() {
        let err = CliError::from(ModelError::Parse {
            format: cwmpdm_model::Format::Yaml,
            message: "bad indent".into(),
        });
        assert_eq!(err.to_string(), "Invalid yaml document: bad indent");
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
