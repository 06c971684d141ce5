//! Shared helpers for command handlers.

use cwmpdm_model::{Format, ObjectKind, Standard};

use crate::cli::DocFormat;
use crate::error::CliError;

/// Resolve an object kind name, case-insensitively.
pub fn resolve_kind(name: &str) -> Result<ObjectKind, CliError> {
    Ok(ObjectKind::lookup(name)?)
}

/// Resolve a standard name such as `TR-181` (or `tr181`).
pub fn resolve_standard(name: &str) -> Result<Standard, CliError> {
    let normalized = name.trim().to_ascii_uppercase().replace("TR", "TR-").replace("--", "-");
    normalized.parse().map_err(|_| CliError::NotFound {
        resource_type: "standard".into(),
        identifier: name.into(),
        list_command: "objects".into(),
    })
}

pub fn doc_format(format: DocFormat) -> Format {
    match format {
        DocFormat::Json => Format::Json,
        DocFormat::Yaml => Format::Yaml,
        DocFormat::Toml => Format::Toml,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn standard_accepts_loose_spelling() {
        assert_eq!(resolve_standard("TR-104").unwrap(), Standard::Tr104);
        assert_eq!(resolve_standard("tr181").unwrap(), Standard::Tr181);
        assert_eq!(resolve_standard("tr-196").unwrap(), Standard::Tr196);
        assert!(resolve_standard("TR-069").is_err());
    }

    #[test]
    fn unknown_kind_is_not_found() {
        let err = resolve_kind("Modem").unwrap_err();
        assert!(matches!(err, CliError::NotFound { .. }));
    }
}
