// ── Document (de)serialization ──
//
// A document is one record serialized with CWMP parameter names as keys.
// Missing keys take the record's defaults, so a document only needs the
// parameters it actually sets.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{Display, EnumIter, EnumString};

use crate::error::ModelError;

/// Supported document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    Json,
    #[strum(to_string = "yaml", serialize = "yml")]
    Yaml,
    Toml,
}

impl Format {
    /// Infer the format from a file extension (`.json`, `.yaml`/`.yml`, `.toml`).
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| ModelError::UnknownFormat {
                path: path.to_path_buf(),
            })
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }
}

/// Parse a record from text in the given format.
pub fn from_str<T: DeserializeOwned>(text: &str, format: Format) -> Result<T, ModelError> {
    let parse_err = |message: String| ModelError::Parse { format, message };
    match format {
        Format::Json => serde_json::from_str(text).map_err(|e| parse_err(e.to_string())),
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| parse_err(e.to_string())),
        Format::Toml => toml::from_str(text).map_err(|e| parse_err(e.to_string())),
    }
}

/// Serialize a record. JSON and TOML output is pretty-printed.
pub fn to_string<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<String, ModelError> {
    let ser_err = |message: String| ModelError::Serialize { format, message };
    match format {
        Format::Json => serde_json::to_string_pretty(value).map_err(|e| ser_err(e.to_string())),
        Format::Yaml => serde_yaml::to_string(value).map_err(|e| ser_err(e.to_string())),
        Format::Toml => toml::to_string_pretty(value).map_err(|e| ser_err(e.to_string())),
    }
}

/// Read and parse a record from a file, inferring the format from its extension.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), %format, bytes = text.len(), "loading document");
    from_str(&text, format)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::model::tr104::{Client, ClientContact};

    fn sample_client() -> Client {
        Client::default()
            .with_enable(true)
            .with_auth_user_name("alice")
            .with_max_sessions(5_u32)
            .with_contact(ClientContact::default().with_port(5062_u32))
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.YML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("dir/a.toml")).unwrap(), Format::Toml);
        assert!(matches!(
            Format::from_path(Path::new("a.xml")),
            Err(ModelError::UnknownFormat { .. })
        ));
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn every_format_round_trips() {
        let client = sample_client();
        for format in Format::iter() {
            let text = to_string(&client, format).unwrap();
            let back: Client = from_str(&text, format).unwrap();
            assert_eq!(back, client, "format {format}");
        }
    }

    #[test]
    fn parse_error_names_the_format() {
        let err = from_str::<Client>("{ not json", Format::Json).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse json document"));
    }

    #[test]
    fn load_reads_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "Enable: true\nAuthUserName: bob").unwrap();
        let client: Client = load(file.path()).unwrap();
        assert!(client.enable);
        assert_eq!(client.auth_user_name, "bob");
        assert!(client.contacts.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load::<Client>(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
