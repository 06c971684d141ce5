//! `params` handler: flatten a document into parameter paths and values.

use std::path::Path;

use serde::Serialize;
use tabled::Tabled;

use cwmpdm_model::{CwmpObject, KindVisitor, ModelError, ParameterValue, document, flatten};

use crate::cli::ParamsArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Flattening ──────────────────────────────────────────────────────

/// Loads a document as `T` and flattens it under `prefix`.
struct Flatten<'a> {
    file: &'a Path,
    prefix: &'a str,
}

impl KindVisitor for Flatten<'_> {
    type Output = Result<Vec<ParameterValue>, ModelError>;

    fn visit<T: CwmpObject>(self) -> Self::Output {
        let record: T = document::load(self.file)?;
        Ok(flatten(self.prefix, &record))
    }
}

// ── Rows ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Entry {
    path: String,
    value: String,
    access: String,
}

impl Entry {
    fn new(param: ParameterValue, reveal: bool) -> Self {
        let value = if param.is_secret() && !reveal {
            String::new()
        } else {
            param.value
        };
        Self {
            path: param.path,
            value,
            access: param.access.to_string(),
        }
    }
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Parameter")]
    path: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Access")]
    access: String,
}

impl From<&Entry> for EntryRow {
    fn from(e: &Entry) -> Self {
        Self {
            path: e.path.clone(),
            value: e.value.clone(),
            access: e.access.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ParamsArgs, settings: &Settings) -> Result<(), CliError> {
    let kind = util::resolve_kind(&args.object)?;
    let prefix = settings.prefix(args.prefix.as_deref(), &kind.to_string());
    let reveal = settings.show_secrets(args.show_secrets);

    let values = kind.accept(Flatten {
        file: &args.file,
        prefix: &prefix,
    })?;

    let entries: Vec<Entry> = values
        .into_iter()
        .filter(|p| !args.writable || p.access.is_writable())
        .map(|p| Entry::new(p, reveal))
        .collect();
    tracing::debug!(object = %kind, count = entries.len(), reveal, "flattened document");

    let out = output::render_list(
        settings.output,
        &entries,
        |e| EntryRow::from(e),
        |e| format!("{}={}", e.path, e.value),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use cwmpdm_model::Access;

    use super::*;

    #[test]
    fn secrets_are_blanked_unless_revealed() {
        let secret = ParameterValue {
            path: "SIP.Client.1.AuthPassword".into(),
            value: "hunter2".into(),
            access: Access::Secret,
        };
        assert_eq!(Entry::new(secret.clone(), false).value, "");
        assert_eq!(Entry::new(secret, true).value, "hunter2");
    }

    #[test]
    fn plain_values_are_never_blanked() {
        let param = ParameterValue {
            path: "SIP.Client.1.AuthUserName".into(),
            value: "alice".into(),
            access: Access::ReadWrite,
        };
        let entry = Entry::new(param, false);
        assert_eq!(entry.value, "alice");
        assert_eq!(entry.access, "W");
    }
}
