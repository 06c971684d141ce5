//! `objects` handler: the object registry as a table.

use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::Tabled;

use cwmpdm_model::{CwmpObject, KindVisitor, ObjectKind};

use crate::cli::ObjectsArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Registry entry ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ObjectInfo {
    name: String,
    standard: String,
    root: bool,
    parameters: usize,
    children: usize,
    invariants: usize,
}

/// Counts parameters, children and invariants of a record type.
struct Shape;

impl KindVisitor for Shape {
    type Output = (usize, usize, usize);

    fn visit<T: CwmpObject>(self) -> Self::Output {
        (
            T::parameters().len(),
            T::children().len(),
            T::invariants().len(),
        )
    }
}

impl From<ObjectKind> for ObjectInfo {
    fn from(kind: ObjectKind) -> Self {
        let (parameters, children, invariants) = kind.accept(Shape);
        Self {
            name: kind.to_string(),
            standard: kind.standard().to_string(),
            root: kind.is_root(),
            parameters,
            children,
            invariants,
        }
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ObjectRow {
    #[tabled(rename = "Object")]
    name: String,
    #[tabled(rename = "Standard")]
    standard: String,
    #[tabled(rename = "Root")]
    root: String,
    #[tabled(rename = "Params")]
    parameters: usize,
    #[tabled(rename = "Children")]
    children: usize,
}

impl From<&ObjectInfo> for ObjectRow {
    fn from(o: &ObjectInfo) -> Self {
        Self {
            name: o.name.clone(),
            standard: o.standard.clone(),
            root: if o.root { "yes".into() } else { String::new() },
            parameters: o.parameters,
            children: o.children,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ObjectsArgs, settings: &Settings) -> Result<(), CliError> {
    let standard = args
        .standard
        .as_deref()
        .map(util::resolve_standard)
        .transpose()?;

    let objects: Vec<ObjectInfo> = ObjectKind::iter()
        .filter(|k| standard.is_none_or(|s| k.standard() == s))
        .filter(|k| !args.roots || k.is_root())
        .map(ObjectInfo::from)
        .collect();

    let out = output::render_list(
        settings.output,
        &objects,
        |o| ObjectRow::from(o),
        |o| o.name.clone(),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
