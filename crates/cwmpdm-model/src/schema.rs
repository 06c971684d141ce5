// ── Schema metadata ──
//
// Every record carries a static description of its parameters: the CWMP
// name, access right and documented constraint. The metadata mirrors the
// schema annotations; nothing here enforces it.

use std::fmt;
use std::net::IpAddr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

// ── Access ──────────────────────────────────────────────────────────

/// Access right declared for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Access {
    /// Reported by the device, never written by the ACS.
    #[strum(serialize = "R")]
    ReadOnly,
    /// Writable by the ACS.
    #[strum(serialize = "W")]
    ReadWrite,
    /// Writable, but reading it always yields an empty string (passwords).
    #[strum(serialize = "W (hidden)")]
    Secret,
}

impl Access {
    pub fn is_writable(self) -> bool {
        matches!(self, Self::ReadWrite | Self::Secret)
    }
}

// ── Constraint ──────────────────────────────────────────────────────

/// Documented value constraint for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Constraint {
    None,
    /// Maximum string length (or per-item length for lists).
    Size { max: u32 },
    /// Inclusive numeric range; either side may be open.
    Range { min: Option<i64>, max: Option<i64> },
    /// One of the listed CWMP strings.
    Enumeration(&'static [&'static str]),
    Pattern(&'static str),
}

impl Constraint {
    pub const NONE: Self = Self::None;

    pub const fn size(max: u32) -> Self {
        Self::Size { max }
    }

    pub const fn range(min: i64, max: i64) -> Self {
        Self::Range {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn min(min: i64) -> Self {
        Self::Range {
            min: Some(min),
            max: None,
        }
    }

    pub const fn one_of(values: &'static [&'static str]) -> Self {
        Self::Enumeration(values)
    }

    pub const fn pattern(pattern: &'static str) -> Self {
        Self::Pattern(pattern)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Size { max } => write!(f, "size {max}"),
            Self::Range { min, max } => {
                let lo = min.map(|v| v.to_string()).unwrap_or_default();
                let hi = max.map(|v| v.to_string()).unwrap_or_default();
                write!(f, "[{lo}:{hi}]")
            }
            Self::Enumeration(values) => write!(f, "{}", values.join("|")),
            Self::Pattern(p) => write!(f, "pattern {p}"),
        }
    }
}

// ── Parameter / child descriptors ───────────────────────────────────

/// One leaf parameter of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    pub access: Access,
    pub constraint: Constraint,
    /// Comma-separated list parameter.
    pub list: bool,
}

impl Parameter {
    pub const fn scalar(name: &'static str, access: Access, constraint: Constraint) -> Self {
        Self {
            name,
            access,
            constraint,
            list: false,
        }
    }

    pub const fn list(name: &'static str, access: Access, constraint: Constraint) -> Self {
        Self {
            name,
            access,
            constraint,
            list: true,
        }
    }
}

/// A nested object: either a single instance or a multi-instance table.
#[derive(Clone, Copy)]
pub struct Child {
    pub name: &'static str,
    pub table: bool,
    /// CWMP name of the record type backing the child.
    pub object: &'static str,
    pub parameters: fn() -> &'static [Parameter],
    pub children: fn() -> &'static [Child],
}

impl Child {
    pub const fn object<T: CwmpObject>(name: &'static str) -> Self {
        Self {
            name,
            table: false,
            object: T::NAME,
            parameters: T::parameters,
            children: T::children,
        }
    }

    pub const fn table<T: CwmpObject>(name: &'static str) -> Self {
        Self {
            name,
            table: true,
            object: T::NAME,
            parameters: T::parameters,
            children: T::children,
        }
    }

    /// Path segment as it appears in a parameter path.
    pub fn path_segment(&self) -> String {
        if self.table {
            format!("{}.{{i}}.", self.name)
        } else {
            format!("{}.", self.name)
        }
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Child")
            .field("name", &self.name)
            .field("table", &self.table)
            .field("object", &self.object)
            .finish_non_exhaustive()
    }
}

/// A documented cross-field rule. Carried as metadata, never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Invariant {
    /// Exactly one of the named parameters is set (others left at -1).
    ExactlyOne(&'static [&'static str]),
    /// The tuple of named parameters is unique across the table.
    Unique(&'static [&'static str]),
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactlyOne(names) => write!(f, "exactly one of {}", names.join(", ")),
            Self::Unique(names) => write!(f, "unique ({})", names.join(", ")),
        }
    }
}

// ── CwmpObject ──────────────────────────────────────────────────────

/// A record mirroring one CWMP object node.
pub trait CwmpObject: Serialize + DeserializeOwned + Default + Clone + fmt::Debug {
    /// CWMP object name (last path segment, without index).
    const NAME: &'static str;

    fn parameters() -> &'static [Parameter];

    fn children() -> &'static [Child];

    fn invariants() -> &'static [Invariant];

    /// Push one value per leaf parameter, depth first, paths rooted at `prefix`.
    fn visit_values(&self, prefix: &str, out: &mut Vec<ParameterValue>);

    fn parameter(name: &str) -> Option<&'static Parameter> {
        Self::parameters().iter().find(|p| p.name == name)
    }
}

// ── Parameter values ────────────────────────────────────────────────

/// A flattened `path = value` pair, as a GetParameterValues response carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterValue {
    pub path: String,
    pub value: String,
    pub access: Access,
}

impl ParameterValue {
    pub fn new<V: ToParameterValue + ?Sized>(path: String, value: &V, access: Access) -> Self {
        Self {
            path,
            value: value.to_parameter_value(),
            access,
        }
    }

    pub fn is_secret(&self) -> bool {
        self.access == Access::Secret
    }
}

/// Flatten a record into its parameter list.
///
/// Secret parameters keep their value here; renderers decide whether to
/// hide it (see [`ParameterValue::is_secret`]).
pub fn flatten<T: CwmpObject>(prefix: &str, object: &T) -> Vec<ParameterValue> {
    let mut out = Vec::new();
    object.visit_values(prefix, &mut out);
    tracing::debug!(object = T::NAME, prefix, count = out.len(), "flattened object");
    out
}

/// CWMP string form of a parameter value.
pub trait ToParameterValue {
    fn to_parameter_value(&self) -> String;
}

impl ToParameterValue for bool {
    fn to_parameter_value(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

impl ToParameterValue for String {
    fn to_parameter_value(&self) -> String {
        self.clone()
    }
}

impl ToParameterValue for str {
    fn to_parameter_value(&self) -> String {
        self.to_owned()
    }
}

impl ToParameterValue for DateTime<Utc> {
    fn to_parameter_value(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl<T: ToParameterValue> ToParameterValue for Option<T> {
    fn to_parameter_value(&self) -> String {
        self.as_ref()
            .map(ToParameterValue::to_parameter_value)
            .unwrap_or_default()
    }
}

impl<T: ToParameterValue> ToParameterValue for Vec<T> {
    fn to_parameter_value(&self) -> String {
        self.iter()
            .map(ToParameterValue::to_parameter_value)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Implement [`ToParameterValue`] through `Display` for the listed types.
macro_rules! display_parameter_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::schema::ToParameterValue for $ty {
                fn to_parameter_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

pub(crate) use display_parameter_value;

display_parameter_value!(u8, u16, u32, u64, i32, i64, IpAddr, Url, Uuid);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn constraint_display() {
        assert_eq!(Constraint::range(-1, 63).to_string(), "[-1:63]");
        assert_eq!(Constraint::min(0).to_string(), "[0:]");
        assert_eq!(Constraint::size(256).to_string(), "size 256");
        assert_eq!(
            Constraint::one_of(&["UDP", "TCP"]).to_string(),
            "UDP|TCP"
        );
        assert_eq!(Constraint::NONE.to_string(), "");
    }

    #[test]
    fn optional_values_render_empty() {
        let none: Option<u32> = None;
        assert_eq!(none.to_parameter_value(), "");
        assert_eq!(Some(5060_u32).to_parameter_value(), "5060");
    }

    #[test]
    fn lists_render_comma_separated() {
        let list = vec!["G.711MuLaw".to_owned(), "G.729".to_owned()];
        assert_eq!(list.to_parameter_value(), "G.711MuLaw,G.729");
        assert_eq!(Vec::<u32>::new().to_parameter_value(), "");
    }

    #[test]
    fn timestamps_render_utc_seconds() {
        let ts: DateTime<Utc> = "2024-03-01T12:30:00Z".parse().unwrap();
        assert_eq!(ts.to_parameter_value(), "2024-03-01T12:30:00Z");
    }

    #[test]
    fn secret_access_is_writable() {
        assert!(Access::Secret.is_writable());
        assert!(!Access::ReadOnly.is_writable());
    }
}
