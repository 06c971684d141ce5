// cwmpdm-model: typed records for CWMP (TR-069 family) managed objects.

#[macro_use]
mod macros;

pub mod document;
pub mod error;
pub mod kind;
pub mod model;
pub mod range;
pub mod schema;

// ── Primary re-exports ──────────────────────────────────────────────
pub use document::Format;
pub use error::ModelError;
pub use kind::{KindVisitor, ObjectKind, Standard};
pub use range::RangeValue;
pub use schema::{
    Access, Child, Constraint, CwmpObject, Invariant, Parameter, ParameterValue,
    ToParameterValue, flatten,
};

pub use model::*;
