//! `template` handler: a document holding an object's default values.

use cwmpdm_model::{CwmpObject, Format, KindVisitor, ModelError, document};

use crate::cli::TemplateArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

/// Serializes `T::default()` in the requested encoding.
struct DefaultDocument(Format);

impl KindVisitor for DefaultDocument {
    type Output = Result<String, ModelError>;

    fn visit<T: CwmpObject>(self) -> Self::Output {
        document::to_string(&T::default(), self.0)
    }
}

pub fn handle(args: &TemplateArgs, settings: &Settings) -> Result<(), CliError> {
    let kind = util::resolve_kind(&args.object)?;
    let format = util::doc_format(args.to);
    tracing::debug!(object = %kind, %format, "rendering template");

    let text = kind.accept(DefaultDocument(format))?;
    output::print_output(&text, settings.quiet);
    Ok(())
}
