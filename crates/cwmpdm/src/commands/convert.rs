//! `convert` handler: re-encode a document in another format.

use std::path::Path;

use cwmpdm_model::{CwmpObject, Format, KindVisitor, ModelError, document};

use crate::cli::ConvertArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

/// Loads a document as `T` and writes it back out in `to`.
///
/// Going through the record fills in every defaulted parameter and drops
/// unknown keys.
struct Reencode<'a> {
    file: &'a Path,
    to: Format,
}

impl KindVisitor for Reencode<'_> {
    type Output = Result<String, ModelError>;

    fn visit<T: CwmpObject>(self) -> Self::Output {
        let record: T = document::load(self.file)?;
        document::to_string(&record, self.to)
    }
}

pub fn handle(args: &ConvertArgs, settings: &Settings) -> Result<(), CliError> {
    let kind = util::resolve_kind(&args.object)?;
    let to = util::doc_format(args.to);

    let text = kind.accept(Reencode {
        file: &args.file,
        to,
    })?;
    output::print_output(&text, settings.quiet);
    Ok(())
}
