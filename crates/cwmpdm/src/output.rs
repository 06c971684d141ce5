//! Output formatting: table, JSON, YAML, TOML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats go through the model's document encoders, plain
//! emits one entry per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use cwmpdm_model::{Format, document};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Section heading for detail views.
pub fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_owned()
    }
}

/// De-emphasized text (empty sections, hints).
pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_owned()
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// TOML has no top-level arrays; lists are wrapped in an `items` table.
#[derive(Serialize)]
struct Items<'a, T> {
    items: &'a [T],
}

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact` / `yaml` / `toml`: serializes the data via serde
/// - `plain`: calls `line_fn` on each item to emit one line per item
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    line_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Toml => render_structured(&Items { items: data }, Format::Toml),
        OutputFormat::Plain => Ok(data.iter().map(&line_fn).collect::<Vec<_>>().join("\n")),
        other => render_serde(data, other),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since detail views combine several tables.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    plain_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Plain => Ok(plain_fn(data)),
        other => render_serde(data, other),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", output.trim_end_matches('\n'));
}

// ── Format-specific renderers ────────────────────────────────────────

pub fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_serde<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::JsonCompact => {
            serde_json::to_string(data).map_err(|e| CliError::Render {
                message: e.to_string(),
            })
        }
        OutputFormat::Yaml => render_structured(data, Format::Yaml),
        OutputFormat::Toml => render_structured(data, Format::Toml),
        OutputFormat::Json | OutputFormat::Table | OutputFormat::Plain => {
            render_structured(data, Format::Json)
        }
    }
}

/// Serialize through the document encoders shared with `template` / `convert`.
pub fn render_structured<T: Serialize + ?Sized>(
    data: &T,
    format: Format,
) -> Result<String, CliError> {
    Ok(document::to_string(data, format)?)
}
