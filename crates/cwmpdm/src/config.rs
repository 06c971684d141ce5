//! CLI configuration -- thin wrapper around `cwmpdm_config`.
//!
//! Adds resolution that lets `GlobalOpts` flags override the file and
//! environment layers.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use cwmpdm_config::{Config, config_path, load_config_from, save_config_to};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Effective settings after flags, env and config file are merged.
#[derive(Debug)]
pub struct Settings {
    pub config: Config,
    pub output: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
}

impl Settings {
    /// Load the config (honouring `--config`) and apply flag overrides.
    pub fn resolve(global: &GlobalOpts) -> Result<Self, CliError> {
        let path = resolve_path(global);
        let config = load_config_from(&path)?;

        let output = match global.output {
            Some(output) => output,
            None => parse_value("defaults.output", &config.defaults.output)?,
        };
        let color = match global.color {
            Some(color) => color,
            None => parse_value("defaults.color", &config.defaults.color)?,
        };

        tracing::debug!(?output, ?color, path = %path.display(), "resolved settings");
        Ok(Self {
            config,
            output,
            color,
            quiet: global.quiet,
        })
    }

    /// Secret values are revealed by the flag or by `defaults.show_secrets`.
    pub fn show_secrets(&self, flag: bool) -> bool {
        flag || self.config.defaults.show_secrets
    }

    /// Parameter prefix: flag, then the per-object entry, then the default.
    pub fn prefix(&self, flag: Option<&str>, object: &str) -> String {
        flag.map_or_else(|| self.config.prefix_for(object).to_owned(), str::to_owned)
    }
}

/// Config file location: `--config` / `CWMPDM_CONFIG`, else the platform default.
pub fn resolve_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

fn parse_value<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}
