//! `config` handlers: show, path and init.
//!
//! Only `show` reads the config file, so `path` and `init --force` still
//! work when the file is broken.

use cwmpdm_config::ConfigError;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Settings};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::resolve_path(global);

    match args.command {
        ConfigCommand::Show => {
            let settings = Settings::resolve(global)?;
            let text = toml::to_string_pretty(&settings.config).map_err(ConfigError::from)?;
            let out = output::render_single(
                settings.output,
                &settings.config,
                |_| text.clone(),
                |_| text.clone(),
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigExists { path });
            }
            config::save_config_to(&Config::default(), &path)?;
            tracing::info!(path = %path.display(), "wrote config");
            if !global.quiet {
                eprintln!("Config written to {}", path.display());
            }
            Ok(())
        }
    }
}
