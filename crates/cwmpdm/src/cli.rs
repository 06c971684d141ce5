//! Clap derive structures for the `cwmpdm` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. Kept
//! free of workspace crates so `build.rs` can include it for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// cwmpdm -- inspect and flatten CWMP data-model objects
#[derive(Debug, Parser)]
#[command(
    name = "cwmpdm",
    version,
    about = "Inspect CWMP (TR-069) data-model objects from the command line",
    long_about = "Browse the TR-104, TR-143, TR-181 and TR-196 object schemas,\n\
        emit document templates, and flatten JSON/YAML/TOML documents into\n\
        the parameter paths a CWMP GetParameterValues response would carry.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format (defaults to the config file's, then "table")
    #[arg(long, short = 'o', env = "CWMPDM_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, env = "CWMPDM_COLOR", global = true)]
    pub color: Option<ColorMode>,

    /// Config file to use instead of the platform default
    #[arg(long, env = "CWMPDM_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// TOML
    Toml,
    /// Plain text, one entry per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Document encoding for `template` and `convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    Json,
    #[value(alias = "yml")]
    Yaml,
    Toml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the object kinds known to cwmpdm
    #[command(alias = "ls")]
    Objects(ObjectsArgs),

    /// Show an object's parameters, children and invariants
    #[command(alias = "desc")]
    Describe(DescribeArgs),

    /// Print a document holding an object's default values
    Template(TemplateArgs),

    /// Flatten a document into parameter paths and values
    #[command(alias = "flatten")]
    Params(ParamsArgs),

    /// Re-encode a document in another format
    Convert(ConvertArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Object commands ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ObjectsArgs {
    /// Only list objects from one standard (e.g. TR-104)
    #[arg(long, short = 's')]
    pub standard: Option<String>,

    /// Only list the root object of each standard
    #[arg(long)]
    pub roots: bool,
}

#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Object kind (e.g. SIP, Client.Contact, PRACH)
    pub object: String,

    /// Include the parameters of nested objects and tables
    #[arg(long, short = 'r')]
    pub recursive: bool,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Object kind
    pub object: String,

    /// Document encoding
    #[arg(long, short = 't', default_value = "yaml")]
    pub to: DocFormat,
}

#[derive(Debug, Args)]
pub struct ParamsArgs {
    /// Object kind the document holds
    pub object: String,

    /// Document file (.json, .yaml/.yml or .toml)
    pub file: PathBuf,

    /// Path prefix prepended to every parameter (e.g. Device.DeviceInfo.)
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,

    /// Print secret parameters' values instead of an empty string
    #[arg(long)]
    pub show_secrets: bool,

    /// Only list parameters an ACS may write
    #[arg(long, short = 'w')]
    pub writable: bool,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Object kind the document holds
    pub object: String,

    /// Document file (.json, .yaml/.yml or .toml)
    pub file: PathBuf,

    /// Target encoding
    #[arg(long, short = 't')]
    pub to: DocFormat,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file holding the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
