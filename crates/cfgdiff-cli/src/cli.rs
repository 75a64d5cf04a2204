use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cfgdiff",
    about = "Structural diffs between server configurations",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show changed settings between two configuration files
    Diff(DiffArgs),
    /// List schema paths and their tags
    Schema(SchemaArgs),
    /// List paths whose values are always masked
    SensitivePaths,
}

#[derive(Args)]
pub struct DiffArgs {
    /// Baseline configuration (.toml or .json)
    pub base: PathBuf,
    /// Actual configuration (.toml or .json)
    pub actual: PathBuf,
    /// Only consider fields carrying this tag
    #[arg(long, requires = "value")]
    pub tag: Option<String>,
    /// Substring the tag value must contain
    #[arg(long, requires = "tag")]
    pub value: Option<String>,
    /// Show secret values instead of masking them
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct SchemaArgs {
    /// Only list paths a diff scoped to this tag reports on
    #[arg(long, requires = "value")]
    pub tag: Option<String>,
    #[arg(long, requires = "tag")]
    pub value: Option<String>,
}
