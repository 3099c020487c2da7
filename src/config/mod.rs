pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-registry")]
#[command(about = "Register customers from a seed file into an in-memory registry")]
pub struct CliConfig {
    /// Path to the TOML seed file
    #[arg(short, long, default_value = "registry.toml")]
    pub seed: String,

    /// Override the worker count from the seed file
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Only report customers whose email domain matches
    #[arg(long)]
    pub domain: Option<String>,

    /// Print registered customers as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
