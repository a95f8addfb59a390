use std::path::PathBuf;

use clap::{Parser, builder::BoolishValueParser};

/// Command-line arguments for the `statuspage` binary.
///
/// Everything after the flags is positional: the first value is the command
/// verb, the rest are handed to that command untouched.
#[derive(Debug, Parser)]
#[command(
    name = "statuspage",
    version,
    about = "Read and update components and incidents on a hosted status page",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the YAML configuration file (defaults to ~/.statuspage.yml).
    #[arg(long = "config-file", env = "STATUSPAGE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Command verb followed by its arguments, e.g. `components web major`.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}
