pub mod register;
pub mod unregister;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use registrar_common::config::DEFAULT_CF_BINARY;

#[derive(Parser)]
#[command(name = "metric-registrar")]
#[command(about = "Registers an app's log format or metrics endpoint with the platform.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat to silence the summary too
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Print more; repeat for trace output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// The cf executable to drive
    #[arg(long, global = true, env = "METRIC_REGISTRAR_CF", default_value = DEFAULT_CF_BINARY)]
    pub cf: PathBuf,

    /// Directory containing the .cf configuration
    #[arg(long, global = true, env = "CF_HOME", hide = true)]
    pub cf_home: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a structured log format for an app
    RegisterLogFormat { app: String, format: String },
    /// Register a metrics endpoint (a path like /metrics, or host.domain/path) for an app
    RegisterMetricsEndpoint { app: String, route: String },
    /// Remove a previously registered log format from an app
    UnregisterLogFormat { app: String, format: String },
    /// Remove a previously registered metrics endpoint from an app
    UnregisterMetricsEndpoint { app: String, route: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
