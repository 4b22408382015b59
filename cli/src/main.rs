mod adapters;
mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, register, unregister};
use registrar_common::config::Config;
use tracing::Level;

use crate::adapters::cf::CfCli;
use crate::terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        cf_binary: commands.cf,
        cf_home: commands.cf_home,
    };

    logging::init_logging(&cfg);

    let cf = CfCli::new(&cfg);

    let result = match commands.command {
        Commands::RegisterLogFormat { app, format } => {
            register::register_log_format(&cf, &app, &format, &cfg)
        }
        Commands::RegisterMetricsEndpoint { app, route } => {
            register::register_metrics_endpoint(&cf, &app, &route, &cfg)
        }
        Commands::UnregisterLogFormat { app, format } => {
            unregister::unregister_log_format(&cf, &app, &format, &cfg)
        }
        Commands::UnregisterMetricsEndpoint { app, route } => {
            unregister::unregister_metrics_endpoint(&cf, &app, &route, &cfg)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let logging_enabled = tracing::enabled!(Level::ERROR);
            print::report_error(&err, logging_enabled, &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}
