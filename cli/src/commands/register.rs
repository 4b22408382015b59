use colored::*;

use registrar_common::config::Config;
use registrar_core::platform::PlatformClient;
use registrar_core::register::{Registered, RegistrationService};

use crate::terminal::{colors, print};

pub fn register_log_format(
    client: &dyn PlatformClient,
    app: &str,
    format: &str,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("registering log format", cfg.quiet);
    let registered = RegistrationService::new(client).register_log_format(app, format)?;
    print_registered(app, &registered, cfg);
    Ok(())
}

pub fn register_metrics_endpoint(
    client: &dyn PlatformClient,
    app: &str,
    route: &str,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("registering metrics endpoint", cfg.quiet);
    let registered = RegistrationService::new(client).register_metrics_endpoint(app, route)?;
    print_registered(app, &registered, cfg);
    Ok(())
}

fn print_registered(app: &str, registered: &Registered, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let status: ColoredString = if registered.created {
        "created and bound".green().bold()
    } else {
        "already existed, bound".yellow()
    };

    print::aligned_line("App", app);
    print::aligned_line("Service", registered.service_name.as_str().color(colors::SECONDARY));
    print::aligned_line("Label", registered.label.as_str().color(colors::ACCENT));
    print::aligned_line("Status", status);
    print::end_of_program(cfg.quiet);
}
