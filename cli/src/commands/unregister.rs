use colored::*;
use tracing::warn;

use registrar_common::config::Config;
use registrar_core::platform::PlatformClient;
use registrar_core::register::{RegistrationService, Removal};

use crate::terminal::{colors, print};

pub fn unregister_log_format(
    client: &dyn PlatformClient,
    app: &str,
    format: &str,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("removing log format", cfg.quiet);
    let removal = RegistrationService::new(client).unregister_log_format(app, format)?;
    print_removal(app, &removal, cfg);
    Ok(())
}

pub fn unregister_metrics_endpoint(
    client: &dyn PlatformClient,
    app: &str,
    route: &str,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("removing metrics endpoint", cfg.quiet);
    let removal = RegistrationService::new(client).unregister_metrics_endpoint(app, route)?;
    print_removal(app, &removal, cfg);
    Ok(())
}

fn print_removal(app: &str, removal: &Removal, cfg: &Config) {
    let (service_name, status): (&str, ColoredString) = match removal {
        Removal::Removed { service_name } => {
            (service_name.as_str(), "unbound and deleted".green().bold())
        }
        Removal::Unbound {
            service_name,
            remaining,
        } => {
            warn!(
                "Service '{service_name}' kept, still bound to {}",
                remaining.join(", ")
            );
            (service_name.as_str(), "unbound, kept".yellow())
        }
        Removal::NotBound {
            service_name,
            remaining,
        } => {
            warn!(
                "App '{app}' is not bound to '{service_name}', still used by {}",
                remaining.join(", ")
            );
            (service_name.as_str(), "not bound, kept".yellow())
        }
        Removal::NotRegistered { service_name } => {
            warn!("Service '{service_name}' is not registered, nothing to remove");
            (service_name.as_str(), "not registered".yellow())
        }
    };

    if cfg.quiet > 1 {
        return;
    }

    print::aligned_line("App", app);
    print::aligned_line("Service", service_name.color(colors::SECONDARY));
    print::aligned_line("Status", status);
    print::end_of_program(cfg.quiet);
}
