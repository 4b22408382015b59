//! # cf CLI Adapter
//!
//! Implements [`PlatformClient`] by spawning the operator's `cf` binary.
//! Queries go through `cf curl` against the v3 API, scoped to the space
//! the CLI currently targets. Commands are passed through unchanged.

pub mod models;

use std::path::PathBuf;
use std::process::{Command, Output};

use anyhow::{Context, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use registrar_common::config::Config;
use registrar_common::platform::{app::App, service::ExistingService};
use registrar_core::platform::PlatformClient;

use models::{BindingResource, CfConfigFile, NamedResource, Page, RouteResource};

/// Everything outside the URL unreserved set.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Largest page the API serves; further pages are not requested.
const PER_PAGE: u32 = 5000;

pub struct CfCli {
    binary: PathBuf,
    config_path: Option<PathBuf>,
}

impl CfCli {
    pub fn new(cfg: &Config) -> Self {
        Self {
            binary: cfg.cf_binary.clone(),
            config_path: cfg.cf_config_path(),
        }
    }

    fn spawn(&self, args: &[&str]) -> anyhow::Result<Output> {
        trace!("{} {}", self.binary.display(), args.join(" "));
        Command::new(&self.binary)
            .args(args)
            .output()
            .with_context(|| format!("failed to run '{}'", self.binary.display()))
    }

    /// Runs `cf`, failing with its own error text on a non-zero exit.
    fn run(&self, args: &[&str]) -> anyhow::Result<Vec<u8>> {
        let output = self.spawn(args)?;
        if output.status.success() {
            return Ok(output.stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let detail = if !stderr.is_empty() {
            stderr
        } else if !stdout.is_empty() {
            stdout
        } else {
            format!(
                "cf {} exited with {}",
                args.first().copied().unwrap_or_default(),
                output.status
            )
        };
        bail!("{detail}")
    }

    fn curl<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        debug!("cf curl {path}");
        let body = self.run(&["curl", path])?;
        models::decode(path, &body)
    }

    fn target_space_guid(&self) -> anyhow::Result<String> {
        let guid = match &self.config_path {
            Some(path) if path.exists() => {
                let raw = std::fs::read(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let cfg: CfConfigFile = serde_json::from_slice(&raw)
                    .with_context(|| format!("failed to parse {}", path.display()))?;
                cfg.space_fields.guid
            }
            _ => String::new(),
        };

        if guid.is_empty() {
            bail!("no space targeted, use 'cf target -s' to target a space");
        }
        Ok(guid)
    }
}

impl PlatformClient for CfCli {
    fn get_services(&self) -> anyhow::Result<Vec<ExistingService>> {
        let space = self.target_space_guid()?;
        let instances: Page<NamedResource> = self.curl(&format!(
            "/v3/service_instances?type=user-provided&space_guids={space}&per_page={PER_PAGE}"
        ))?;
        Ok(models::into_services(instances))
    }

    fn get_bound_apps(&self, service: &ExistingService) -> anyhow::Result<Vec<String>> {
        let bindings: Page<BindingResource> = self.curl(&bindings_query(&service.guid))?;
        Ok(models::bound_app_names(bindings))
    }

    fn get_app(&self, app_name: &str) -> anyhow::Result<App> {
        let space = self.target_space_guid()?;
        let apps: Page<NamedResource> = self.curl(&format!(
            "/v3/apps?names={}&space_guids={space}",
            utf8_percent_encode(app_name, QUERY_VALUE)
        ))?;

        let Some(app) = apps.resources.into_iter().next() else {
            bail!("app '{app_name}' not found");
        };

        let routes: Page<RouteResource> = self.curl(&format!(
            "/v3/routes?app_guids={}&include=domain&per_page={PER_PAGE}",
            app.guid
        ))?;

        Ok(App {
            name: app.name,
            guid: app.guid,
            routes: models::into_routes(routes),
        })
    }

    fn cli_command(&self, args: &[&str]) -> anyhow::Result<Vec<String>> {
        let stdout = self.run(args)?;
        Ok(String::from_utf8_lossy(&stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

/// App bindings of a single service instance, with the apps included.
fn bindings_query(service_guid: &str) -> String {
    format!(
        "/v3/service_credential_bindings?type=app&service_instance_guids={}&include=app&per_page={PER_PAGE}",
        utf8_percent_encode(service_guid, QUERY_VALUE)
    )
}
