//! # In-Memory Platform
//!
//! A [`PlatformClient`] double that records every command it is asked to
//! run and answers queries from canned data.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use anyhow::anyhow;
use registrar_common::platform::{app::App, service::ExistingService};

use crate::platform::PlatformClient;

#[derive(Default)]
pub struct FakePlatform {
    pub services: Vec<ExistingService>,
    /// When set, `get_services` fails with this message.
    pub services_error: Option<String>,
    /// Bound app names, keyed by service name.
    pub bindings: HashMap<String, Vec<String>>,
    pub apps: Vec<App>,
    /// When set, `get_app` fails with this message.
    pub app_error: Option<String>,
    /// Command name (first argument) that fails when run.
    pub error_command: Option<String>,
    commands: RefCell<Vec<Vec<String>>>,
    service_lookups: Cell<usize>,
    app_lookups: Cell<usize>,
    binding_lookups: Cell<usize>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services(services: Vec<ExistingService>) -> Self {
        Self {
            services,
            ..Self::default()
        }
    }

    /// Adds `service_name` to the space (if absent) bound to `apps`.
    pub fn bind(&mut self, service_name: &str, apps: &[&str]) {
        if !self.services.iter().any(|svc| svc.name == service_name) {
            self.services.push(ExistingService {
                name: service_name.to_string(),
                guid: format!("{service_name}-guid"),
            });
        }
        self.bindings.insert(
            service_name.to_string(),
            apps.iter().map(|app| app.to_string()).collect(),
        );
    }

    /// Commands run so far, in order.
    pub fn commands(&self) -> Vec<Vec<String>> {
        self.commands.borrow().clone()
    }

    /// First argument of every command run so far.
    pub fn command_names(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|args| args.first().cloned())
            .collect()
    }

    pub fn service_lookups(&self) -> usize {
        self.service_lookups.get()
    }

    pub fn app_lookups(&self) -> usize {
        self.app_lookups.get()
    }

    pub fn binding_lookups(&self) -> usize {
        self.binding_lookups.get()
    }
}

impl PlatformClient for FakePlatform {
    fn get_services(&self) -> anyhow::Result<Vec<ExistingService>> {
        self.service_lookups.set(self.service_lookups.get() + 1);
        match &self.services_error {
            Some(msg) => Err(anyhow!("{msg}")),
            None => Ok(self.services.clone()),
        }
    }

    fn get_bound_apps(&self, service: &ExistingService) -> anyhow::Result<Vec<String>> {
        self.binding_lookups.set(self.binding_lookups.get() + 1);
        Ok(self.bindings.get(&service.name).cloned().unwrap_or_default())
    }

    fn get_app(&self, app_name: &str) -> anyhow::Result<App> {
        self.app_lookups.set(self.app_lookups.get() + 1);
        if let Some(msg) = &self.app_error {
            return Err(anyhow!("{msg}"));
        }
        self.apps
            .iter()
            .find(|app| app.name == app_name)
            .cloned()
            .ok_or_else(|| anyhow!("app '{app_name}' not found"))
    }

    fn cli_command(&self, args: &[&str]) -> anyhow::Result<Vec<String>> {
        self.commands
            .borrow_mut()
            .push(args.iter().map(|arg| arg.to_string()).collect());

        match (args.first(), &self.error_command) {
            (Some(name), Some(failing)) if *name == failing.as_str() => Err(anyhow!("{name} failed")),
            _ => Ok(vec!["OK".to_string()]),
        }
    }
}
