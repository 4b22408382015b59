//! # Registration Service
//!
//! Advertises an app's log format or metrics endpoint by binding it to a
//! user-provided service whose label carries the convention, and removes
//! that advertisement again.
//!
//! Every step is a single platform call, run in order. The first failure
//! aborts the sequence and is returned as-is; nothing is retried.

use tracing::{debug, info};

use registrar_common::error::{RegistrarError, Result};
use registrar_common::platform::service::{ExistingService, ServiceRegistration};

use crate::platform::{
    BIND_SERVICE, CREATE_SERVICE, DELETE_SERVICE, PlatformClient, UNBIND_SERVICE,
};
use crate::routes;

/// What a successful registration did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registered {
    pub service_name: String,
    pub label: String,
    /// `false` when the service already existed and was only bound.
    pub created: bool,
}

/// What a successful unregistration did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Removal {
    /// Unbound from the app and deleted.
    Removed { service_name: String },
    /// Unbound from the app; other apps still use it so it was kept.
    Unbound {
        service_name: String,
        remaining: Vec<String>,
    },
    /// The app was not bound; other apps still use the service so nothing
    /// was run.
    NotBound {
        service_name: String,
        remaining: Vec<String>,
    },
    /// No such service in the space; nothing was run.
    NotRegistered { service_name: String },
}

pub struct RegistrationService<'a> {
    client: &'a dyn PlatformClient,
}

impl<'a> RegistrationService<'a> {
    pub fn new(client: &'a dyn PlatformClient) -> Self {
        Self { client }
    }

    pub fn register_log_format(&self, app_name: &str, format_name: &str) -> Result<Registered> {
        self.ensure_service_and_bind(app_name, &ServiceRegistration::log_format(format_name))
    }

    /// Registers `route_or_path` as the app's metrics endpoint.
    ///
    /// A bare path (`/metrics`) is taken as-is. Anything else must be a
    /// `host.domain[:port][/path]` served by one of the app's routes.
    /// Surrounding whitespace is dropped before either.
    pub fn register_metrics_endpoint(
        &self,
        app_name: &str,
        route_or_path: &str,
    ) -> Result<Registered> {
        let route_or_path = route_or_path.trim();
        if !route_or_path.starts_with('/') {
            routes::ensure_route_bound(self.client, app_name, route_or_path)?;
        }
        self.ensure_service_and_bind(app_name, &ServiceRegistration::metrics_endpoint(route_or_path))
    }

    /// Creates the service unless one with the same name exists, then binds
    /// it to the app.
    pub fn ensure_service_and_bind(
        &self,
        app_name: &str,
        registration: &ServiceRegistration,
    ) -> Result<Registered> {
        let service_name = registration.service_name();
        let label = registration.label();

        let created = match self.find_service(&service_name)? {
            Some(_) => {
                debug!("Service '{service_name}' already exists");
                false
            }
            None => {
                info!("Creating service '{service_name}' with label '{label}'");
                self.run(&[CREATE_SERVICE, &service_name, "-l", &label])?;
                true
            }
        };

        info!("Binding service '{service_name}' to app '{app_name}'");
        self.run(&[BIND_SERVICE, app_name, &service_name])?;

        Ok(Registered {
            service_name,
            label,
            created,
        })
    }

    pub fn unregister_log_format(&self, app_name: &str, format_name: &str) -> Result<Removal> {
        self.unbind_and_remove(app_name, &ServiceRegistration::log_format(format_name))
    }

    /// Removal never checks routes: the route may already be gone.
    pub fn unregister_metrics_endpoint(
        &self,
        app_name: &str,
        route_or_path: &str,
    ) -> Result<Removal> {
        let route_or_path = route_or_path.trim();
        self.unbind_and_remove(app_name, &ServiceRegistration::metrics_endpoint(route_or_path))
    }

    /// Unbinds the service from the app and deletes it once no other app
    /// is bound to it.
    pub fn unbind_and_remove(
        &self,
        app_name: &str,
        registration: &ServiceRegistration,
    ) -> Result<Removal> {
        let service_name = registration.service_name();

        let Some(service) = self.find_service(&service_name)? else {
            debug!("Service '{service_name}' does not exist");
            return Ok(Removal::NotRegistered { service_name });
        };

        let bound_apps = self
            .client
            .get_bound_apps(&service)
            .map_err(RegistrarError::Query)?;

        let was_bound = bound_apps.iter().any(|app| app == app_name);
        if was_bound {
            info!("Unbinding service '{service_name}' from app '{app_name}'");
            self.run(&[UNBIND_SERVICE, app_name, &service_name])?;
        }

        let remaining: Vec<String> = bound_apps
            .into_iter()
            .filter(|app| app != app_name)
            .collect();
        if !remaining.is_empty() {
            return Ok(if was_bound {
                Removal::Unbound {
                    service_name,
                    remaining,
                }
            } else {
                Removal::NotBound {
                    service_name,
                    remaining,
                }
            });
        }

        info!("Deleting service '{service_name}'");
        self.run(&[DELETE_SERVICE, &service_name, "-f"])?;
        Ok(Removal::Removed { service_name })
    }

    fn find_service(&self, service_name: &str) -> Result<Option<ExistingService>> {
        let services = self.client.get_services().map_err(RegistrarError::Query)?;
        Ok(services.into_iter().find(|svc| svc.name == service_name))
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        debug!("Running '{}'", args.join(" "));
        self.client
            .cli_command(args)
            .map(|_| ())
            .map_err(RegistrarError::Command)
    }
}
