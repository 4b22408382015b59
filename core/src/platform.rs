//! # Platform Client Port
//!
//! Everything the use cases need from the platform. The binary implements it
//! by driving the `cf` CLI; tests use [`crate::testing::FakePlatform`].

use registrar_common::platform::{app::App, service::ExistingService};

pub const CREATE_SERVICE: &str = "create-user-provided-service";
pub const BIND_SERVICE: &str = "bind-service";
pub const UNBIND_SERVICE: &str = "unbind-service";
pub const DELETE_SERVICE: &str = "delete-service";

pub trait PlatformClient {
    /// User-provided services in the targeted space.
    fn get_services(&self) -> anyhow::Result<Vec<ExistingService>>;
    /// Names of the apps bound to `service`.
    fn get_bound_apps(&self, service: &ExistingService) -> anyhow::Result<Vec<String>>;
    /// The named app with its bound routes.
    fn get_app(&self, app_name: &str) -> anyhow::Result<App>;
    /// Runs a platform CLI command, returning its output lines.
    fn cli_command(&self, args: &[&str]) -> anyhow::Result<Vec<String>>;
}
