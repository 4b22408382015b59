//! # Registrar Core
//!
//! The use cases of the plugin, written against the [`platform::PlatformClient`]
//! port so they never touch the `cf` binary directly.
//!
//! * **[`platform`]**: the port and the command names it is driven with.
//! * **[`register`]**: create-if-absent then bind, and the reverse.
//! * **[`routes`]**: checks a requested metrics route against an app's routes.

pub mod platform;
pub mod register;
pub mod routes;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
