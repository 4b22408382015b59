//! # Registrar Common
//!
//! Models and error types shared by every crate in the workspace.
//!
//! * **[`platform`]**: services, routes and apps as the platform reports them.
//! * **[`error`]**: the error kinds surfaced to the operator.
//! * **[`config`]**: runtime settings assembled by the binary.

pub mod config;
pub mod error;
pub mod platform;
