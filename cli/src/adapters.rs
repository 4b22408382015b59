//! # Adapters
//!
//! Concrete implementations of [`registrar_core::platform::PlatformClient`].
//!
//! * **[`cf`]**: drives the installed `cf` CLI and its `cf curl` API passthrough.

pub mod cf;
