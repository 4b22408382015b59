//! # Platform Models
//!
//! Plain data as the platform reports it, plus the rules for deriving the
//! service that advertises an app's log format or metrics endpoint.
//!
//! * [`service::ServiceRegistration`]: name and label derived from a protocol and config.
//! * [`service::ExistingService`]: a user-provided service already in the space.
//! * [`route::Route`]: a route bound to an app.
//! * [`route::RequestedRoute`]: an operator-supplied `host.domain/path`.
//! * [`app::App`]: an app and its routes.

pub mod app;
pub mod route;
pub mod service;
