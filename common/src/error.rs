//! # Registrar Errors
//!
//! Every failure a use case can report. Platform failures carry the
//! platform's own message unchanged; the CLI prints them as-is.

use thiserror::Error;

use crate::platform::route::RouteParseError;

#[derive(Error, Debug)]
pub enum RegistrarError {
    /// Listing services or looking up an app failed.
    #[error(transparent)]
    Query(anyhow::Error),

    #[error("unable to parse requested route: {0}")]
    RouteParse(RouteParseError),

    #[error("route '{route}' is not bound to app '{app}'")]
    RouteNotBound { route: String, app: String },

    /// A `cf` command (create, bind, unbind, delete) failed.
    #[error(transparent)]
    Command(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
