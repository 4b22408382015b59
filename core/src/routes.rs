use tracing::debug;

use registrar_common::error::{RegistrarError, Result};
use registrar_common::platform::route::{RequestedRoute, Route};

use crate::platform::PlatformClient;

/// Confirms `requested` (`host.domain[:port][/path]`) is served by one of the
/// app's routes and returns that route.
///
/// The input is parsed before anything is asked of the platform, so a
/// malformed route never costs an app lookup.
pub fn ensure_route_bound(
    client: &dyn PlatformClient,
    app_name: &str,
    requested: &str,
) -> Result<Route> {
    let parsed: RequestedRoute = requested.parse().map_err(RegistrarError::RouteParse)?;

    debug!("Looking up routes of app '{app_name}'");
    let app = client.get_app(app_name).map_err(RegistrarError::Query)?;

    match app.route_for(&parsed) {
        Some(route) => {
            debug!("Route '{requested}' served by '{route}'");
            Ok(route.clone())
        }
        None => Err(RegistrarError::RouteNotBound {
            route: requested.to_string(),
            app: app_name.to_string(),
        }),
    }
}
