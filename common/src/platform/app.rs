use crate::platform::route::{RequestedRoute, Route};

/// An application in the targeted space together with its bound routes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct App {
    pub name: String,
    pub guid: String,
    pub routes: Vec<Route>,
}

impl App {
    pub fn new(name: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            name: name.into(),
            guid: String::new(),
            routes,
        }
    }

    /// First bound route serving the requested hostname.
    pub fn route_for(&self, requested: &RequestedRoute) -> Option<&Route> {
        self.routes.iter().find(|route| route.serves(requested))
    }
}
