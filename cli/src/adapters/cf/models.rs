//! # Cloud Controller Payloads
//!
//! The slices of the v3 API responses (and the cf CLI config file) the
//! adapter reads, and their conversion into platform models.

use std::collections::HashMap;

use anyhow::{Context, bail};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use registrar_common::platform::{route::Route, service::ExistingService};

/// `~/.cf/config.json`; only the targeted space is of interest.
#[derive(Deserialize, Default)]
pub struct CfConfigFile {
    #[serde(rename = "SpaceFields", default)]
    pub space_fields: SpaceFields,
}

#[derive(Deserialize, Default)]
pub struct SpaceFields {
    #[serde(rename = "GUID", default)]
    pub guid: String,
}

#[derive(Deserialize, Debug)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,
    #[serde(default)]
    pub included: Included,
}

#[derive(Deserialize, Default, Debug)]
pub struct Included {
    #[serde(default)]
    pub apps: Vec<NamedResource>,
    #[serde(default)]
    pub domains: Vec<NamedResource>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct NamedResource {
    pub guid: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct RouteResource {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub path: String,
    pub relationships: RouteRelationships,
}

#[derive(Deserialize)]
pub struct RouteRelationships {
    pub domain: ToOne,
}

#[derive(Deserialize)]
pub struct BindingResource {
    pub relationships: BindingRelationships,
}

#[derive(Deserialize)]
pub struct BindingRelationships {
    pub app: ToOne,
}

#[derive(Deserialize)]
pub struct ToOne {
    pub data: Option<GuidRef>,
}

#[derive(Deserialize)]
pub struct GuidRef {
    pub guid: String,
}

impl ToOne {
    fn guid(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.guid.as_str())
    }
}

#[derive(Deserialize)]
struct ApiErrors {
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    detail: String,
    #[serde(default)]
    title: String,
}

/// Decodes a `cf curl` body, turning an API error document into an error
/// carrying the API's own detail text.
pub fn decode<T: DeserializeOwned>(path: &str, body: &[u8]) -> anyhow::Result<T> {
    if let Ok(api) = serde_json::from_slice::<ApiErrors>(body) {
        if !api.errors.is_empty() {
            let details: Vec<&str> = api
                .errors
                .iter()
                .map(|err| if err.detail.is_empty() { err.title.as_str() } else { err.detail.as_str() })
                .collect();
            bail!("{}", details.join("; "));
        }
    }
    serde_json::from_slice(body).with_context(|| format!("unexpected response from '{path}'"))
}

pub fn into_services(instances: Page<NamedResource>) -> Vec<ExistingService> {
    instances
        .resources
        .into_iter()
        .map(|instance| ExistingService {
            name: instance.name,
            guid: instance.guid,
        })
        .collect()
}

/// Names of the apps behind a page of app bindings.
pub fn bound_app_names(bindings: Page<BindingResource>) -> Vec<String> {
    let app_names: HashMap<&str, &str> = bindings
        .included
        .apps
        .iter()
        .map(|app| (app.guid.as_str(), app.name.as_str()))
        .collect();

    bindings
        .resources
        .iter()
        .filter_map(|binding| binding.relationships.app.guid())
        .filter_map(|guid| app_names.get(guid).map(|name| name.to_string()))
        .collect()
}

pub fn into_routes(page: Page<RouteResource>) -> Vec<Route> {
    let domains: HashMap<&str, &str> = page
        .included
        .domains
        .iter()
        .map(|domain| (domain.guid.as_str(), domain.name.as_str()))
        .collect();

    page.resources
        .iter()
        .filter_map(|route| {
            let domain = route
                .relationships
                .domain
                .guid()
                .and_then(|guid| domains.get(guid))?;
            Some(Route::new(route.host.as_str(), *domain, route.path.as_str()))
        })
        .collect()
}
