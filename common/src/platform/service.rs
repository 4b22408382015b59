//! # Service Registration Model
//!
//! A registration is never stored. It is derived on every call from a
//! protocol tag and the operator's config string:
//!
//! * name: `<protocol>-<config>` with slashes turned into hyphens, at most
//!   [`MAX_SERVICE_NAME_LEN`] characters.
//! * label: `<protocol>://<config>`, config untouched.

pub const STRUCTURED_FORMAT: &str = "structured-format";
pub const METRICS_ENDPOINT: &str = "metrics-endpoint";

pub const MAX_SERVICE_NAME_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRegistration {
    pub protocol: String,
    pub config: String,
}

impl ServiceRegistration {
    pub fn new(protocol: impl Into<String>, config: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            config: config.into(),
        }
    }

    pub fn log_format(format_name: &str) -> Self {
        Self::new(STRUCTURED_FORMAT, format_name)
    }

    pub fn metrics_endpoint(route_or_path: &str) -> Self {
        Self::new(METRICS_ENDPOINT, route_or_path)
    }

    /// Service name, e.g. `metrics-endpoint-v2-path` for `/v2/path/`.
    ///
    /// Truncation does not avoid collisions: configs that only differ past
    /// the limit map to the same name.
    pub fn service_name(&self) -> String {
        let sanitized: String = self.config.trim_matches('/').replace('/', "-");
        format!("{}-{}", self.protocol, sanitized)
            .chars()
            .take(MAX_SERVICE_NAME_LEN)
            .collect()
    }

    pub fn label(&self) -> String {
        format!("{}://{}", self.protocol, self.config)
    }
}

/// A user-provided service already present in the targeted space.
///
/// Bindings are not part of the listing; they are looked up per service
/// and only when removing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExistingService {
    pub name: String,
    pub guid: String,
}

impl ExistingService {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
