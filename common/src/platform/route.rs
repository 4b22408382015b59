//! # Route Models
//!
//! [`Route`] is what the platform reports as bound to an app.
//! [`RequestedRoute`] is what the operator types on the command line, e.g.
//! `app.example.com/metrics` or `example.com:8080/metrics`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteParseError {
    #[error("route is empty")]
    Empty,
    #[error("invalid hostname '{0}'")]
    InvalidHost(String),
    #[error("invalid port '{0}'")]
    InvalidPort(String),
}

/// A route bound to an application. `host` is empty for bare-domain routes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    pub host: String,
    pub domain: String,
    pub path: String,
}

impl Route {
    pub fn new(host: impl Into<String>, domain: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            domain: domain.into(),
            path: path.into(),
        }
    }

    /// `host.domain`, or only the domain when the route has no host.
    pub fn hostname(&self) -> String {
        if self.host.is_empty() {
            self.domain.clone()
        } else {
            format!("{}.{}", self.host, self.domain)
        }
    }

    pub fn serves(&self, requested: &RequestedRoute) -> bool {
        self.hostname().eq_ignore_ascii_case(&requested.hostname)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.hostname(), self.path)
    }
}

/// Parsed `host.domain[:port][/path]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestedRoute {
    pub hostname: String,
    pub port: Option<u16>,
    /// Always empty or starting with `/`.
    pub path: String,
}

impl FromStr for RequestedRoute {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RouteParseError::Empty);
        }

        let (authority, path) = match s.find('/') {
            Some(idx) => s.split_at(idx),
            None => (s, ""),
        };

        let (hostname, port) = match authority.rsplit_once(':') {
            Some((hostname, port)) => {
                let port: u16 = port
                    .parse()
                    .map_err(|_| RouteParseError::InvalidPort(port.to_string()))?;
                (hostname, Some(port))
            }
            None => (authority, None),
        };

        if !is_valid_hostname(hostname) {
            return Err(RouteParseError::InvalidHost(hostname.to_string()));
        }

        Ok(Self {
            hostname: hostname.to_ascii_lowercase(),
            port,
            path: path.to_string(),
        })
    }
}

fn is_valid_hostname(hostname: &str) -> bool {
    !hostname.is_empty()
        && hostname.split('.').all(|label| {
            !label.is_empty()
                && (label == "*"
                    || label
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
