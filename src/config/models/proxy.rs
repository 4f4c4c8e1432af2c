//! Outbound proxy configuration

use super::*;
use crate::utils::sanitization::mask_url_password;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Proxy in front of every VIES request.
///
/// The proxy is only used when it is enabled and host, user and password are
/// all present and non-empty.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxySettings {
    /// Route requests through the proxy
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Proxy URL scheme
    #[serde(default = "default_proxy_scheme")]
    pub scheme: String,
    /// `<host>:<port>`
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            scheme: default_proxy_scheme(),
            host: None,
            user: None,
            password: None,
        }
    }
}

impl ProxySettings {
    /// Full proxy URL with credentials, if the proxy is in use
    pub fn url(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }

        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|s| !s.is_empty())
        }

        let host = non_empty(&self.host)?;
        let user = non_empty(&self.user)?;
        let password = non_empty(&self.password)?;

        Some(format!("{}://{}:{}@{}", self.scheme, user, password, host))
    }

    /// Whether requests will go through the proxy
    pub fn is_active(&self) -> bool {
        self.url().is_some()
    }

    /// Proxy URL safe to log
    pub fn sanitized(&self) -> String {
        match self.url() {
            Some(url) => mask_url_password(&url),
            None => "none (proxy disabled)".to_string(),
        }
    }
}

impl fmt::Debug for ProxySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxySettings")
            .field("enabled", &self.enabled)
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .finish()
    }
}
