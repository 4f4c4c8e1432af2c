//! HTTP seam between the retry loop and the VIES endpoint

use super::types::{AttemptFailure, FailureClass};
use crate::config::{ProxySettings, RequestConfig};
use crate::core::vat::{COUNTRY_PREFIX, VatNumber};
use crate::utils::error::{Result, ViesError};
use async_trait::async_trait;
use reqwest::{Client, Proxy, StatusCode};
use thiserror::Error;
use tracing::{debug, info};

/// Raw answer of one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A lookup that never produced a response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("proxy error: {0}")]
    Proxy(String),
    #[error("request error: {0}")]
    Request(String),
}

impl From<TransportError> for AttemptFailure {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Proxy(detail) => AttemptFailure::new(FailureClass::Proxy, detail),
            TransportError::Request(detail) => AttemptFailure::new(FailureClass::Transport, detail),
        }
    }
}

/// Issues one VAT lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VatTransport: Send + Sync {
    async fn lookup(&self, vat: &VatNumber) -> std::result::Result<TransportResponse, TransportError>;
}

/// `reqwest` implementation against the VIES REST API
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    api_base: String,
    via_proxy: bool,
}

impl ReqwestTransport {
    /// Build the HTTP client once for the whole run
    pub fn new(request: &RequestConfig, proxy: &ProxySettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(request.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        let via_proxy = match proxy.url() {
            Some(url) => {
                let proxy_config = Proxy::all(&url)
                    .map_err(|e| ViesError::config(format!("Invalid proxy configuration: {}", e)))?;
                builder = builder.proxy(proxy_config);
                info!("Using proxy {}", proxy.sanitized());
                true
            }
            None => {
                // Environment proxies are ignored unless configured explicitly
                builder = builder.no_proxy();
                debug!("No proxy configured");
                false
            }
        };

        Ok(Self {
            client: builder.build()?,
            api_base: request.api_base.trim_end_matches('/').to_string(),
            via_proxy,
        })
    }

    /// Lookup URL for a VAT number
    pub fn endpoint(&self, vat: &VatNumber) -> String {
        format!("{}/ms/{}/vat/{}", self.api_base, COUNTRY_PREFIX, vat)
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if self.via_proxy && err.is_connect() {
            TransportError::Proxy(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl VatTransport for ReqwestTransport {
    async fn lookup(&self, vat: &VatNumber) -> std::result::Result<TransportResponse, TransportError> {
        let url = self.endpoint(vat);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status == StatusCode::PROXY_AUTHENTICATION_REQUIRED {
            return Err(TransportError::Proxy(format!(
                "proxy authentication required ({})",
                status
            )));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        Ok(TransportResponse::new(status.as_u16(), body))
    }
}
