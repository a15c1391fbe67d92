//! Catalog Configuration
//!
//! Builder for wiring the catalog service from host-provided settings.
//! Validation is fail-fast: a missing or empty API key is rejected at build
//! time with an actionable message, not at first search.
//!
//! ## Usage
//!
//! ```ignore
//! use core_catalog::config::CatalogConfig;
//!
//! let service = CatalogConfig::builder()
//!     .api_key(std::env::var("YOUTUBE_API_KEY")?)
//!     .build()?
//!     .into_service()?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use catalog_traits::http::HttpClient;
use provider_youtube::YouTubeCatalog;

use crate::error::{Result, SetupError};
use crate::service::CatalogService;

/// Catalog core configuration.
///
/// Use [`CatalogConfig::builder`] to construct instances.
#[derive(Clone)]
pub struct CatalogConfig {
    /// YouTube Data API credential
    pub api_key: String,

    /// HTTP client override; the default reqwest client is used when absent
    pub http_client: Option<Arc<dyn HttpClient>>,

    /// Per-request timeout for the default HTTP client
    pub request_timeout: Duration,
}

impl CatalogConfig {
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }

    /// Wire the configured service, injecting the default HTTP client when
    /// none was provided.
    pub fn into_service(self) -> Result<CatalogService> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => Arc::new(bridge_reqwest::ReqwestHttpClient::with_timeout(
                self.request_timeout,
            )),
        };

        let catalog = YouTubeCatalog::new(http_client, self.api_key);
        Ok(CatalogService::new(Arc::new(catalog)))
    }
}

/// Builder for [`CatalogConfig`].
#[derive(Default)]
pub struct CatalogConfigBuilder {
    api_key: Option<String>,
    http_client: Option<Arc<dyn HttpClient>>,
    request_timeout: Option<Duration>,
}

impl CatalogConfigBuilder {
    /// Set the YouTube Data API key (required).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Inject a custom HTTP client instead of the default reqwest one.
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the per-request timeout for the default HTTP client.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<CatalogConfig> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SetupError::CapabilityMissing {
                capability: "api_key".to_string(),
                message: "No catalog API key provided. Supply one via \
                          CatalogConfigBuilder::api_key()."
                    .to_string(),
            })?;

        Ok(CatalogConfig {
            api_key,
            http_client: self.http_client,
            request_timeout: self
                .request_timeout
                .unwrap_or_else(|| Duration::from_secs(30)),
        })
    }
}
