use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use super::Catalog;

pub const CISA_KEV_URL: &str =
    "https://www.cisa.gov/sites/default/files/feeds/known_exploited_vulnerabilities.json";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GET request failed: {status} -- {reason}")]
    Status { status: u16, reason: String },

    /// The request failed before the server produced any response.
    #[error("GET request failed without a response: {0}")]
    NoResponse(#[source] reqwest::Error),

    #[error("Failed to decode catalog: {0}")]
    Decode(#[source] reqwest::Error),
}

pub struct CatalogFetcher {
    client: Client,
    url: String,
    verify_tls: bool,
}

impl CatalogFetcher {
    pub fn new(
        url: impl Into<String>,
        verify_tls: bool,
        timeout: Option<Duration>,
    ) -> crate::Result<Self> {
        let mut builder = Client::builder().danger_accept_invalid_certs(!verify_tls);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
            verify_tls,
        })
    }

    pub fn fetch(&self) -> Result<Catalog, FetchError> {
        info!(
            "Pulling CISA catalog. SSL verification enabled = {}",
            self.verify_tls
        );
        if !self.verify_tls {
            warn!("TLS certificate verification is disabled for {}", self.url);
        }

        // Failures are reported once, by the caller that aborts on them
        let catalog = self.fetch_inner()?;
        info!(
            "Successfully downloaded CISA exploitable vulnerability catalog ({} entries)",
            catalog.vulnerabilities.len()
        );
        Ok(catalog)
    }

    fn fetch_inner(&self) -> Result<Catalog, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(FetchError::NoResponse)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response.json::<Catalog>().map_err(FetchError::Decode)
    }
}
