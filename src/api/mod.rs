//! Access to the remote person API
//!
//! [`PersonApi`] is the seam between the views and the network. The
//! production implementation is [`HttpPersonApi`]; tests substitute an
//! in-memory implementation.

use std::time::Instant;

use futures::future::BoxFuture;
use log::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::models::{NewPerson, PersonRecord};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Operations offered by the person API
pub trait PersonApi: Send + Sync {
    /// Fetch every registered person (`GET /person/`)
    fn list_persons(&self) -> BoxFuture<'_, Result<Vec<PersonRecord>>>;

    /// Register a new person (`POST /person`)
    fn create_person<'a>(&'a self, person: &'a NewPerson) -> BoxFuture<'a, Result<()>>;
}

/// HTTP client for the person API
#[derive(Debug, Clone)]
pub struct HttpPersonApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPersonApi {
    /// Create a client for the configured endpoint
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        if config.api_base_url.is_empty() {
            return Err(RegistryError::Config("API base URL is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-success response into an API error carrying the body text
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    warn!("API responded with {status}: {message}");
    Err(RegistryError::Api {
        status: status.as_u16(),
        message,
    })
}

impl PersonApi for HttpPersonApi {
    fn list_persons(&self) -> BoxFuture<'_, Result<Vec<PersonRecord>>> {
        Box::pin(async move {
            let url = self.url("/person/");
            let start = Instant::now();
            log_operation_start("Fetching person records from", &url);

            let response = check_status(self.client.get(&url).send().await?).await?;
            let body = response.bytes().await?;
            let records: Vec<PersonRecord> = serde_json::from_slice(&body)?;

            log_operation_complete("fetched", &url, records.len(), Some(start.elapsed()));
            Ok(records)
        })
    }

    fn create_person<'a>(&'a self, person: &'a NewPerson) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let url = self.url("/person");
            debug!("Posting registration for {} to {url}", person.name);

            check_status(self.client.post(&url).json(person).send().await?).await?;

            info!("Registered {}", person.name);
            Ok(())
        })
    }
}
