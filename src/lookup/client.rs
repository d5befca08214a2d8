use async_trait::async_trait;
use reqwest::Client;

use crate::config::LookupConfig;
use crate::drug::SearchResult;
use crate::lookup::error::LookupError;
use crate::lookup::wire::DrugInfoResponse;
use crate::lookup::DrugLookup;

const DRUG_INFO_PATH: &str = "/drug-info";

/// HTTP client for the drug pricing service.
///
/// One request per lookup, no retries and no caching: identical queries
/// always reach the service.
pub struct HttpLookupClient {
    client: Client,
    base_url: String,
}

impl HttpLookupClient {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .build()
            .map_err(|source| LookupError::Transport { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the lookup endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, DRUG_INFO_PATH)
    }
}

#[async_trait]
impl DrugLookup for HttpLookupClient {
    async fn lookup(&self, query: &str) -> Result<SearchResult, LookupError> {
        tracing::debug!(query, endpoint = %self.endpoint(), "drug lookup started");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[("name", query)])
            .send()
            .await
            .map_err(|source| LookupError::Transport { source })?;

        // The service reports "not found" and bad input as non-2xx with an
        // `error` body, so the body is decoded regardless of status.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| LookupError::Transport { source })?;

        let decoded: DrugInfoResponse =
            serde_json::from_slice(&body).map_err(|source| LookupError::Decode { source })?;

        let result = decoded.into_result();
        match &result {
            Ok(found) => tracing::debug!(
                query,
                status = status.as_u16(),
                brand = found.brand.as_ref().map(|b| b.name.as_str()),
                generics = found.generics.len(),
                "drug lookup finished"
            ),
            Err(err) => tracing::debug!(
                query,
                status = status.as_u16(),
                error = %err,
                "drug lookup reported an error"
            ),
        }
        result
    }
}
