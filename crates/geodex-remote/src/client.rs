//! HTTP client for the REST Countries bulk endpoint.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::FetchError;
use crate::record::RemoteCountry;

/// Default bulk endpoint, pre-filtered to the fields the mapper consumes.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=cca3,name,region,subregion,demonyms,population,independent,flags,currencies";

/// A source of remote country snapshots.
///
/// The reconciler depends on this trait rather than on a concrete client,
/// so tests can substitute a canned snapshot.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetches the full remote snapshot as an ordered sequence of records.
    ///
    /// There is no pagination: the dataset is one bulk response.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the source is unreachable, times out,
    /// answers with a non-success status, or returns an undecodable body.
    async fn fetch_all(&self) -> Result<Vec<RemoteCountry>, FetchError>;
}

/// `reqwest`-based client for the REST Countries API.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RestCountriesClient {
    /// Creates a client for the given endpoint with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Returns the configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_all(&self) -> Result<Vec<RemoteCountry>, FetchError> {
        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16()));
        }

        let body = response.text().await?;
        let records: Vec<RemoteCountry> =
            serde_json::from_str(&body).map_err(|e| FetchError::decode(e.to_string()))?;

        debug!(count = records.len(), "Fetched remote country snapshot");

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> RestCountriesClient {
        RestCountriesClient::new(
            format!("{}/v3.1/all", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn fetches_and_decodes_a_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3.1/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"cca3": "USA", "name": {"common": "United States"}},
                {"cca3": "FRA", "name": {"common": "France"}}
            ])))
            .mount(&server)
            .await;

        let records = client_for(&server).await.fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier(), Some("USA"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        // Nothing listens on this port.
        let client =
            RestCountriesClient::new("http://127.0.0.1:1/v3.1/all", Duration::from_millis(200))
                .unwrap();
        let err = client.fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}
