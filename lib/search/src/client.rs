use crate::error::EndpointError;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::{debug, info};

/// The default location of the Strabon endpoint inside the deployment network.
pub const DEFAULT_ENDPOINT_URL: &str = "http://strabon:8080/strabon/Query";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const SPARQL_RESULTS_XML: &str = "application/sparql-results+xml";

/// Something that evaluates SPARQL queries and answers with a SPARQL Query
/// Results XML document.
#[async_trait]
pub trait SparqlEndpoint: Send + Sync {
    /// Evaluates `query` and returns the raw results document.
    async fn query(&self, query: &str) -> Result<String, EndpointError>;
}

/// Where and how to reach the SPARQL endpoint.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// The query URL of the endpoint.
    pub url: String,
    /// Upper bound for a whole request, including reading the body.
    pub timeout: Duration,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// A [`SparqlEndpoint`] reached over HTTP.
///
/// Queries are sent as `application/x-www-form-urlencoded` POST requests, the way
/// the Strabon web interface expects them.
#[derive(Debug, Clone)]
pub struct HttpSparqlEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpSparqlEndpoint {
    pub fn new(config: EndpointConfig) -> Result<Self, EndpointError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            url: config.url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SparqlEndpoint for HttpSparqlEndpoint {
    async fn query(&self, query: &str) -> Result<String, EndpointError> {
        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, SPARQL_RESULTS_XML)
            .form(&[("query", query), ("format", "SPARQL/XML")])
            .send()
            .await?;

        let status = response.status();
        info!(
            status = status.as_u16(),
            reason = status.canonical_reason().unwrap_or_default(),
            "SPARQL endpoint responded"
        );

        let body = response.text().await?;
        if !status.is_success() {
            return Err(EndpointError::Status { status, body });
        }
        debug!(%body, "SPARQL endpoint response body");
        Ok(body)
    }
}
