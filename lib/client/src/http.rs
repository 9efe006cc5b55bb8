use crate::{
    parse_json_results, ClientConfig, QueryMethod, SparqlClient, TransportError,
    SPARQL_QUERY_MEDIA_TYPE, SPARQL_RESULTS_JSON_MEDIA_TYPE,
};
use async_trait::async_trait;
use psm_model::ResultSet;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use tracing::debug;

/// A [SparqlClient] that talks to an endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct HttpSparqlClient {
    client: Client,
    endpoint: Url,
    method: QueryMethod,
}

impl HttpSparqlClient {
    /// Creates a client for the endpoint of `config`.
    pub fn try_new(config: &ClientConfig) -> Result<Self, TransportError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|source| TransportError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?;
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(TransportError::Client)?;
        Ok(Self {
            client,
            endpoint,
            method: config.method,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_error(&self, source: reqwest::Error) -> TransportError {
        TransportError::Request {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait]
impl SparqlClient for HttpSparqlClient {
    async fn run_query(&self, query: &str) -> Result<ResultSet, TransportError> {
        debug!(endpoint = %self.endpoint, method = ?self.method, "Sending SPARQL query");

        let request = match self.method {
            QueryMethod::Post => self
                .client
                .post(self.endpoint.clone())
                .header(CONTENT_TYPE, SPARQL_QUERY_MEDIA_TYPE)
                .body(query.to_owned()),
            QueryMethod::Get => self
                .client
                .get(self.endpoint.clone())
                .query(&[("query", query)]),
        };
        let response = request
            .header(ACCEPT, SPARQL_RESULTS_JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(|error| self.request_error(error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                endpoint: self.endpoint.clone(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| self.request_error(error))?;
        let results = parse_json_results(&body)?;
        debug!(rows = results.len(), "Received SPARQL results");
        Ok(results)
    }
}
