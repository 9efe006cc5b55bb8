/// The public LINDAS endpoint of the Swiss federal administration.
pub const DEFAULT_ENDPOINT: &str = "https://lindas.admin.ch/query";
pub const SPARQL_QUERY_MEDIA_TYPE: &str = "application/sparql-query";
pub const SPARQL_RESULTS_JSON_MEDIA_TYPE: &str = "application/sparql-results+json";

/// How the query is transmitted, see the SPARQL 1.1 protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QueryMethod {
    /// `POST` with the query as the request body.
    #[default]
    Post,
    /// `GET` with the query in the `query` URL parameter.
    Get,
}

/// Holds the configuration of an [HttpSparqlClient](crate::HttpSparqlClient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// The URL of the SPARQL endpoint.
    pub endpoint: String,
    /// How queries are sent to the endpoint.
    pub method: QueryMethod,
    /// The `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            method: QueryMethod::default(),
            user_agent: concat!("psm/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
