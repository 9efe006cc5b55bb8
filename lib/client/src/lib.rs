//! Sends SPARQL queries to a remote endpoint and returns their solutions.
//!
//! [SparqlClient] is the boundary between the view builders and the network. The builders only
//! ever see a [ResultSet](psm_model::ResultSet); [HttpSparqlClient] implements the SPARQL 1.1
//! protocol over HTTP, while tests can substitute an in-memory implementation.

mod config;
mod error;
mod http;
mod results;

pub use config::{
    ClientConfig, QueryMethod, DEFAULT_ENDPOINT, SPARQL_QUERY_MEDIA_TYPE,
    SPARQL_RESULTS_JSON_MEDIA_TYPE,
};
pub use error::TransportError;
pub use http::HttpSparqlClient;
pub use results::parse_json_results;

use async_trait::async_trait;
use psm_model::ResultSet;

/// Evaluates `SELECT` queries.
#[async_trait]
pub trait SparqlClient: Send + Sync {
    /// Evaluates `query` and returns all of its solutions.
    async fn run_query(&self, query: &str) -> Result<ResultSet, TransportError>;
}
