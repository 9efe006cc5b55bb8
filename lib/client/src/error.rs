use reqwest::{StatusCode, Url};
use sparesults::QueryResultsParseError;

/// The query could not be evaluated by the remote endpoint.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The configured endpoint is not a valid URL.
    #[error("Invalid SPARQL endpoint '{endpoint}'")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    /// The HTTP client could not be created.
    #[error("Could not create the HTTP client")]
    Client(#[source] reqwest::Error),
    /// The request could not be sent or the response could not be read.
    #[error("Could not send request to '{endpoint}'")]
    Request {
        endpoint: Url,
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint answered with a non-success status.
    #[error("{status}")]
    Status { endpoint: Url, status: StatusCode },
    /// The response is not a valid SPARQL JSON result.
    #[error("Could not parse the query results")]
    Parse(#[from] QueryResultsParseError),
    /// The endpoint answered an `ASK` result where solutions were expected.
    #[error("Expected query solutions but the endpoint returned a boolean")]
    UnexpectedBoolean,
}
