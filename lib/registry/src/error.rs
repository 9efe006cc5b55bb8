use psm_client::TransportError;
use psm_reducer::{CollationError, NoDataError};

/// A view of the registry could not be built.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    NoData(#[from] NoDataError),
    /// The identifier cannot be turned into a registry IRI.
    #[error("'{0}' is not a valid registry identifier")]
    InvalidIdentifier(String),
    /// The label language cannot be used as a language tag.
    #[error("'{0}' is not a valid language tag")]
    InvalidLanguage(String),
    #[error(transparent)]
    Collation(#[from] CollationError),
}
