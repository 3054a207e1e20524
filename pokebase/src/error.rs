use crate::pokemon;

use std::io;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    RequestFailed(Arc<reqwest::Error>),
    #[error("pokémon not found: {0}")]
    PokemonNotFound(pokemon::Id),
    #[error("invalid resource reference: {0}")]
    InvalidReference(String),
    #[error("unexpected data: {0}")]
    UnexpectedData(String),
    #[error("storage failed: {0}")]
    StorageFailed(Arc<io::Error>),
    #[error("stored data is invalid: {0}")]
    InvalidData(Arc<serde_json::Error>),
    #[error("failed to fetch the pokédex index: {0}")]
    IndexUnavailable(Box<Error>),
    #[error("evolution data unavailable: {0}")]
    EvolutionUnavailable(Box<Error>),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(Arc::new(error))
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::StorageFailed(Arc::new(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidData(Arc::new(error))
    }
}
