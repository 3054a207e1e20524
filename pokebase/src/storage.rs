mod file;
mod memory;

pub use file::File;
pub use memory::Memory;

use crate::{Error, Favorites, Pokemon};

use std::path::PathBuf;

/// Persists the listing cache and the favorite set across sessions.
pub trait Storage {
    /// Returns the cached collection, if any was stored.
    fn load_collection(&self) -> impl Future<Output = Result<Option<Vec<Pokemon>>, Error>> + Send;

    fn store_collection(&self, pokemon: &[Pokemon]) -> impl Future<Output = Result<(), Error>> + Send;

    fn clear_collection(&self) -> impl Future<Output = Result<(), Error>> + Send;

    /// Returns the stored favorite set, or an empty one if nothing was stored.
    fn load_favorites(&self) -> impl Future<Output = Result<Favorites, Error>> + Send;

    fn store_favorites(&self, favorites: &Favorites) -> impl Future<Output = Result<(), Error>> + Send;
}

/// The storage backends available at runtime.
#[derive(Debug, Clone)]
pub enum Backend {
    File(File),
    Memory(Memory),
}

impl Backend {
    /// Picks a file backend when a data directory is available, and falls back
    /// to memory otherwise.
    pub fn detect(directory: Option<PathBuf>) -> Self {
        match directory.or_else(File::default_directory) {
            Some(directory) => {
                log::info!("Storing data in {}", directory.display());

                Self::File(File::new(directory))
            }
            None => {
                log::warn!("No data directory available; nothing will be persisted");

                Self::Memory(Memory::new())
            }
        }
    }
}

impl Storage for Backend {
    async fn load_collection(&self) -> Result<Option<Vec<Pokemon>>, Error> {
        match self {
            Self::File(file) => file.load_collection().await,
            Self::Memory(memory) => memory.load_collection().await,
        }
    }

    async fn store_collection(&self, pokemon: &[Pokemon]) -> Result<(), Error> {
        match self {
            Self::File(file) => file.store_collection(pokemon).await,
            Self::Memory(memory) => memory.store_collection(pokemon).await,
        }
    }

    async fn clear_collection(&self) -> Result<(), Error> {
        match self {
            Self::File(file) => file.clear_collection().await,
            Self::Memory(memory) => memory.clear_collection().await,
        }
    }

    async fn load_favorites(&self) -> Result<Favorites, Error> {
        match self {
            Self::File(file) => file.load_favorites().await,
            Self::Memory(memory) => memory.load_favorites().await,
        }
    }

    async fn store_favorites(&self, favorites: &Favorites) -> Result<(), Error> {
        match self {
            Self::File(file) => file.store_favorites(favorites).await,
            Self::Memory(memory) => memory.store_favorites(favorites).await,
        }
    }
}
