use crate::{Error, Favorites, Pokemon, Storage};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

const APPLICATION: &str = "pokedex";
const COLLECTION: &str = "pokemon_cache.json";
const FAVORITES: &str = "favorites.json";

/// Stores JSON documents in a data directory.
#[derive(Debug, Clone)]
pub struct File {
    directory: PathBuf,
}

impl File {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The platform data directory of the application, if there is one.
    pub fn default_directory() -> Option<PathBuf> {
        dirs::data_dir().map(|data| data.join(APPLICATION))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, Error> {
        let path = self.directory.join(name);

        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&contents)?))
    }

    async fn write<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<(), Error> {
        let json = serde_json::to_vec(value)?;

        fs::create_dir_all(&self.directory).await?;
        fs::write(self.directory.join(name), json).await?;

        Ok(())
    }
}

impl Storage for File {
    async fn load_collection(&self) -> Result<Option<Vec<Pokemon>>, Error> {
        self.read(COLLECTION).await
    }

    async fn store_collection(&self, pokemon: &[Pokemon]) -> Result<(), Error> {
        log::info!("Caching {} pokémon", pokemon.len());

        self.write(COLLECTION, pokemon).await
    }

    async fn clear_collection(&self) -> Result<(), Error> {
        match fs::remove_file(self.directory.join(COLLECTION)).await {
            Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error.into()),
            _ => Ok(()),
        }
    }

    async fn load_favorites(&self) -> Result<Favorites, Error> {
        Ok(self.read(FAVORITES).await?.unwrap_or_default())
    }

    async fn store_favorites(&self, favorites: &Favorites) -> Result<(), Error> {
        self.write(FAVORITES, favorites).await
    }
}
