use crate::{Error, Favorites, Pokemon, Storage};

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

const COLLECTION: &str = "pokemon-cache";
const FAVORITES: &str = "pokemon-favorites";

/// A string key-value store that lives as long as the process.
///
/// Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        let _ = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value);
    }

    fn remove(&self, key: &str) {
        let _ = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl Storage for Memory {
    async fn load_collection(&self) -> Result<Option<Vec<Pokemon>>, Error> {
        self.get(COLLECTION)
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(Error::from)
    }

    async fn store_collection(&self, pokemon: &[Pokemon]) -> Result<(), Error> {
        self.set(COLLECTION, serde_json::to_string(pokemon)?);

        Ok(())
    }

    async fn clear_collection(&self) -> Result<(), Error> {
        self.remove(COLLECTION);

        Ok(())
    }

    async fn load_favorites(&self) -> Result<Favorites, Error> {
        let Some(json) = self.get(FAVORITES) else {
            return Ok(Favorites::new());
        };

        Ok(serde_json::from_str(&json)?)
    }

    async fn store_favorites(&self, favorites: &Favorites) -> Result<(), Error> {
        self.set(FAVORITES, serde_json::to_string(favorites)?);

        Ok(())
    }
}
