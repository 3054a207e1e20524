use crate::pokemon::{self, Pokedex};
use crate::{Error, Favorites, Pokemon, Source, Storage};

use futures_util::future;
use futures_util::stream::{self, StreamExt};

/// How many Pokémon are listed by default.
pub const DEFAULT_LIMIT: usize = 1010;

/// How many detail requests may be in flight at once by default.
pub const DEFAULT_CONCURRENCY: usize = 32;

/// Builds the Pokédex from a [`Source`], caching it in a [`Storage`].
#[derive(Debug, Clone)]
pub struct Listing<S, T> {
    source: S,
    storage: T,
    limit: usize,
    concurrency: usize,
}

/// A loaded Pokédex and where it came from.
#[derive(Debug, Clone)]
pub struct Load {
    pub pokedex: Pokedex,
    pub origin: Origin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    /// Fetched from the source; `dropped` entries failed to resolve.
    Network { dropped: usize },
}

impl<S: Source, T: Storage> Listing<S, T> {
    pub fn new(source: S, storage: T) -> Self {
        Self {
            source,
            storage,
            limit: DEFAULT_LIMIT,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }

    pub fn concurrency(self, concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
            ..self
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn storage(&self) -> &T {
        &self.storage
    }

    /// Loads the Pokédex, from the cache if possible.
    ///
    /// Entries that fail to resolve are left out; only a failure to fetch the
    /// index fails the whole load.
    pub async fn load(&self) -> Result<Load, Error> {
        if let Some(pokedex) = self.cached().await {
            return Ok(Load {
                pokedex,
                origin: Origin::Cache,
            });
        }

        let index = self
            .source
            .fetch_index(self.limit)
            .await
            .map_err(|error| Error::IndexUnavailable(Box::new(error)))?;

        log::info!("Resolving {} pokémon", index.len());

        let mut collection: Vec<Pokemon> = stream::iter(&index)
            .map(|reference| async move {
                match self.source.fetch_pokemon(reference).await {
                    Ok(pokemon) => Some(pokemon),
                    Err(error) => {
                        log::warn!("Skipping {name}: {error}", name = reference.name);
                        None
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .filter_map(future::ready)
            .collect()
            .await;

        // Responses arrive in completion order
        collection.sort_by_key(|pokemon| pokemon.id);

        let dropped = index.len() - collection.len();

        if dropped > 0 {
            log::warn!("{dropped} pokémon could not be resolved");
        }

        if !collection.is_empty() {
            if let Err(error) = self.storage.store_collection(&collection).await {
                log::warn!("Failed to cache the pokédex: {error}");
            }
        }

        Ok(Load {
            pokedex: pokemon::pokedex(collection),
            origin: Origin::Network { dropped },
        })
    }

    async fn cached(&self) -> Option<Pokedex> {
        match self.storage.load_collection().await {
            Ok(Some(collection)) if !collection.is_empty() => {
                log::info!("Loaded {} pokémon from cache", collection.len());

                Some(pokemon::pokedex(collection))
            }
            Ok(_) => None,
            Err(error) => {
                log::warn!("Ignoring the pokédex cache: {error}");
                None
            }
        }
    }

    /// Forgets the cached Pokédex; the next load goes to the source.
    pub async fn clear_cache(&self) -> Result<(), Error> {
        self.storage.clear_collection().await
    }

    /// Loads the favorite set. An unreadable set is treated as empty.
    pub async fn favorites(&self) -> Favorites {
        self.storage.load_favorites().await.unwrap_or_else(|error| {
            log::warn!("Ignoring stored favorites: {error}");

            Favorites::new()
        })
    }

    /// Toggles a favorite and persists the resulting set, even when empty.
    ///
    /// Returns whether the Pokémon is a favorite afterwards.
    pub async fn toggle_favorite(&self, favorites: &mut Favorites, id: pokemon::Id) -> bool {
        let is_favorite = favorites.toggle(id);

        if let Err(error) = self.storage.store_favorites(favorites).await {
            log::warn!("Failed to persist favorites: {error}");
        }

        is_favorite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fake::{self, Fake};
    use crate::storage::{File, Memory};

    #[tokio::test]
    async fn failed_entries_are_dropped() {
        let listing = Listing::new(Fake::numbered(10).failing([2, 5, 9]), Memory::new())
            .concurrency(4);

        let load = listing.load().await.unwrap();

        assert_eq!(load.pokedex.len(), 7);
        assert_eq!(load.origin, Origin::Network { dropped: 3 });
        assert!(!load.pokedex.contains_key(&fake::id(5)));
    }

    #[tokio::test]
    async fn entries_are_ordered_by_id() {
        let listing = Listing::new(Fake::numbered(50), Memory::new()).concurrency(16);

        let load = listing.load().await.unwrap();

        let ids: Vec<u32> = load
            .pokedex
            .values()
            .iter()
            .map(|pokemon| pokemon.id.number())
            .collect();

        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn limit_bounds_the_index() {
        let listing = Listing::new(Fake::numbered(30), Memory::new()).limit(12);

        assert_eq!(listing.load().await.unwrap().pokedex.len(), 12);
    }

    #[tokio::test]
    async fn cached_collections_skip_the_source() {
        let storage = Memory::new();
        storage
            .store_collection(&[fake::summary(1, "bulbasaur"), fake::summary(4, "charmander")])
            .await
            .unwrap();

        let listing = Listing::new(Fake::numbered(10), storage);
        let load = listing.load().await.unwrap();

        assert_eq!(load.origin, Origin::Cache);
        assert_eq!(load.pokedex.len(), 2);
        assert_eq!(listing.source().requests(), 0);
    }

    #[tokio::test]
    async fn loads_are_cached_until_cleared() {
        let listing = Listing::new(Fake::numbered(5), Memory::new());

        let _ = listing.load().await.unwrap();
        let stored = listing.storage().load_collection().await.unwrap();

        assert_eq!(stored.map(|collection| collection.len()), Some(5));
        assert_eq!(listing.load().await.unwrap().origin, Origin::Cache);

        listing.clear_cache().await.unwrap();

        assert_eq!(
            listing.load().await.unwrap().origin,
            Origin::Network { dropped: 0 }
        );
    }

    #[tokio::test]
    async fn empty_caches_are_ignored() {
        let storage = Memory::new();
        storage.store_collection(&[]).await.unwrap();

        let listing = Listing::new(Fake::numbered(3), storage);

        assert_eq!(
            listing.load().await.unwrap().origin,
            Origin::Network { dropped: 0 }
        );
    }

    #[tokio::test]
    async fn an_unreachable_index_fails_the_load() {
        let listing = Listing::new(Fake::numbered(3).offline(), Memory::new());

        assert!(matches!(
            listing.load().await,
            Err(Error::IndexUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn favorites_persist_even_when_emptied() {
        let listing = Listing::new(Fake::default(), Memory::new());
        let mut favorites = listing.favorites().await;

        assert!(listing.toggle_favorite(&mut favorites, fake::id(25)).await);
        assert!(listing.favorites().await.contains(fake::id(25)));

        assert!(!listing.toggle_favorite(&mut favorites, fake::id(25)).await);
        assert!(listing.favorites().await.is_empty());
        assert_eq!(
            listing.storage().load_favorites().await.unwrap(),
            Favorites::new()
        );
    }

    #[tokio::test]
    async fn corrupt_caches_fall_back_to_the_source() {
        let directory = tempfile::tempdir().unwrap();
        std::fs::write(directory.path().join("pokemon_cache.json"), "[{ not json").unwrap();

        let listing = Listing::new(Fake::numbered(4), File::new(directory.path()));
        let load = listing.load().await.unwrap();

        assert_eq!(load.origin, Origin::Network { dropped: 0 });
        assert_eq!(load.pokedex.len(), 4);

        // The fresh collection replaces the corrupt one
        assert_eq!(listing.load().await.unwrap().origin, Origin::Cache);
    }

    #[tokio::test]
    async fn storage_failures_never_fail_the_caller() {
        let directory = tempfile::tempdir().unwrap();
        let blocker = directory.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let listing = Listing::new(Fake::numbered(3), File::new(blocker.join("pokedex")));

        assert!(listing.storage().store_collection(&[]).await.is_err());

        let load = listing.load().await.unwrap();

        assert_eq!(load.origin, Origin::Network { dropped: 0 });
        assert_eq!(load.pokedex.len(), 3);

        let mut favorites = listing.favorites().await;

        assert!(favorites.is_empty());
        assert!(listing.toggle_favorite(&mut favorites, fake::id(1)).await);
        assert!(favorites.contains(fake::id(1)));
    }
}
