//! Which Pokémon can be found in each main-series game.
//!
//! Rosters come from an embedded data asset (`data/games.ron`). They are a
//! hand-curated approximation and are not derived from the remote data source.
use crate::Map;
use crate::pokemon;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub key: Key,
    pub name: String,
    pub roster: BTreeSet<pokemon::Id>,
}

impl Game {
    pub fn has(&self, id: pokemon::Id) -> bool {
        self.roster.contains(&id)
    }
}

pub type Table = Map<Key, Game>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();

        if table().contains_key(key.as_str()) {
            Ok(Self(key))
        } else {
            Err(format!("unknown game: {s}"))
        }
    }
}

/// Every known game, in release order.
pub fn table() -> &'static Table {
    static TABLE: LazyLock<Table> = LazyLock::new(|| {
        let games: Vec<Entry> = decompress(include_bytes!("../data/games.ron.gz"));

        log::info!("Loaded roster of {} games", games.len());

        Map::new(
            games.into_iter().map(Entry::into_game).collect::<Vec<_>>(),
            |game| game.key.clone(),
        )
    });

    &TABLE
}

pub fn find(key: &str) -> Option<&'static Game> {
    table().get(key)
}

#[derive(Deserialize)]
struct Entry {
    key: String,
    name: String,
    roster: Vec<Members>,
}

#[derive(Deserialize)]
enum Members {
    Range(u32, u32),
    Only(Vec<u32>),
}

impl Entry {
    fn into_game(self) -> Game {
        let roster = self
            .roster
            .into_iter()
            .flat_map(|members| match members {
                Members::Range(first, last) => (first..=last).collect::<Vec<_>>(),
                Members::Only(numbers) => numbers,
            })
            .filter_map(pokemon::Id::new)
            .collect();

        Game {
            key: Key(self.key),
            name: self.name,
            roster,
        }
    }
}

fn decompress<T: DeserializeOwned>(bytes: &[u8]) -> T {
    use flate2::read::GzDecoder;

    let decoder = GzDecoder::new(bytes);

    ron::de::from_reader(decoder).expect("Game roster is corrupt! Decompression failed.")
}
