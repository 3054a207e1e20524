use crate::pokemon;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The Pokémon the user has starred.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeSet<pokemon::Id>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the Pokémon if missing, removes it otherwise.
    ///
    /// Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, id: pokemon::Id) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id)
        }
    }

    pub fn contains(&self, id: pokemon::Id) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = pokemon::Id> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<pokemon::Id> for Favorites {
    fn from_iter<I: IntoIterator<Item = pokemon::Id>>(iter: I) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}
