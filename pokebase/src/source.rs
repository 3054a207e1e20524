use crate::core::evolution;
use crate::{Error, Pokemon, Resource, pokemon};

/// Where Pokémon data comes from.
pub trait Source {
    /// Lists the first `limit` Pokémon, in Pokédex order.
    fn fetch_index(&self, limit: usize)
    -> impl Future<Output = Result<Vec<Resource>, Error>> + Send;

    fn fetch_pokemon(
        &self,
        reference: &Resource,
    ) -> impl Future<Output = Result<Pokemon, Error>> + Send;

    fn fetch_pokemon_by_id(
        &self,
        id: pokemon::Id,
    ) -> impl Future<Output = Result<Pokemon, Error>> + Send;

    /// Fetches the evolution chain the given species belongs to.
    fn fetch_evolution_chain(
        &self,
        species: pokemon::Id,
    ) -> impl Future<Output = Result<evolution::Chain, Error>> + Send;
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::atomic::{self, AtomicUsize};

    /// An in-memory source that counts every request it serves.
    #[derive(Debug, Default)]
    pub struct Fake {
        pokemon: BTreeMap<pokemon::Id, Pokemon>,
        chains: BTreeMap<pokemon::Id, evolution::Chain>,
        failing: BTreeSet<pokemon::Id>,
        offline: bool,
        requests: AtomicUsize,
    }

    impl Fake {
        pub fn new(pokemon: impl IntoIterator<Item = Pokemon>) -> Self {
            Self {
                pokemon: pokemon
                    .into_iter()
                    .map(|pokemon| (pokemon.id, pokemon))
                    .collect(),
                ..Self::default()
            }
        }

        pub fn numbered(count: u32) -> Self {
            Self::new((1..=count).map(|number| summary(number, &format!("pokemon-{number}"))))
        }

        pub fn failing(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
            self.failing.extend(numbers.into_iter().map(id));
            self
        }

        pub fn offline(mut self) -> Self {
            self.offline = true;
            self
        }

        pub fn chain(mut self, species: u32, chain: evolution::Chain) -> Self {
            let _ = self.chains.insert(id(species), chain);
            self
        }

        pub fn requests(&self) -> usize {
            self.requests.load(atomic::Ordering::SeqCst)
        }

        fn serve(&self, id: pokemon::Id) -> Result<Pokemon, Error> {
            let _ = self.requests.fetch_add(1, atomic::Ordering::SeqCst);

            if self.offline || self.failing.contains(&id) {
                return Err(Error::PokemonNotFound(id));
            }

            self.pokemon
                .get(&id)
                .cloned()
                .ok_or(Error::PokemonNotFound(id))
        }
    }

    impl Source for Fake {
        async fn fetch_index(&self, limit: usize) -> Result<Vec<Resource>, Error> {
            let _ = self.requests.fetch_add(1, atomic::Ordering::SeqCst);

            if self.offline {
                return Err(Error::UnexpectedData("the index is offline".to_owned()));
            }

            Ok(self
                .pokemon
                .values()
                .take(limit)
                .map(|pokemon| Resource {
                    name: pokemon.name.clone(),
                    url: format!(
                        "https://pokeapi.test/api/v2/pokemon/{}/",
                        pokemon.id.number()
                    ),
                })
                .collect())
        }

        async fn fetch_pokemon(&self, reference: &Resource) -> Result<Pokemon, Error> {
            let id = reference
                .id()
                .ok_or_else(|| Error::InvalidReference(reference.url.clone()))?;

            self.serve(id)
        }

        async fn fetch_pokemon_by_id(&self, id: pokemon::Id) -> Result<Pokemon, Error> {
            self.serve(id)
        }

        async fn fetch_evolution_chain(
            &self,
            species: pokemon::Id,
        ) -> Result<evolution::Chain, Error> {
            let _ = self.requests.fetch_add(1, atomic::Ordering::SeqCst);

            self.chains
                .get(&species)
                .cloned()
                .ok_or(Error::PokemonNotFound(species))
        }
    }

    pub fn id(number: u32) -> pokemon::Id {
        pokemon::Id::new(number).unwrap()
    }

    pub fn summary(number: u32, name: &str) -> Pokemon {
        Pokemon {
            id: id(number),
            name: name.to_owned(),
            sprite_url: format!("https://sprites.test/{number}.png"),
            types: vec![pokemon::Type::Normal],
            height: 10,
            weight: 100,
        }
    }
}
