mod record;

use crate::core::evolution;
use crate::pokemon::{self, Details};
use crate::{Error, Pokemon, Resource, Source};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use std::time::Duration;

/// The public PokéAPI.
pub const POKEAPI: &str = "https://pokeapi.co/api/v2";

/// A connection to a PokéAPI-compatible REST service.
///
/// Requests are never retried; a failed request surfaces as an [`Error`].
#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    api: String,
}

impl Session {
    pub fn new(api: impl Into<String>) -> Self {
        let api = api.into().trim_end_matches('/').to_owned();

        log::info!("PokéAPI session started ({api})");

        Self {
            client: CLIENT.clone(),
            api,
        }
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    /// Fetches the full record of a Pokémon, including its base stats and abilities.
    pub async fn fetch_details(&self, id: pokemon::Id) -> Result<Details, Error> {
        let record: record::Pokemon = self.get(&self.pokemon_url(id)).await?;

        record.into_details()
    }

    pub async fn download_sprite(&self, pokemon: &Pokemon) -> Result<Bytes, Error> {
        if pokemon.sprite_url.is_empty() {
            return Err(Error::UnexpectedData(format!(
                "{name} has no sprite",
                name = pokemon.name
            )));
        }

        log::info!("Downloading sprite: {}", pokemon.sprite_url);

        let response = self.client.get(&pokemon.sprite_url).send().await?;

        Ok(response.error_for_status()?.bytes().await?)
    }

    /// Fetches the URL of the evolution chain the species belongs to.
    pub async fn fetch_species(&self, species: pokemon::Id) -> Result<String, Error> {
        let url = format!(
            "{api}/pokemon-species/{id}/",
            api = self.api,
            id = species.number()
        );

        let species: record::Species = self.get(&url).await?;

        species
            .evolution_chain
            .map(|chain| chain.url)
            .ok_or_else(|| Error::UnexpectedData(format!("{url} has no evolution chain")))
    }

    pub async fn fetch_chain(&self, url: &str) -> Result<evolution::Chain, Error> {
        log::info!("Fetching evolution chain: {url}");

        self.get(url).await
    }

    fn pokemon_url(&self, id: pokemon::Id) -> String {
        format!("{api}/pokemon/{id}/", api = self.api, id = id.number())
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        log::debug!("GET {url}");

        let response = self.client.get(url).send().await?.error_for_status()?;

        Ok(response.json().await?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(POKEAPI)
    }
}

impl Source for Session {
    async fn fetch_index(&self, limit: usize) -> Result<Vec<Resource>, Error> {
        let url = format!("{api}/pokemon?limit={limit}", api = self.api);

        log::info!("Fetching index: {url}");
        let index: record::Index = self.get(&url).await?;

        Ok(index.results)
    }

    async fn fetch_pokemon(&self, reference: &Resource) -> Result<Pokemon, Error> {
        let record: record::Pokemon = self.get(&reference.url).await?;

        Ok(record.into_details()?.pokemon)
    }

    async fn fetch_pokemon_by_id(&self, id: pokemon::Id) -> Result<Pokemon, Error> {
        Ok(self.fetch_details(id).await?.pokemon)
    }

    async fn fetch_evolution_chain(&self, species: pokemon::Id) -> Result<evolution::Chain, Error> {
        let url = self.fetch_species(species).await?;

        self.fetch_chain(&url).await
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Build reqwest client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let session = Session::new("https://pokeapi.test/api/v2/");

        assert_eq!(session.api(), "https://pokeapi.test/api/v2");
        assert_eq!(
            session.pokemon_url(pokemon::Id::new(25).unwrap()),
            "https://pokeapi.test/api/v2/pokemon/25/"
        );
    }
}
