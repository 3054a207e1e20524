use crate::core::evolution::{Chain, Stage};
use crate::{Error, Source, pokemon};

/// Flattens an evolution chain into stages, fetching the sprite of each one.
///
/// Stages are resolved one after another; the first failure aborts the walk.
pub async fn resolve(source: &impl Source, chain: &Chain) -> Result<Vec<Stage>, Error> {
    walk(source, chain)
        .await
        .map_err(|error| Error::EvolutionUnavailable(Box::new(error)))
}

/// Fetches and resolves the evolution chain of the given species.
pub async fn lookup(source: &impl Source, species: pokemon::Id) -> Result<Vec<Stage>, Error> {
    async {
        let chain = source.fetch_evolution_chain(species).await?;

        walk(source, &chain).await
    }
    .await
    .map_err(|error| Error::EvolutionUnavailable(Box::new(error)))
}

async fn walk(source: &impl Source, chain: &Chain) -> Result<Vec<Stage>, Error> {
    let mut stages = Vec::new();

    for step in chain.steps() {
        let id = step
            .species
            .id()
            .ok_or_else(|| Error::InvalidReference(step.species.url.clone()))?;

        let pokemon = source.fetch_pokemon_by_id(id).await?;

        stages.push(Stage {
            id,
            name: step.species.name.clone(),
            sprite_url: pokemon.sprite_url,
            condition: step.condition,
        });
    }

    Ok(stages)
}
