//! The records served by the remote API, as they come over the wire.
use crate::pokemon::{self, Ability, Details};
use crate::stats::{self, Stat};
use crate::{Error, Resource};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Index {
    pub results: Vec<Resource>,
}

#[derive(Deserialize)]
pub struct Pokemon {
    id: u32,
    name: String,
    sprites: Sprites,
    types: Vec<TypeSlot>,
    height: u32,
    weight: u32,
    #[serde(default)]
    stats: Vec<BaseStat>,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
}

#[derive(Deserialize)]
struct Sprites {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    other: Option<OtherSprites>,
}

#[derive(Deserialize)]
struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    official_artwork: Option<Artwork>,
}

#[derive(Deserialize)]
struct Artwork {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct TypeSlot {
    slot: u8,
    #[serde(rename = "type")]
    type_: Named,
}

#[derive(Deserialize)]
struct BaseStat {
    base_stat: u16,
    stat: Named,
}

#[derive(Deserialize)]
struct AbilitySlot {
    ability: Named,
    #[serde(default)]
    is_hidden: bool,
}

#[derive(Deserialize)]
struct Named {
    name: String,
}

#[derive(Deserialize)]
pub struct Species {
    #[serde(default)]
    pub evolution_chain: Option<Link>,
}

#[derive(Deserialize)]
pub struct Link {
    pub url: String,
}

impl Pokemon {
    pub fn into_details(self) -> Result<Details, Error> {
        let id = pokemon::Id::new(self.id)
            .ok_or_else(|| Error::UnexpectedData(format!("invalid pokémon id: {}", self.id)))?;

        // Official artwork first, then the default front sprite
        let sprite_url = self
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default)
            .or(self.sprites.front_default)
            .unwrap_or_default();

        let mut types = self.types;
        types.sort_by_key(|slot| slot.slot);

        let types = types
            .into_iter()
            .map(|slot| slot.type_.name.parse())
            .collect::<Result<Vec<pokemon::Type>, String>>()
            .map_err(Error::UnexpectedData)?;

        let mut base_stats = stats::Spread::default();

        for entry in self.stats {
            // Unknown stats are ignored
            if let Ok(stat) = entry.stat.name.parse::<Stat>() {
                base_stats.set(stat, entry.base_stat);
            }
        }

        Ok(Details {
            pokemon: crate::Pokemon {
                id,
                name: self.name,
                sprite_url,
                types,
                height: self.height,
                weight: self.weight,
            },
            base_stats,
            abilities: self
                .abilities
                .into_iter()
                .map(|slot| Ability {
                    name: slot.ability.name,
                    is_hidden: slot.is_hidden,
                })
                .collect(),
        })
    }
}
