//! Evolution chains, as documents and as flattened stages.
use crate::Resource;
use crate::pokemon;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An evolution chain document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub chain: Link,
}

/// A species in a chain, with the species it evolves into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub species: Resource,
    /// The alternative ways of evolving into this species.
    #[serde(default)]
    pub evolution_details: Vec<Details>,
    #[serde(default)]
    pub evolves_to: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub trigger: Option<Resource>,
    #[serde(default)]
    pub item: Option<Resource>,
}

/// A single step of a flattened chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: pokemon::Id,
    pub name: String,
    pub sprite_url: String,
    /// How the previous stage evolves into this one. `None` for the base stage.
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub min_level: Option<u32>,
    pub trigger: Option<String>,
    pub item: Option<String>,
}

impl Condition {
    pub fn level(level: u32) -> Self {
        Self {
            min_level: Some(level),
            trigger: Some("level-up".to_owned()),
            item: None,
        }
    }
}

impl From<&Details> for Condition {
    fn from(details: &Details) -> Self {
        Self {
            min_level: details.min_level,
            trigger: details.trigger.as_ref().map(|trigger| trigger.name.clone()),
            item: details.item.as_ref().map(|item| item.name.clone()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min_level, &self.item, &self.trigger) {
            (Some(level), _, _) => write!(f, "Lv. {level}"),
            (None, Some(item), _) => f.write_str(&item.replace('-', " ")),
            (None, None, Some(trigger)) => f.write_str(&trigger.replace('-', " ")),
            (None, None, None) => f.write_str("unknown"),
        }
    }
}

/// A species reached while walking a chain, before its sprite is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    pub species: &'a Resource,
    pub condition: Option<Condition>,
}

impl Chain {
    /// Flattens the chain in pre-order: every species comes before the species
    /// it evolves into, and siblings keep their document order.
    ///
    /// Only the first evolution method of each species is kept.
    pub fn steps(&self) -> Vec<Step<'_>> {
        let mut steps = Vec::new();
        let mut pending = vec![(&self.chain, None)];

        while let Some((link, condition)) = pending.pop() {
            steps.push(Step {
                species: &link.species,
                condition,
            });

            pending.extend(
                link.evolves_to
                    .iter()
                    .rev()
                    .map(|next| (next, next.evolution_details.first().map(Condition::from))),
            );
        }

        steps
    }
}
