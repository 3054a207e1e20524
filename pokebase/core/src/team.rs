//! Team analysis: offensive coverage and shared weaknesses of up to six Pokémon.
use crate::matchup;
use crate::pokemon::{self, Pokemon, Type};

use std::collections::BTreeSet;

/// A team of at most [`Team::MAX_SIZE`] Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Team {
    members: Vec<Pokemon>,
}

impl Team {
    pub const MAX_SIZE: usize = 6;

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member. Returns `false` when the team is already full.
    pub fn add(&mut self, pokemon: Pokemon) -> bool {
        if self.is_full() {
            return false;
        }

        self.members.push(pokemon);
        true
    }

    pub fn remove(&mut self, id: pokemon::Id) -> Option<Pokemon> {
        let index = self.members.iter().position(|member| member.id == id)?;

        Some(self.members.remove(index))
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn members(&self) -> &[Pokemon] {
        &self.members
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= Self::MAX_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Every type present in the team.
    pub fn types(&self) -> BTreeSet<Type> {
        self.members
            .iter()
            .flat_map(|member| member.types.iter().copied())
            .collect()
    }

    /// Whether some type of the team hits each defending type super effectively.
    pub fn coverage(&self) -> Vec<(Type, bool)> {
        let types = self.types();

        Type::ALL
            .into_iter()
            .map(|defending| {
                let covered = types.iter().any(|attacking| {
                    matchup::effectiveness(*attacking, defending).is_super_effective()
                });

                (defending, covered)
            })
            .collect()
    }

    /// The attacking types some member type is weak to.
    pub fn weaknesses(&self) -> BTreeSet<Type> {
        self.union(|multiplier| multiplier.is_super_effective())
    }

    /// The attacking types some member type resists.
    pub fn resistances(&self) -> BTreeSet<Type> {
        self.union(|multiplier| multiplier.is_resisted())
    }

    /// The attacking types some member type is immune to.
    pub fn immunities(&self) -> BTreeSet<Type> {
        self.union(|multiplier| multiplier == matchup::Multiplier::IMMUNE)
    }

    fn union(&self, predicate: impl Fn(matchup::Multiplier) -> bool) -> BTreeSet<Type> {
        let types = self.types();

        Type::ALL
            .into_iter()
            .filter(|attacking| {
                types
                    .iter()
                    .any(|defending| predicate(matchup::effectiveness(*attacking, *defending)))
            })
            .collect()
    }
}
