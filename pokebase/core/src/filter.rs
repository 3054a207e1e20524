use crate::game;
use crate::pokemon::{self, Pokedex, Pokemon};
use crate::{Favorites, Game, Generation};

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::sync::Arc;

/// What the user is looking for in the Pokédex.
///
/// `None` stands for "all" in every selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    pub search: String,
    pub type_: Option<pokemon::Type>,
    pub generation: Option<Generation>,
    pub game: Option<game::Key>,
    pub favorites_only: bool,
}

impl Filter {
    pub fn matches(&self, pokemon: &Pokemon, favorites: &Favorites) -> bool {
        Matcher::new(self).matches(pokemon, favorites)
    }

    /// Computes the Pokémon matching the filter, in Pokédex order.
    pub fn apply(&self, pokedex: &Pokedex, favorites: &Favorites) -> View {
        let matcher = Matcher::new(self);

        View::new(
            pokedex
                .values()
                .iter()
                .filter(|pokemon| matcher.matches(pokemon, favorites))
                .cloned()
                .collect::<Vec<_>>(),
        )
    }
}

struct Matcher<'a> {
    filter: &'a Filter,
    query: String,
    game: Option<Option<&'static Game>>,
}

impl<'a> Matcher<'a> {
    fn new(filter: &'a Filter) -> Self {
        Self {
            filter,
            query: filter.search.to_lowercase(),
            game: filter.game.as_ref().map(|key| game::find(key.as_str())),
        }
    }

    // Cheapest predicates first; the search allocates.
    fn matches(&self, pokemon: &Pokemon, favorites: &Favorites) -> bool {
        (!self.filter.favorites_only || favorites.contains(pokemon.id))
            && self
                .filter
                .generation
                .is_none_or(|generation| generation.contains(pokemon.id))
            && self
                .game
                .is_none_or(|game| game.is_some_and(|game| game.has(pokemon.id)))
            && self
                .filter
                .type_
                .is_none_or(|type_| pokemon.has_type(type_))
            && (self.query.is_empty()
                || pokemon.name.to_lowercase().contains(&self.query)
                || pokemon.id.number().to_string().contains(&self.query))
    }
}

/// The result of applying a [`Filter`].
pub struct View {
    matches: Arc<[Pokemon]>,
}

impl View {
    pub fn new(matches: impl Into<Arc<[Pokemon]>>) -> Self {
        Self {
            matches: matches.into(),
        }
    }

    pub fn matches(&self) -> &[Pokemon] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Picks one of the matches uniformly at random.
    pub fn random(&self, rng: &mut impl Rng) -> Option<&Pokemon> {
        self.matches.choose(rng)
    }
}

impl Clone for View {
    fn clone(&self) -> Self {
        Self {
            matches: self.matches.clone(),
        }
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("matches", &self.matches.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pokemon(id: u32, name: &str, types: &[pokemon::Type]) -> Pokemon {
        Pokemon {
            id: pokemon::Id(id),
            name: name.to_owned(),
            sprite_url: String::new(),
            types: types.to_vec(),
            height: 10,
            weight: 100,
        }
    }

    fn sample() -> Pokedex {
        use crate::pokemon::Type::*;

        pokemon::pokedex(vec![
            pokemon(1, "bulbasaur", &[Grass, Poison]),
            pokemon(4, "charmander", &[Fire]),
            pokemon(25, "pikachu", &[Electric]),
            pokemon(151, "mew", &[Psychic]),
            pokemon(152, "chikorita", &[Grass]),
            pokemon(258, "mudkip", &[Water]),
            pokemon(906, "sprigatito", &[Grass]),
        ])
    }

    fn names(view: &View) -> Vec<&str> {
        view.matches()
            .iter()
            .map(|pokemon| pokemon.name.as_str())
            .collect()
    }

    #[test]
    fn default_filter_matches_everything() {
        let view = Filter::default().apply(&sample(), &Favorites::new());

        assert_eq!(view.len(), 7);
    }

    #[test]
    fn search_matches_names_case_insensitively_and_ids() {
        let pokedex = sample();
        let favorites = Favorites::new();

        let filter = Filter {
            search: "CHI".to_owned(),
            ..Filter::default()
        };
        assert_eq!(names(&filter.apply(&pokedex, &favorites)), ["chikorita"]);

        let filter = Filter {
            search: "15".to_owned(),
            ..Filter::default()
        };
        assert_eq!(
            names(&filter.apply(&pokedex, &favorites)),
            ["mew", "chikorita"]
        );
    }

    #[test]
    fn selections_are_conjunctive() {
        let filter = Filter {
            type_: Some(pokemon::Type::Grass),
            generation: Some(Generation::I),
            ..Filter::default()
        };

        let view = filter.apply(&sample(), &Favorites::new());

        assert_eq!(names(&view), ["bulbasaur"]);
    }

    #[test]
    fn game_rosters_restrict_matches() {
        let filter = Filter {
            game: Some("red-blue".parse().unwrap()),
            ..Filter::default()
        };

        let view = filter.apply(&sample(), &Favorites::new());

        assert_eq!(names(&view), ["bulbasaur", "charmander", "pikachu"]);
    }

    #[test]
    fn favorites_only_shows_favorites() {
        let favorites = Favorites::from_iter([pokemon::Id(25), pokemon::Id(258)]);

        let filter = Filter {
            favorites_only: true,
            ..Filter::default()
        };

        assert_eq!(
            names(&filter.apply(&sample(), &favorites)),
            ["pikachu", "mudkip"]
        );
    }

    #[test]
    fn random_picks_only_from_matches() {
        let mut rng = StdRng::seed_from_u64(42);
        let pokedex = sample();
        let favorites = Favorites::new();

        let filter = Filter {
            type_: Some(pokemon::Type::Grass),
            ..Filter::default()
        };
        let view = filter.apply(&pokedex, &favorites);

        for _ in 0..100 {
            let pick = view.random(&mut rng).unwrap();

            assert!(filter.matches(pick, &favorites));
        }

        let filter = Filter {
            type_: Some(pokemon::Type::Dragon),
            ..Filter::default()
        };

        assert!(filter.apply(&pokedex, &favorites).random(&mut rng).is_none());
    }

    #[test]
    fn matches_is_the_conjunction_of_every_predicate() {
        let mut rng = StdRng::seed_from_u64(1010);
        let games: Vec<&Game> = game::table().values().iter().collect();

        for _ in 0..2_000 {
            let entity = {
                let first = pokemon::Type::ALL[rng.gen_range(0..18)];
                let second = pokemon::Type::ALL[rng.gen_range(0..18)];
                let types = if rng.gen_bool(0.5) && first != second {
                    vec![first, second]
                } else {
                    vec![first]
                };

                pokemon(rng.gen_range(1..=1010), &random_name(&mut rng), &types)
            };

            let starred = rng.gen_bool(0.3).then_some(entity.id);
            let favorites: Favorites = (0..rng.gen_range(0..50))
                .map(|_| pokemon::Id(rng.gen_range(1..=1010)))
                .chain(starred)
                .collect();

            let game = rng
                .gen_bool(0.5)
                .then(|| games[rng.gen_range(0..games.len())]);

            let filter = Filter {
                search: if rng.gen_bool(0.5) {
                    random_query(&mut rng)
                } else {
                    String::new()
                },
                type_: rng
                    .gen_bool(0.5)
                    .then(|| pokemon::Type::ALL[rng.gen_range(0..18)]),
                generation: rng
                    .gen_bool(0.5)
                    .then(|| Generation::ALL[rng.gen_range(0..9)]),
                game: game.map(|game| game.key.clone()),
                favorites_only: rng.gen_bool(0.5),
            };

            let by_search = filter.search.is_empty()
                || entity
                    .name
                    .to_lowercase()
                    .contains(&filter.search.to_lowercase())
                || format!("{}", entity.id.0).contains(&filter.search);
            let by_type = filter
                .type_
                .is_none_or(|type_| entity.types.iter().any(|candidate| *candidate == type_));
            let by_generation = filter.generation.is_none_or(|generation| {
                let range = generation.range();

                *range.start() <= entity.id.0 && entity.id.0 <= *range.end()
            });
            let by_game = game.is_none_or(|game| game.roster.iter().any(|id| *id == entity.id));
            let by_favorites = !filter.favorites_only || favorites.iter().any(|id| id == entity.id);

            assert_eq!(
                filter.matches(&entity, &favorites),
                by_search && by_type && by_generation && by_game && by_favorites,
                "{filter:?} on {entity:?}"
            );
        }
    }

    fn random_name(rng: &mut StdRng) -> String {
        const SYLLABLES: [&str; 8] = ["pi", "KA", "chu", "bul", "ba", "saur", "Mew", "tw"];

        (0..rng.gen_range(1..4))
            .map(|_| SYLLABLES[rng.gen_range(0..SYLLABLES.len())])
            .collect()
    }

    fn random_query(rng: &mut StdRng) -> String {
        if rng.gen_bool(0.3) {
            rng.gen_range(1..200).to_string()
        } else {
            random_name(rng).chars().take(rng.gen_range(1..4)).collect()
        }
    }
}
