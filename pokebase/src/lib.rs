pub use pokebase_core as core;

pub mod error;
pub mod evolution;
pub mod listing;
pub mod session;
pub mod source;
pub mod storage;

pub use crate::core::evolution::Stage;
pub use crate::core::filter::{self, Filter, View};
pub use crate::core::pokemon::{self, Pokedex, Pokemon};
pub use crate::core::{
    Favorites, Game, Generation, Resource, Team, compare, daily, game, generation, matchup, stats,
    team,
};
pub use error::Error;
pub use listing::Listing;
pub use session::Session;
pub use source::Source;
pub use storage::Storage;

pub type Result<T, E = Error> = std::result::Result<T, E>;
