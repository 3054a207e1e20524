mod map;

pub mod compare;
pub mod daily;
pub mod evolution;
pub mod favorites;
pub mod filter;
pub mod game;
pub mod generation;
pub mod matchup;
pub mod pokemon;
pub mod resource;
pub mod stats;
pub mod team;

pub use evolution::Stage;
pub use favorites::Favorites;
pub use filter::Filter;
pub use game::Game;
pub use generation::Generation;
pub use map::Map;
pub use pokemon::Pokemon;
pub use resource::Resource;
pub use team::Team;
