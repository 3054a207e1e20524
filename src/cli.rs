use pokebase::session::POKEAPI;
use pokebase::stats::{self, Nature, Stat};
use pokebase::{Filter, Generation, game, pokemon};

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Browse the Pokédex from the terminal
#[derive(Debug, Parser)]
#[command(name = "pokedex", version)]
pub struct Cli {
    /// Base URL of the PokéAPI-compatible service
    #[arg(long, env = "POKEDEX_API_URL", default_value = POKEAPI, global = true)]
    pub api_url: String,

    /// How many Pokémon to list
    #[arg(long, default_value_t = pokebase::listing::DEFAULT_LIMIT, global = true)]
    pub limit: usize,

    /// How many detail requests may be in flight at once
    #[arg(long, default_value_t = pokebase::listing::DEFAULT_CONCURRENCY, global = true)]
    pub concurrency: usize,

    /// Where the cache and favorites are stored
    #[arg(long, env = "POKEDEX_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is persisted
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the Pokémon matching a filter
    List(FilterArgs),
    /// Pick a random Pokémon among those matching a filter
    Random(FilterArgs),
    /// Star or unstar a Pokémon
    Favorite { id: pokemon::Id },
    /// Show the evolution chain of a species
    Evolution { id: pokemon::Id },
    /// Compute the final stats of a Pokémon
    Stats {
        id: pokemon::Id,

        #[arg(long, default_value_t = 50)]
        level: u8,

        #[arg(long, default_value_t = Nature::Hardy)]
        nature: Nature,

        /// Individual value of a stat, e.g. `atk=31`; unset stats default to 31
        #[arg(long = "iv")]
        ivs: Vec<Assignment>,

        /// Effort values of a stat, e.g. `spe=252`; unset stats default to 0
        #[arg(long = "ev")]
        evs: Vec<Assignment>,
    },
    /// Show the type matchups of one or two types
    Matchup {
        #[arg(required = true, num_args = 1..=2)]
        types: Vec<pokemon::Type>,

        /// Show how the first type fares when attacking instead
        #[arg(long)]
        offense: bool,
    },
    /// Analyze the type coverage of a team of up to six Pokémon
    Team {
        #[arg(required = true, num_args = 1..=6)]
        ids: Vec<pokemon::Id>,
    },
    /// Compare the base stats of two Pokémon
    Compare {
        first: pokemon::Id,
        second: pokemon::Id,
    },
    /// Show the Pokémon of the day
    Daily {
        /// Day of the year to use instead of today
        #[arg(long)]
        day: Option<u32>,
    },
    /// List the known games
    Games,
    /// Forget the cached Pokédex
    ClearCache,
    /// Download the sprite of a Pokémon
    Sprite { id: pokemon::Id, output: PathBuf },
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Part of a name or a Pokédex number
    pub search: Option<String>,

    #[arg(long = "type")]
    pub type_: Option<pokemon::Type>,

    /// A generation number, from 1 to 9
    #[arg(long)]
    pub generation: Option<Generation>,

    /// A game key, like `red-blue`
    #[arg(long)]
    pub game: Option<game::Key>,

    /// Only show favorites
    #[arg(long)]
    pub favorites: bool,
}

impl From<FilterArgs> for Filter {
    fn from(args: FilterArgs) -> Self {
        Filter {
            search: args.search.unwrap_or_default(),
            type_: args.type_,
            generation: args.generation,
            game: args.game,
            favorites_only: args.favorites,
        }
    }
}

/// A `stat=value` pair.
#[derive(Debug, Clone, Copy)]
pub struct Assignment {
    pub stat: Stat,
    pub value: u16,
}

impl Assignment {
    pub fn spread(assignments: &[Self], default: u16) -> stats::Spread {
        let mut spread = stats::Spread::uniform(default);

        for assignment in assignments {
            spread.set(assignment.stat, assignment.value);
        }

        spread
    }
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((stat, value)) = s.split_once('=') else {
            return Err(format!("expected stat=value, got: {s}"));
        };

        Ok(Self {
            stat: stat.trim().parse()?,
            value: value
                .trim()
                .parse()
                .map_err(|_| format!("invalid value: {value}"))?,
        })
    }
}
