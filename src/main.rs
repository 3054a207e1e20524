use pokebase;

mod cli;

use crate::cli::{Assignment, Cli, Command};
use crate::pokebase::listing::Origin;
use crate::pokebase::storage::{Backend, Memory};
use crate::pokebase::{
    Error, Filter, Listing, Pokemon, Session, Source, Team, compare, daily, evolution, game,
    matchup, stats,
};

use chrono::Datelike;

use clap::Parser;
use std::fmt::Write;

#[tokio::main]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let storage = if cli.ephemeral {
        Backend::Memory(Memory::new())
    } else {
        Backend::detect(cli.data_dir)
    };

    let listing = Listing::new(Session::new(cli.api_url), storage)
        .limit(cli.limit)
        .concurrency(cli.concurrency);

    match cli.command {
        Command::List(args) => {
            let filter = Filter::from(args);
            let pokedex = load(&listing).await?;
            let favorites = listing.favorites().await;

            let view = filter.apply(&pokedex, &favorites);

            for pokemon in view.matches() {
                println!("{}", row(pokemon, favorites.contains(pokemon.id)));
            }

            log::info!("{} of {} pokémon shown", view.len(), pokedex.len());
        }
        Command::Random(args) => {
            let filter = Filter::from(args);
            let pokedex = load(&listing).await?;
            let favorites = listing.favorites().await;

            let view = filter.apply(&pokedex, &favorites);

            match view.random(&mut rand::thread_rng()) {
                Some(pokemon) => println!("{}", row(pokemon, favorites.contains(pokemon.id))),
                None => println!("No pokémon match the filter"),
            }
        }
        Command::Favorite { id } => {
            let mut favorites = listing.favorites().await;

            if listing.toggle_favorite(&mut favorites, id).await {
                println!("★ {id} added to favorites");
            } else {
                println!("☆ {id} removed from favorites");
            }
        }
        Command::Evolution { id } => {
            let stages = evolution::lookup(listing.source(), id).await?;

            if let [stage] = stages.as_slice() {
                println!("{} {} doesn't evolve", stage.id, stage.name);

                return Ok(());
            }

            for stage in &stages {
                match &stage.condition {
                    None => println!("{} {}", stage.id, stage.name),
                    Some(condition) => {
                        println!("  → {} {} ({condition})", stage.id, stage.name);
                    }
                }
            }
        }
        Command::Stats {
            id,
            level,
            nature,
            ivs,
            evs,
        } => {
            let details = listing.source().fetch_details(id).await?;

            let ivs = Assignment::spread(&ivs, stats::MAX_IV);
            let evs = Assignment::spread(&evs, 0);
            let final_stats = stats::calculate(details.base_stats, ivs, evs, level, nature);

            println!("{} {} (Lv. {level}, {nature})", id, details.pokemon.name);

            for stat in stats::Stat::ALL {
                println!(
                    "{stat:>16} {base:>4} → {value:>4}",
                    base = details.base_stats.get(stat),
                    value = final_stats.get(stat)
                );
            }

            println!(
                "{:>16} {:>4} → {:>4}",
                "total",
                details.base_stats.total(),
                final_stats.total()
            );

            let abilities = details
                .abilities
                .iter()
                .map(|ability| {
                    if ability.is_hidden {
                        format!("{} (hidden)", ability.name)
                    } else {
                        ability.name.clone()
                    }
                })
                .collect::<Vec<_>>();

            println!("{:>16} {:>4}", "effort", evs.total());

            println!("abilities: {}", abilities.join(", "));
        }
        Command::Matchup { types, offense } => {
            let chart = if offense {
                matchup::offensive_chart(types[0])
            } else {
                matchup::defensive_chart(&types)
            };

            for (type_, multiplier) in chart {
                if multiplier != matchup::Multiplier::NEUTRAL {
                    println!("{type_:>10} {multiplier}");
                }
            }
        }
        Command::Team { ids } => {
            let mut team = Team::new();

            for id in ids {
                let _ = team.add(listing.source().fetch_pokemon_by_id(id).await?);
            }

            for member in team.members() {
                println!("{}", row(member, false));
            }

            let uncovered = team
                .coverage()
                .into_iter()
                .filter(|(_, covered)| !covered)
                .map(|(type_, _)| type_)
                .collect::<Vec<_>>();

            println!("not covered: {}", list(&uncovered));
            println!("weak to: {}", list(&team.weaknesses()));
            println!("resists: {}", list(&team.resistances()));
            println!("immune to: {}", list(&team.immunities()));
        }
        Command::Compare { first, second } => {
            let session = listing.source();
            let first = session.fetch_details(first).await?;
            let second = session.fetch_details(second).await?;

            let comparison = compare::compare(&first.base_stats, &second.base_stats);

            println!(
                "{:>16} {:>6} {:>6}",
                "", first.pokemon.name, second.pokemon.name
            );

            for row in &comparison.rows {
                println!(
                    "{stat:>16} {first:>6} {second:>6}  {verdict}",
                    stat = row.stat,
                    first = row.first,
                    second = row.second,
                    verdict = verdict(row.winner(), u32::from(row.difference()))
                );
            }

            println!(
                "{:>16} {:>6} {:>6}  {}",
                "total",
                comparison.first_total,
                comparison.second_total,
                verdict(comparison.total_winner(), comparison.total_difference())
            );
        }
        Command::Daily { day } => {
            let day = day.unwrap_or_else(|| chrono::Local::now().ordinal());
            let pokemon = listing
                .source()
                .fetch_pokemon_by_id(daily::of_the_day(day))
                .await?;

            println!("{}", row(&pokemon, false));
        }
        Command::Games => {
            for game in game::table().values() {
                println!(
                    "{key:<16} {name:<24} {count:>4} pokémon",
                    key = game.key,
                    name = game.name,
                    count = game.roster.len()
                );
            }
        }
        Command::ClearCache => {
            listing.clear_cache().await?;

            println!("Cache cleared");
        }
        Command::Sprite { id, output } => {
            let session = listing.source();
            let pokemon = session.fetch_pokemon_by_id(id).await?;
            let sprite = session.download_sprite(&pokemon).await?;

            tokio::fs::write(&output, &sprite).await?;

            println!("{} saved to {}", pokemon.name, output.display());
        }
    }

    Ok(())
}

async fn load(listing: &Listing<Session, Backend>) -> Result<pokebase::Pokedex, Error> {
    let load = listing.load().await?;

    match load.origin {
        Origin::Cache => log::info!("Using cached pokédex"),
        Origin::Network { dropped: 0 } => {}
        Origin::Network { dropped } => {
            log::warn!("{dropped} pokémon are missing; clear the cache to retry them")
        }
    }

    Ok(load.pokedex)
}

fn row(pokemon: &Pokemon, is_favorite: bool) -> String {
    let mut row = format!("{} {:<16}", pokemon.id, pokemon.name);

    let types = pokemon
        .types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/");

    let _ = write!(row, " {types:<18}");

    if is_favorite {
        row.push('★');
    }

    row
}

fn list<'a>(types: impl IntoIterator<Item = &'a pokebase::pokemon::Type>) -> String {
    let names = types
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    if names.is_empty() {
        "none".to_owned()
    } else {
        names.join(", ")
    }
}

fn verdict(winner: compare::Winner, difference: u32) -> String {
    match winner {
        compare::Winner::First => format!("◀ +{difference}"),
        compare::Winner::Second => format!("+{difference} ▶"),
        compare::Winner::Tie => "=".to_owned(),
    }
}
