use crate::pokemon;

/// How many Pokémon the daily pick cycles through.
pub const CYCLE: u32 = 1010;

/// The Pokémon of the day, given the day of the year (1 on January 1st).
pub fn of_the_day(day_of_year: u32) -> pokemon::Id {
    pokemon::Id(day_of_year % CYCLE + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_cycle_through_the_pokedex() {
        assert_eq!(of_the_day(1), pokemon::Id(2));
        assert_eq!(of_the_day(365), pokemon::Id(366));
        assert_eq!(of_the_day(1009), pokemon::Id(1010));
        assert_eq!(of_the_day(1010), pokemon::Id(1));
        assert!((0..5_000).all(|day| (1..=CYCLE).contains(&of_the_day(day).number())));
    }
}
