//! Side-by-side comparison of two base stat spreads.
use crate::stats::{Spread, Stat};

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
    Tie,
}

impl Winner {
    fn of(first: u32, second: u32) -> Self {
        match first.cmp(&second) {
            Ordering::Greater => Self::First,
            Ordering::Less => Self::Second,
            Ordering::Equal => Self::Tie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub stat: Stat,
    pub first: u16,
    pub second: u16,
}

impl Row {
    pub fn difference(&self) -> u16 {
        self.first.abs_diff(self.second)
    }

    pub fn winner(&self) -> Winner {
        Winner::of(u32::from(self.first), u32::from(self.second))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub rows: Vec<Row>,
    pub first_total: u32,
    pub second_total: u32,
}

impl Comparison {
    pub fn total_difference(&self) -> u32 {
        self.first_total.abs_diff(self.second_total)
    }

    pub fn total_winner(&self) -> Winner {
        Winner::of(self.first_total, self.second_total)
    }
}

pub fn compare(first: &Spread, second: &Spread) -> Comparison {
    Comparison {
        rows: Stat::ALL
            .into_iter()
            .map(|stat| Row {
                stat,
                first: first.get(stat),
                second: second.get(stat),
            })
            .collect(),
        first_total: first.total(),
        second_total: second.total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread(values: [u16; 6]) -> Spread {
        let mut spread = Spread::default();

        for (stat, value) in Stat::ALL.into_iter().zip(values) {
            spread.set(stat, value);
        }

        spread
    }

    #[test]
    fn rows_follow_stat_order() {
        // Charizard against Blastoise
        let comparison = compare(
            &spread([78, 84, 78, 109, 85, 100]),
            &spread([79, 83, 100, 85, 105, 78]),
        );

        assert_eq!(comparison.rows.len(), 6);
        assert_eq!(comparison.rows[0].winner(), Winner::Second);
        assert_eq!(comparison.rows[0].difference(), 1);
        assert_eq!(comparison.rows[3].stat, Stat::SpecialAttack);
        assert_eq!(comparison.rows[3].winner(), Winner::First);
        assert_eq!(comparison.rows[3].difference(), 24);
        assert_eq!(comparison.first_total, 534);
        assert_eq!(comparison.second_total, 530);
        assert_eq!(comparison.total_winner(), Winner::First);
        assert_eq!(comparison.total_difference(), 4);
    }

    #[test]
    fn equal_stats_tie() {
        let comparison = compare(&Spread::uniform(80), &Spread::uniform(80));

        assert!(comparison
            .rows
            .iter()
            .all(|row| row.winner() == Winner::Tie && row.difference() == 0));
        assert_eq!(comparison.total_winner(), Winner::Tie);
    }
}
