use crate::pokemon;

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Generation {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
}

impl Generation {
    pub const ALL: [Self; 9] = [
        Self::I,
        Self::II,
        Self::III,
        Self::IV,
        Self::V,
        Self::VI,
        Self::VII,
        Self::VIII,
        Self::IX,
    ];

    /// The National Pokédex numbers introduced in this generation, both ends included.
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Self::I => 1..=151,
            Self::II => 152..=251,
            Self::III => 252..=386,
            Self::IV => 387..=493,
            Self::V => 494..=649,
            Self::VI => 650..=721,
            Self::VII => 722..=809,
            Self::VIII => 810..=905,
            Self::IX => 906..=1010,
        }
    }

    pub fn contains(self, id: pokemon::Id) -> bool {
        self.range().contains(&id.number())
    }

    pub fn of(id: pokemon::Id) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|generation| generation.contains(id))
    }

    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation {self:?}")
    }
}

impl FromStr for Generation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .ok()
            .and_then(|number| Self::ALL.get(number.checked_sub(1)?).copied())
            .ok_or_else(|| format!("invalid generation: {s} (expected 1 to 9)"))
    }
}
