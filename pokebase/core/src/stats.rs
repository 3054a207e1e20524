//! Final stat calculation from base stats, IVs, EVs, level, and nature.
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// The name used by the remote API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();

        Ok(match name.as_str() {
            "hp" => Self::Hp,
            "attack" | "atk" => Self::Attack,
            "defense" | "def" => Self::Defense,
            "special-attack" | "spattack" | "spa" => Self::SpecialAttack,
            "special-defense" | "spdefense" | "spd" => Self::SpecialDefense,
            "speed" | "spe" => Self::Speed,
            _ => Err(format!("invalid stat: {s}"))?,
        })
    }
}

/// One value per stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spread {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl Spread {
    pub fn uniform(value: u16) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u16) {
        let slot = match stat {
            Stat::Hp => &mut self.hp,
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpecialAttack => &mut self.special_attack,
            Stat::SpecialDefense => &mut self.special_defense,
            Stat::Speed => &mut self.speed,
        };

        *slot = value;
    }

    pub fn total(&self) -> u32 {
        Stat::ALL
            .into_iter()
            .map(|stat| u32::from(self.get(stat)))
            .sum()
    }

    fn map(&self, f: impl Fn(Stat, u16) -> u16) -> Self {
        let mut spread = Self::default();

        for stat in Stat::ALL {
            spread.set(stat, f(stat, self.get(stat)));
        }

        spread
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nature {
    #[default]
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub const ALL: [Self; 25] = [
        Self::Hardy,
        Self::Lonely,
        Self::Brave,
        Self::Adamant,
        Self::Naughty,
        Self::Bold,
        Self::Docile,
        Self::Relaxed,
        Self::Impish,
        Self::Lax,
        Self::Timid,
        Self::Hasty,
        Self::Serious,
        Self::Jolly,
        Self::Naive,
        Self::Modest,
        Self::Mild,
        Self::Quiet,
        Self::Bashful,
        Self::Rash,
        Self::Calm,
        Self::Gentle,
        Self::Sassy,
        Self::Careful,
        Self::Quirky,
    ];

    /// The stat raised and the stat lowered, if any.
    pub fn effect(self) -> Option<(Stat, Stat)> {
        use Stat::*;

        Some(match self {
            Self::Hardy | Self::Docile | Self::Serious | Self::Bashful | Self::Quirky => {
                return None;
            }
            Self::Lonely => (Attack, Defense),
            Self::Brave => (Attack, Speed),
            Self::Adamant => (Attack, SpecialAttack),
            Self::Naughty => (Attack, SpecialDefense),
            Self::Bold => (Defense, Attack),
            Self::Relaxed => (Defense, Speed),
            Self::Impish => (Defense, SpecialAttack),
            Self::Lax => (Defense, SpecialDefense),
            Self::Timid => (Speed, Attack),
            Self::Hasty => (Speed, Defense),
            Self::Jolly => (Speed, SpecialAttack),
            Self::Naive => (Speed, SpecialDefense),
            Self::Modest => (SpecialAttack, Attack),
            Self::Mild => (SpecialAttack, Defense),
            Self::Quiet => (SpecialAttack, Speed),
            Self::Rash => (SpecialAttack, SpecialDefense),
            Self::Calm => (SpecialDefense, Attack),
            Self::Gentle => (SpecialDefense, Defense),
            Self::Sassy => (SpecialDefense, Speed),
            Self::Careful => (SpecialDefense, SpecialAttack),
        })
    }

    /// Applies the nature to a stat value, in tenths to avoid rounding errors.
    fn apply(self, stat: Stat, value: u16) -> u16 {
        let tenths = match self.effect() {
            Some((raised, _)) if raised == stat => 11,
            Some((_, lowered)) if lowered == stat => 9,
            _ => 10,
        };

        (u32::from(value) * tenths / 10) as u16
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Nature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|nature| nature.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid nature: {s}"))
    }
}

pub const MAX_LEVEL: u8 = 100;
pub const MAX_IV: u16 = 31;
pub const MAX_EV: u16 = 252;
pub const MAX_BASE: u16 = 255;

/// Computes final stats. Out-of-range inputs are clamped.
pub fn calculate(base: Spread, ivs: Spread, evs: Spread, level: u8, nature: Nature) -> Spread {
    let level = u32::from(level.clamp(1, MAX_LEVEL));

    base.map(|stat, base| {
        let base = u32::from(base.clamp(1, MAX_BASE));
        let iv = u32::from(ivs.get(stat).min(MAX_IV));
        let ev = u32::from(evs.get(stat).min(MAX_EV));

        let core = (2 * base + iv + ev / 4) * level / 100;

        if stat == Stat::Hp {
            (core + level + 10) as u16
        } else {
            nature.apply(stat, (core + 5) as u16)
        }
    })
}
