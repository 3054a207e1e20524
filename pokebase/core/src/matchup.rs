use crate::pokemon::Type;

use std::fmt;

/// How much damage an attack deals compared to a neutral hit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Multiplier(f32);

impl Multiplier {
    pub const IMMUNE: Self = Self(0.0);
    pub const NEUTRAL: Self = Self(1.0);

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_super_effective(self) -> bool {
        self.0 > 1.0
    }

    pub fn is_resisted(self) -> bool {
        self.0 > 0.0 && self.0 < 1.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.0 {
            value if value == 0.0 => "No Effect",
            value if value == 0.25 => "Not Very Effective (¼×)",
            value if value == 0.5 => "Not Very Effective (½×)",
            value if value == 1.0 => "Normal Damage (1×)",
            value if value == 2.0 => "Super Effective (2×)",
            value if value == 4.0 => "Super Effective (4×)",
            value => return write!(f, "{value}× Damage"),
        };

        f.write_str(label)
    }
}

/// The multiplier of an attack of one type against a single defending type.
pub fn effectiveness(attacking: Type, defending: Type) -> Multiplier {
    strengths(attacking)
        .iter()
        .find(|(type_, _)| *type_ == defending)
        .map(|(_, multiplier)| Multiplier(*multiplier))
        .unwrap_or(Multiplier::NEUTRAL)
}

/// The multiplier of an attack against a Pokémon with the given types.
pub fn against(attacking: Type, defending: &[Type]) -> Multiplier {
    Multiplier(
        defending
            .iter()
            .map(|type_| effectiveness(attacking, *type_).0)
            .product(),
    )
}

/// How every attacking type fares against the given types, strongest first.
pub fn defensive_chart(defending: &[Type]) -> Vec<(Type, Multiplier)> {
    sorted(
        Type::ALL
            .into_iter()
            .map(|attacking| (attacking, against(attacking, defending)))
            .collect(),
    )
}

/// How an attacking type fares against every defending type, strongest first.
pub fn offensive_chart(attacking: Type) -> Vec<(Type, Multiplier)> {
    sorted(
        Type::ALL
            .into_iter()
            .map(|defending| (defending, effectiveness(attacking, defending)))
            .collect(),
    )
}

fn sorted(mut chart: Vec<(Type, Multiplier)>) -> Vec<(Type, Multiplier)> {
    chart.sort_by(|(_, a), (_, b)| b.0.total_cmp(&a.0));
    chart
}

fn strengths(attacking: Type) -> &'static [(Type, f32)] {
    use Type::*;

    match attacking {
        Normal => &[(Rock, 0.5), (Ghost, 0.0), (Steel, 0.5)],
        Fire => &[
            (Fire, 0.5),
            (Water, 0.5),
            (Grass, 2.0),
            (Ice, 2.0),
            (Bug, 2.0),
            (Rock, 0.5),
            (Dragon, 0.5),
            (Steel, 2.0),
        ],
        Water => &[
            (Fire, 2.0),
            (Water, 0.5),
            (Grass, 0.5),
            (Ground, 2.0),
            (Rock, 2.0),
            (Dragon, 0.5),
        ],
        Electric => &[
            (Water, 2.0),
            (Electric, 0.5),
            (Grass, 0.5),
            (Ground, 0.0),
            (Flying, 2.0),
            (Dragon, 0.5),
        ],
        Grass => &[
            (Fire, 0.5),
            (Water, 2.0),
            (Grass, 0.5),
            (Poison, 0.5),
            (Ground, 2.0),
            (Flying, 0.5),
            (Bug, 0.5),
            (Rock, 2.0),
            (Dragon, 0.5),
            (Steel, 0.5),
        ],
        Ice => &[
            (Fire, 0.5),
            (Water, 0.5),
            (Grass, 2.0),
            (Ice, 0.5),
            (Ground, 2.0),
            (Flying, 2.0),
            (Dragon, 2.0),
            (Steel, 0.5),
        ],
        Fighting => &[
            (Normal, 2.0),
            (Ice, 2.0),
            (Poison, 0.5),
            (Flying, 0.5),
            (Psychic, 0.5),
            (Bug, 0.5),
            (Rock, 2.0),
            (Ghost, 0.0),
            (Dark, 2.0),
            (Steel, 2.0),
            (Fairy, 0.5),
        ],
        Poison => &[
            (Grass, 2.0),
            (Poison, 0.5),
            (Ground, 0.5),
            (Rock, 0.5),
            (Ghost, 0.5),
            (Steel, 0.0),
            (Fairy, 2.0),
        ],
        Ground => &[
            (Fire, 2.0),
            (Electric, 2.0),
            (Grass, 0.5),
            (Poison, 2.0),
            (Flying, 0.0),
            (Bug, 0.5),
            (Rock, 2.0),
            (Steel, 2.0),
        ],
        Flying => &[
            (Electric, 0.5),
            (Grass, 2.0),
            (Fighting, 2.0),
            (Bug, 2.0),
            (Rock, 0.5),
            (Steel, 0.5),
        ],
        Psychic => &[
            (Fighting, 2.0),
            (Poison, 2.0),
            (Psychic, 0.5),
            (Dark, 0.0),
            (Steel, 0.5),
        ],
        Bug => &[
            (Fire, 0.5),
            (Grass, 2.0),
            (Fighting, 0.5),
            (Poison, 0.5),
            (Flying, 0.5),
            (Psychic, 2.0),
            (Ghost, 0.5),
            (Dark, 2.0),
            (Steel, 0.5),
            (Fairy, 0.5),
        ],
        Rock => &[
            (Fire, 2.0),
            (Ice, 2.0),
            (Fighting, 0.5),
            (Ground, 0.5),
            (Flying, 2.0),
            (Bug, 2.0),
            (Steel, 0.5),
        ],
        Ghost => &[(Normal, 0.0), (Psychic, 2.0), (Ghost, 2.0), (Dark, 0.5)],
        Dragon => &[(Dragon, 2.0), (Steel, 0.5), (Fairy, 0.0)],
        Dark => &[
            (Fighting, 0.5),
            (Psychic, 2.0),
            (Ghost, 2.0),
            (Dark, 0.5),
            (Fairy, 0.5),
        ],
        Steel => &[
            (Fire, 0.5),
            (Water, 0.5),
            (Electric, 0.5),
            (Ice, 2.0),
            (Rock, 2.0),
            (Steel, 0.5),
            (Fairy, 2.0),
        ],
        Fairy => &[
            (Fire, 0.5),
            (Poison, 0.5),
            (Fighting, 2.0),
            (Dragon, 2.0),
            (Dark, 2.0),
            (Steel, 0.5),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_types_multiply() {
        assert_eq!(
            against(Type::Electric, &[Type::Water, Type::Flying]).value(),
            4.0
        );
        assert_eq!(
            against(Type::Fire, &[Type::Water, Type::Dragon]).value(),
            0.25
        );
        assert_eq!(
            against(Type::Ground, &[Type::Electric, Type::Flying]),
            Multiplier::IMMUNE
        );
    }

    #[test]
    fn unlisted_matchups_are_neutral() {
        assert_eq!(effectiveness(Type::Normal, Type::Fire), Multiplier::NEUTRAL);
        assert_eq!(effectiveness(Type::Flying, Type::Ice), Multiplier::NEUTRAL);
    }

    #[test]
    fn defensive_chart_lists_weaknesses_first() {
        let chart = defensive_chart(&[Type::Grass, Type::Poison]);

        assert_eq!(chart.len(), 18);
        assert!(chart[0].1.is_super_effective());
        assert_eq!(chart.last().map(|(_, multiplier)| multiplier.value()), Some(0.25));

        let weaknesses: Vec<Type> = chart
            .iter()
            .filter(|(_, multiplier)| multiplier.is_super_effective())
            .map(|(type_, _)| *type_)
            .collect();

        assert_eq!(
            weaknesses,
            [Type::Fire, Type::Ice, Type::Flying, Type::Psychic]
        );
    }

    #[test]
    fn offensive_chart_ends_with_immunities() {
        let chart = offensive_chart(Type::Dragon);

        assert_eq!(chart[0], (Type::Dragon, Multiplier(2.0)));
        assert_eq!(chart[17], (Type::Fairy, Multiplier::IMMUNE));
    }

    #[test]
    fn multipliers_describe_themselves() {
        assert_eq!(Multiplier(4.0).to_string(), "Super Effective (4×)");
        assert_eq!(Multiplier(0.25).to_string(), "Not Very Effective (¼×)");
        assert_eq!(Multiplier::IMMUNE.to_string(), "No Effect");
    }
}
