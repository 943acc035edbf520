use std::fmt;

/// Rank given to rarity text that matches no known tier. Sorts after every
/// known rarity in ascending order.
pub const UNKNOWN_RARITY_RANK: u8 = 99;

/// Badge classes applied when rarity text matches no known tier.
pub const FALLBACK_BADGE_CLASS: &str = "bg-gray-100 text-gray-700";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    CommonMundane,
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
    Artifact,
}

impl Rarity {
    pub fn all() -> &'static [Rarity] {
        use Rarity::*;
        &[
            CommonMundane,
            Common,
            Uncommon,
            Rare,
            VeryRare,
            Legendary,
            Artifact,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::CommonMundane => "Common (mundane)",
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::VeryRare => "Very Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Artifact => "Artifact",
        }
    }

    /// Position in the canonical rarity ladder, mundane first.
    pub fn rank(&self) -> u8 {
        match self {
            Rarity::CommonMundane => 0,
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 3,
            Rarity::VeryRare => 4,
            Rarity::Legendary => 5,
            Rarity::Artifact => 6,
        }
    }

    /// Tailwind badge classes for the rarity pill in rendered rows.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Rarity::CommonMundane => "bg-gray-200 text-gray-700",
            Rarity::Common => "bg-gray-300 text-gray-800",
            Rarity::Uncommon => "bg-green-100 text-green-800",
            Rarity::Rare => "bg-blue-100 text-blue-800",
            Rarity::VeryRare => "bg-purple-100 text-purple-800",
            Rarity::Legendary => "bg-amber-100 text-amber-800",
            Rarity::Artifact => "bg-red-100 text-red-800",
        }
    }

    pub fn from_label(label: &str) -> Option<Rarity> {
        Rarity::all().iter().copied().find(|r| r.label() == label)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rank for arbitrary rarity text. Unrecognized values sink to
/// [`UNKNOWN_RARITY_RANK`].
pub fn rank_of(text: &str) -> u8 {
    Rarity::from_label(text).map_or(UNKNOWN_RARITY_RANK, |r| r.rank())
}

/// Badge classes for arbitrary rarity text, falling back to the neutral
/// style for unrecognized values.
pub fn badge_class_of(text: &str) -> &'static str {
    Rarity::from_label(text).map_or(FALLBACK_BADGE_CLASS, |r| r.badge_class())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_strictly_increasing() {
        let ranks: Vec<u8> = Rarity::all().iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn mundane_sits_below_common() {
        assert!(rank_of("Common (mundane)") < rank_of("Common"));
    }

    #[test]
    fn unknown_text_sinks_below_known_tiers() {
        assert_eq!(rank_of("Mythic"), UNKNOWN_RARITY_RANK);
        assert!(rank_of("Artifact") < rank_of("Mythic"));
    }

    #[test]
    fn labels_round_trip() {
        for rarity in Rarity::all() {
            assert_eq!(Rarity::from_label(rarity.label()), Some(*rarity));
        }
    }

    #[test]
    fn unknown_text_gets_fallback_badge() {
        assert_eq!(badge_class_of("Mythic"), FALLBACK_BADGE_CLASS);
        assert_eq!(badge_class_of(""), FALLBACK_BADGE_CLASS);
        assert_eq!(badge_class_of("Legendary"), "bg-amber-100 text-amber-800");
    }
}
