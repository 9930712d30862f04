use serde::{Deserialize, Serialize};

/// The 16 progression stages, in ascending order.
pub const STAGE_NAMES: [&str; 16] = [
    "Foundation",
    "Aura Light",
    "Embryonic Breath",
    "Fasting",
    "Golden Core",
    "Nascent Soul",
    "Soul Emergence",
    "Divided Spirit",
    "Unity",
    "Great Ascension",
    "Tribulation",
    "Earth Immortal",
    "Heaven Immortal",
    "Golden Immortal",
    "Grand Luo Immortal",
    "Mystic Heaven Immortal",
];

/// Index of the final stage.
pub const LAST_STAGE: u8 = 15;

/// A progression tier: an index into the fixed stage ladder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Tier(u8);

impl Tier {
    /// Construct a tier from a stage index. Returns `None` past the ladder.
    pub fn new(index: u8) -> Option<Tier> {
        (index <= LAST_STAGE).then_some(Tier(index))
    }

    /// Construct a tier, clamping out-of-range indices to the last stage.
    pub fn clamped(index: u8) -> Tier {
        Tier(index.min(LAST_STAGE))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// All tiers in ascending order.
    pub fn all() -> impl Iterator<Item = Tier> {
        (0..=LAST_STAGE).map(Tier)
    }

    pub fn stage_name(self) -> &'static str {
        STAGE_NAMES[self.0 as usize]
    }

    /// Look up a tier by its stage name.
    pub fn from_stage_name(name: &str) -> Option<Tier> {
        STAGE_NAMES
            .iter()
            .position(|s| *s == name)
            .map(|i| Tier(i as u8))
    }

    pub fn band(self) -> TierBand {
        match self.0 {
            0..=3 => TierBand::Low,
            4..=9 => TierBand::Mid,
            _ => TierBand::High,
        }
    }

    /// The highest stage an event rolled at this tier stays available for:
    /// two stages up, capped at the end of the ladder.
    pub fn max_stage(self) -> Tier {
        Tier::clamped(self.0 + 2)
    }

    pub fn rarity(self) -> Rarity {
        match self.0 {
            0..=4 => Rarity::Common,
            5..=9 => Rarity::Rare,
            _ => Rarity::Epic,
        }
    }
}

/// Coarse bucket over the stage ladder. Vocabulary, template weights, and
/// the reward curve are all selected per band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierBand {
    Low,
    Mid,
    High,
}

impl TierBand {
    /// Short label used in tool output.
    pub fn label(self) -> &'static str {
        match self {
            TierBand::Low => "low",
            TierBand::Mid => "mid",
            TierBand::High => "high",
        }
    }
}

/// Display rarity of an event, derived from the tier it was rolled at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
}
