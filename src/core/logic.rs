//! Choice intents and the mapping from intent to mechanical effect.

use serde::{Deserialize, Serialize};

use crate::schema::effect::Effect;
use crate::schema::stage::Tier;

/// Abstract label for what a choice is *meant* to do, decoupled from its
/// displayed wording. Templates carry a tag per choice slot; the tag alone
/// decides the effect payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicTag {
    Nothing,
    GainStandard,
    GambleQi,
    PayQi,
    GrantItem,
    GainAutoSafe,
    GainTapSafe,
    GambleBuffAuto,
    GambleBuffTap,
}

/// Semantic category of a choice-B intent, used to pick wording that agrees
/// with the mechanics: a "walk away" line must never sit on a gamble effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseTone {
    /// Decline the encounter entirely.
    Leave,
    /// Take the cautious, guaranteed-but-smaller option.
    PlaySafe,
    /// Resist rather than pay up.
    FightBack,
}

impl LogicTag {
    /// The wording category when this tag sits in the B slot. Tags that only
    /// ever appear in the A slot have no tone; the composer falls back to a
    /// neutral phrase for them rather than borrowing from the wrong pool.
    pub fn response_tone(self) -> Option<ResponseTone> {
        match self {
            LogicTag::Nothing => Some(ResponseTone::Leave),
            LogicTag::GainAutoSafe | LogicTag::GainTapSafe => Some(ResponseTone::PlaySafe),
            LogicTag::GambleQi => Some(ResponseTone::FightBack),
            _ => None,
        }
    }

    /// Optional short marker appended to choice text when a profile asks for
    /// it, hinting at the mechanics behind the wording.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            LogicTag::GambleQi => Some("(gamble)"),
            LogicTag::PayQi => Some("(tribute)"),
            LogicTag::GrantItem => Some("(treasure)"),
            LogicTag::GainAutoSafe | LogicTag::GainTapSafe => Some("(steady)"),
            LogicTag::GambleBuffAuto | LogicTag::GambleBuffTap => Some("(surge)"),
            LogicTag::Nothing | LogicTag::GainStandard => None,
        }
    }
}

/// Build the concrete effect for a choice.
///
/// Pure and exhaustive: every tag maps to exactly one payload shape, with
/// the buff tags scaling their multiplier and duration past the Tribulation
/// threshold (tier 10).
pub fn build_effect(tag: LogicTag, reward: u64, tier: Tier) -> Effect {
    let late = tier.index() >= 10;
    match tag {
        LogicTag::Nothing => Effect::Nothing,
        LogicTag::GainStandard => Effect::GainQi { value: reward },
        LogicTag::GambleQi => Effect::Gamble { value: reward },
        LogicTag::PayQi => Effect::LoseQi { value: reward / 2 },
        LogicTag::GrantItem => Effect::GrantItem { value: None },
        LogicTag::GainAutoSafe => Effect::GainAutoTemp {
            value: 0.5,
            duration: 60,
        },
        LogicTag::GainTapSafe => Effect::GainTapRatioTemp {
            value: 0.5,
            duration: 60,
        },
        LogicTag::GambleBuffAuto => Effect::GambleAuto {
            value: if late { 3.0 } else { 2.0 },
            duration: if late { 120 } else { 60 },
        },
        LogicTag::GambleBuffTap => Effect::GambleTap {
            value: 3.0,
            duration: if late { 60 } else { 30 },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(i: u8) -> Tier {
        Tier::new(i).unwrap()
    }

    #[test]
    fn pay_qi_halves_reward() {
        let effect = build_effect(LogicTag::PayQi, 1000, tier(2));
        assert_eq!(effect, Effect::LoseQi { value: 500 });
        // Integer division, truncating.
        let effect = build_effect(LogicTag::PayQi, 1001, tier(2));
        assert_eq!(effect, Effect::LoseQi { value: 500 });
    }

    #[test]
    fn gamble_buff_tap_scales_duration_only() {
        assert_eq!(
            build_effect(LogicTag::GambleBuffTap, 0, tier(12)),
            Effect::GambleTap {
                value: 3.0,
                duration: 60
            }
        );
        assert_eq!(
            build_effect(LogicTag::GambleBuffTap, 0, tier(9)),
            Effect::GambleTap {
                value: 3.0,
                duration: 30
            }
        );
    }

    #[test]
    fn gamble_buff_auto_scales_both() {
        assert_eq!(
            build_effect(LogicTag::GambleBuffAuto, 0, tier(9)),
            Effect::GambleAuto {
                value: 2.0,
                duration: 60
            }
        );
        assert_eq!(
            build_effect(LogicTag::GambleBuffAuto, 0, tier(10)),
            Effect::GambleAuto {
                value: 3.0,
                duration: 120
            }
        );
    }

    #[test]
    fn safe_buffs_are_tier_independent() {
        for i in [0, 7, 15] {
            assert_eq!(
                build_effect(LogicTag::GainAutoSafe, 999, tier(i)),
                Effect::GainAutoTemp {
                    value: 0.5,
                    duration: 60
                }
            );
            assert_eq!(
                build_effect(LogicTag::GainTapSafe, 999, tier(i)),
                Effect::GainTapRatioTemp {
                    value: 0.5,
                    duration: 60
                }
            );
        }
    }

    #[test]
    fn grant_item_has_null_value() {
        assert_eq!(
            build_effect(LogicTag::GrantItem, 500, tier(0)),
            Effect::GrantItem { value: None }
        );
    }

    #[test]
    fn tones_cover_only_b_side_tags() {
        assert_eq!(LogicTag::Nothing.response_tone(), Some(ResponseTone::Leave));
        assert_eq!(
            LogicTag::GainAutoSafe.response_tone(),
            Some(ResponseTone::PlaySafe)
        );
        assert_eq!(
            LogicTag::GainTapSafe.response_tone(),
            Some(ResponseTone::PlaySafe)
        );
        assert_eq!(
            LogicTag::GambleQi.response_tone(),
            Some(ResponseTone::FightBack)
        );
        assert_eq!(LogicTag::GainStandard.response_tone(), None);
        assert_eq!(LogicTag::GrantItem.response_tone(), None);
    }

    #[test]
    fn markers() {
        assert_eq!(LogicTag::GambleQi.marker(), Some("(gamble)"));
        assert_eq!(LogicTag::GainStandard.marker(), None);
        assert_eq!(LogicTag::Nothing.marker(), None);
    }
}
