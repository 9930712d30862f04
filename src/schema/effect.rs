use serde::{Deserialize, Serialize};

/// The mechanical payload attached to a choice.
///
/// Serialized internally tagged (`{"type": "gain_qi", "value": 120}`), which
/// is the shape the game client dispatches on. This enum and its parameters
/// are the stable downstream contract; renaming a variant or a field is a
/// breaking change for every shipped table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// No mechanical consequence.
    Nothing,
    /// Flat qi gain.
    GainQi { value: u64 },
    /// Flat qi loss.
    LoseQi { value: u64 },
    /// Client-side coin flip: win or lose `value` qi.
    Gamble { value: u64 },
    /// Grants a random item; the client picks which. `value` is always null.
    GrantItem { value: Option<u64> },
    /// Temporary multiplier on idle accumulation.
    GainAutoTemp { value: f64, duration: u32 },
    /// Temporary multiplier on tap income.
    GainTapRatioTemp { value: f64, duration: u32 },
    /// Gambled idle-accumulation buff: the client may invert it.
    GambleAuto { value: f64, duration: u32 },
    /// Gambled tap buff.
    GambleTap { value: f64, duration: u32 },
}

impl Effect {
    /// The wire tag, matching the serialized `type` field.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Effect::Nothing => "nothing",
            Effect::GainQi { .. } => "gain_qi",
            Effect::LoseQi { .. } => "lose_qi",
            Effect::Gamble { .. } => "gamble",
            Effect::GrantItem { .. } => "grant_item",
            Effect::GainAutoTemp { .. } => "gain_auto_temp",
            Effect::GainTapRatioTemp { .. } => "gain_tap_ratio_temp",
            Effect::GambleAuto { .. } => "gamble_auto",
            Effect::GambleTap { .. } => "gamble_tap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nothing_serializes_bare() {
        let v = serde_json::to_value(Effect::Nothing).unwrap();
        assert_eq!(v, json!({"type": "nothing"}));
    }

    #[test]
    fn gain_qi_shape() {
        let v = serde_json::to_value(Effect::GainQi { value: 120 }).unwrap();
        assert_eq!(v, json!({"type": "gain_qi", "value": 120}));
    }

    #[test]
    fn grant_item_carries_null_value() {
        let v = serde_json::to_value(Effect::GrantItem { value: None }).unwrap();
        assert_eq!(v, json!({"type": "grant_item", "value": null}));
    }

    #[test]
    fn buff_shapes_carry_duration() {
        let v = serde_json::to_value(Effect::GambleAuto {
            value: 2.0,
            duration: 60,
        })
        .unwrap();
        assert_eq!(v, json!({"type": "gamble_auto", "value": 2.0, "duration": 60}));

        let v = serde_json::to_value(Effect::GainTapRatioTemp {
            value: 0.5,
            duration: 60,
        })
        .unwrap();
        assert_eq!(
            v,
            json!({"type": "gain_tap_ratio_temp", "value": 0.5, "duration": 60})
        );
    }

    #[test]
    fn round_trip_all_variants() {
        let effects = vec![
            Effect::Nothing,
            Effect::GainQi { value: 9_800 },
            Effect::LoseQi { value: 500 },
            Effect::Gamble { value: 1_200_000 },
            Effect::GrantItem { value: None },
            Effect::GainAutoTemp {
                value: 0.5,
                duration: 60,
            },
            Effect::GainTapRatioTemp {
                value: 0.5,
                duration: 60,
            },
            Effect::GambleAuto {
                value: 3.0,
                duration: 120,
            },
            Effect::GambleTap {
                value: 3.0,
                duration: 30,
            },
        ];
        for effect in effects {
            let text = serde_json::to_string(&effect).unwrap();
            let back: Effect = serde_json::from_str(&text).unwrap();
            assert_eq!(back, effect);
            assert!(text.contains(effect.type_tag()));
        }
    }
}
