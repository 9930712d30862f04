//! Named generation presets.
//!
//! Each preset bundles the knobs that used to vary between shipped table
//! revisions: id prefix, jitter band, template weights, plan, and choice
//! markers. Picking a profile reproduces a revision's tuning without
//! forking any code.

use crate::core::forge::GenerationPlan;
use crate::core::reward::JitterBounds;
use crate::core::template::WeightProfile;

/// A complete generation preset.
#[derive(Debug, Clone)]
pub struct ForgeProfile {
    pub name: &'static str,
    pub id_prefix: &'static str,
    pub jitter: JitterBounds,
    pub weights: WeightProfile,
    pub plan: GenerationPlan,
    pub markers: bool,
}

/// The canonical tuning: pyramid quotas, ±20% jitter, clean choice text.
pub fn classic() -> ForgeProfile {
    ForgeProfile {
        name: "classic",
        id_prefix: "evt_",
        jitter: JitterBounds::classic(),
        weights: WeightProfile::classic(),
        plan: GenerationPlan::classic(),
        markers: false,
    }
}

/// Wider ±25% reward swings, with mechanic markers on the choice labels.
pub fn high_variance() -> ForgeProfile {
    ForgeProfile {
        name: "high_variance",
        id_prefix: "evt_hv_",
        jitter: JitterBounds::wide(),
        weights: WeightProfile::classic(),
        plan: GenerationPlan::classic(),
        markers: true,
    }
}

/// A smaller table with tiers drawn at random instead of swept in order.
pub fn wandering() -> ForgeProfile {
    ForgeProfile {
        name: "wandering",
        id_prefix: "evt_gen_",
        jitter: JitterBounds::classic(),
        weights: WeightProfile::classic(),
        plan: GenerationPlan::Spread { total: 600 },
        markers: false,
    }
}

/// Look up a preset by name.
pub fn by_name(name: &str) -> Option<ForgeProfile> {
    match name {
        "classic" => Some(classic()),
        "high_variance" => Some(high_variance()),
        "wandering" => Some(wandering()),
        _ => None,
    }
}

/// Names of every preset, for tool help text.
pub fn names() -> [&'static str; 3] {
    ["classic", "high_variance", "wandering"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_finds_every_listed_profile() {
        for name in names() {
            let profile = by_name(name).unwrap();
            assert_eq!(profile.name, name);
        }
        assert!(by_name("nonexistent").is_none());
    }

    #[test]
    fn profiles_differ_where_it_matters() {
        assert_eq!(classic().jitter, JitterBounds::classic());
        assert_eq!(high_variance().jitter, JitterBounds::wide());
        assert!(high_variance().markers);
        assert_eq!(wandering().plan.total(), 600);
        assert_eq!(classic().plan.total(), 2000);
    }

    #[test]
    fn profile_prefixes_are_distinct() {
        let prefixes: Vec<&str> = names()
            .iter()
            .map(|n| by_name(n).unwrap().id_prefix)
            .collect();
        for (i, a) in prefixes.iter().enumerate() {
            for b in &prefixes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
