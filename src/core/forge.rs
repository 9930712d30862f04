//! The event forge: orchestrates one full table generation pass.
//!
//! Wires together the vocabulary bank, template catalog, reward tuning, and
//! composer, and assembles finished records with sequential ids.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::bank::{BankError, VocabularyBank};
use crate::core::compose::{compose, ComposeError};
use crate::core::logic::{build_effect, LogicTag};
use crate::core::reward::{JitterBounds, RewardTuning};
use crate::core::template::{
    classic_templates, CatalogError, TemplateCatalog, WeightProfile,
};
use crate::profiles::ForgeProfile;
use crate::schema::event::{Choice, ChoiceId, EventRecord};
use crate::schema::stage::{Tier, LAST_STAGE};

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("bank error: {0}")]
    Bank(#[from] BankError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("compose error: {0}")]
    Compose(#[from] ComposeError),
    #[error("jitter bounds {min}..{max} are not usable")]
    Jitter { min: f64, max: f64 },
}

/// How many records to roll, and at which tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationPlan {
    /// Sweep the ladder in order with a per-bucket quota: tiers 0-3, 4-7,
    /// 8-11, 12-15. Later stages hold players longer, so they get more
    /// entries.
    Pyramid { quotas: [u32; 4] },
    /// Roll a uniformly random tier for every record.
    Spread { total: u32 },
}

impl GenerationPlan {
    /// The canonical pyramid: 50/100/150/200 per tier across the four
    /// buckets, 2000 records in all.
    pub fn classic() -> GenerationPlan {
        GenerationPlan::Pyramid {
            quotas: [50, 100, 150, 200],
        }
    }

    /// Total records this plan produces.
    pub fn total(&self) -> u32 {
        match self {
            GenerationPlan::Pyramid { quotas } => quotas.iter().map(|q| q * 4).sum(),
            GenerationPlan::Spread { total } => *total,
        }
    }

    /// Records to roll at `tier` under this plan. Zero for `Spread`, which
    /// does not assign quotas per tier.
    pub fn quota(&self, tier: Tier) -> u32 {
        match self {
            GenerationPlan::Pyramid { quotas } => match tier.index() {
                0..=3 => quotas[0],
                4..=7 => quotas[1],
                8..=11 => quotas[2],
                _ => quotas[3],
            },
            GenerationPlan::Spread { .. } => 0,
        }
    }
}

/// The table generator. Built via `EventForge::builder()`.
pub struct EventForge {
    bank: VocabularyBank,
    catalog: TemplateCatalog,
    tuning: RewardTuning,
    plan: GenerationPlan,
    id_prefix: String,
    id_pad: usize,
    markers: bool,
    rng: StdRng,
    next_id: u64,
}

/// Builder for an `EventForge`. Unset pieces fall back to the classic
/// profile's defaults; `profile()` applies a whole preset at once.
pub struct ForgeBuilder {
    bank: Option<VocabularyBank>,
    catalog: Option<TemplateCatalog>,
    weights: Option<WeightProfile>,
    tuning: RewardTuning,
    plan: GenerationPlan,
    id_prefix: String,
    id_pad: usize,
    markers: bool,
    seed: Option<u64>,
}

impl EventForge {
    pub fn builder() -> ForgeBuilder {
        ForgeBuilder {
            bank: None,
            catalog: None,
            weights: None,
            tuning: RewardTuning::default(),
            plan: GenerationPlan::classic(),
            id_prefix: "evt_".to_string(),
            id_pad: 5,
            markers: false,
            seed: None,
        }
    }

    pub fn plan(&self) -> GenerationPlan {
        self.plan
    }

    pub fn bank(&self) -> &VocabularyBank {
        &self.bank
    }

    /// Run the whole plan and return the finished table.
    pub fn generate(&mut self) -> Result<Vec<EventRecord>, ForgeError> {
        let plan = self.plan;
        let mut records = Vec::with_capacity(plan.total() as usize);
        match plan {
            GenerationPlan::Pyramid { .. } => {
                for tier in Tier::all() {
                    for _ in 0..plan.quota(tier) {
                        records.push(self.generate_one(tier)?);
                    }
                }
            }
            GenerationPlan::Spread { total } => {
                for _ in 0..total {
                    let tier = Tier::clamped(self.rng.gen_range(0..=LAST_STAGE));
                    records.push(self.generate_one(tier)?);
                }
            }
        }
        Ok(records)
    }

    /// Roll a single record at `tier`.
    pub fn generate_one(&mut self, tier: Tier) -> Result<EventRecord, ForgeError> {
        let band = tier.band();
        let template = self.catalog.resolve(band, &mut self.rng);
        let text = compose(&self.bank, band, &template, &mut self.rng)?;
        let reward = self.tuning.roll(tier, &mut self.rng);

        let effect_a = build_effect(template.choice_a, reward, tier);
        let effect_b = build_effect(template.choice_b, reward, tier);

        let text_a = self.decorate(text.choice_a, template.choice_a);
        let text_b = self.decorate(text.choice_b, template.choice_b);

        let id = format!(
            "{}{:0pad$}",
            self.id_prefix,
            self.next_id,
            pad = self.id_pad
        );
        self.next_id += 1;

        Ok(EventRecord {
            id,
            title: text.title,
            desc: text.desc,
            rarity: tier.rarity(),
            min_stage: tier.stage_name().to_string(),
            max_stage: tier.max_stage().stage_name().to_string(),
            choices: vec![
                Choice {
                    id: ChoiceId::A,
                    text: text_a,
                    effect: effect_a,
                },
                Choice {
                    id: ChoiceId::B,
                    text: text_b,
                    effect: effect_b,
                },
            ],
        })
    }

    fn decorate(&self, text: String, tag: LogicTag) -> String {
        if !self.markers {
            return text;
        }
        match tag.marker() {
            Some(marker) => format!("{} {}", text, marker),
            None => text,
        }
    }
}

impl ForgeBuilder {
    pub fn bank(mut self, bank: VocabularyBank) -> Self {
        self.bank = Some(bank);
        self
    }

    pub fn catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn weights(mut self, weights: WeightProfile) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn tuning(mut self, tuning: RewardTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn jitter(mut self, jitter: JitterBounds) -> Self {
        self.tuning.jitter = jitter;
        self
    }

    pub fn plan(mut self, plan: GenerationPlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn id_prefix(mut self, prefix: &str) -> Self {
        self.id_prefix = prefix.to_string();
        self
    }

    pub fn id_pad(mut self, pad: usize) -> Self {
        self.id_pad = pad;
        self
    }

    pub fn markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Apply a named preset: id prefix, jitter, weights, plan, markers.
    /// Setters called afterwards still override individual pieces.
    pub fn profile(mut self, profile: &ForgeProfile) -> Self {
        self.id_prefix = profile.id_prefix.to_string();
        self.tuning.jitter = profile.jitter;
        self.weights = Some(profile.weights.clone());
        self.plan = profile.plan;
        self.markers = profile.markers;
        self
    }

    pub fn build(self) -> Result<EventForge, ForgeError> {
        let bank = self.bank.unwrap_or_else(VocabularyBank::classic);
        bank.validate()?;

        let jitter = self.tuning.jitter;
        if !jitter.is_valid() {
            return Err(ForgeError::Jitter {
                min: jitter.min,
                max: jitter.max,
            });
        }

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => TemplateCatalog::new(
                classic_templates(),
                self.weights.unwrap_or_else(WeightProfile::classic),
            )?,
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(EventForge {
            bank,
            catalog,
            tuning: self.tuning,
            plan: self.plan,
            id_prefix: self.id_prefix,
            id_pad: self.id_pad,
            markers: self.markers,
            rng,
            next_id: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::effect::Effect;

    #[test]
    fn classic_plan_totals() {
        assert_eq!(GenerationPlan::classic().total(), 2000);
        assert_eq!(GenerationPlan::Spread { total: 600 }.total(), 600);
    }

    #[test]
    fn pyramid_quota_buckets() {
        let plan = GenerationPlan::classic();
        assert_eq!(plan.quota(Tier::new(3).unwrap()), 50);
        assert_eq!(plan.quota(Tier::new(4).unwrap()), 100);
        assert_eq!(plan.quota(Tier::new(8).unwrap()), 150);
        assert_eq!(plan.quota(Tier::new(12).unwrap()), 200);
    }

    #[test]
    fn ids_are_prefixed_and_zero_padded() {
        let mut forge = EventForge::builder()
            .seed(1)
            .id_prefix("evt_test_")
            .build()
            .unwrap();
        let first = forge.generate_one(Tier::new(0).unwrap()).unwrap();
        let second = forge.generate_one(Tier::new(0).unwrap()).unwrap();
        assert_eq!(first.id, "evt_test_00001");
        assert_eq!(second.id, "evt_test_00002");
    }

    #[test]
    fn record_stage_fields_follow_tier() {
        let mut forge = EventForge::builder().seed(2).build().unwrap();
        let record = forge.generate_one(Tier::new(13).unwrap()).unwrap();
        assert_eq!(record.min_stage, "Golden Immortal");
        assert_eq!(record.max_stage, "Mystic Heaven Immortal");
        assert_eq!(record.choices.len(), 2);
        assert_eq!(record.choices[0].id, ChoiceId::A);
        assert_eq!(record.choices[1].id, ChoiceId::B);
    }

    #[test]
    fn same_seed_same_table() {
        let run = |seed: u64| {
            let mut forge = EventForge::builder()
                .seed(seed)
                .plan(GenerationPlan::Spread { total: 40 })
                .build()
                .unwrap();
            forge.generate().unwrap()
        };
        assert_eq!(run(77), run(77));
        assert_ne!(run(77), run(78));
    }

    #[test]
    fn markers_decorate_only_tagged_choices() {
        let mut forge = EventForge::builder()
            .seed(3)
            .markers(true)
            .build()
            .unwrap();
        for _ in 0..100 {
            let record = forge.generate_one(Tier::new(12).unwrap()).unwrap();
            for choice in &record.choices {
                match &choice.effect {
                    Effect::Gamble { .. } => assert!(choice.text.ends_with("(gamble)")),
                    Effect::LoseQi { .. } => assert!(choice.text.ends_with("(tribute)")),
                    Effect::GrantItem { .. } => assert!(choice.text.ends_with("(treasure)")),
                    Effect::Nothing | Effect::GainQi { .. } => {
                        assert!(!choice.text.ends_with(')'), "text: {}", choice.text)
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn rejects_bad_jitter() {
        let result = EventForge::builder()
            .jitter(JitterBounds { min: 1.5, max: 1.2 })
            .build();
        assert!(matches!(result, Err(ForgeError::Jitter { .. })));
    }

    #[test]
    fn rejects_invalid_bank() {
        let mut bank = VocabularyBank::classic();
        bank.mid.prefixes.clear();
        let result = EventForge::builder().bank(bank).build();
        assert!(matches!(result, Err(ForgeError::Bank(_))));
    }
}
