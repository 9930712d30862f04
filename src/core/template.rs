//! Event templates and the tier-weighted template selector.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::logic::LogicTag;
use crate::schema::stage::TierBand;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no templates")]
    EmptyCatalog,
    #[error("{band} weight vector has {weights} entries for {templates} templates")]
    LengthMismatch {
        band: &'static str,
        weights: usize,
        templates: usize,
    },
    #[error("invalid {band} weights: {source}")]
    BadWeights {
        band: &'static str,
        source: WeightedError,
    },
}

/// The shape of an encounter: which intents its two choices carry and which
/// sentence closes its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    PureGain,
    RiskReward,
    BuffGamble,
    ItemReward,
    TradeLoss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTemplate {
    pub kind: TemplateKind,
    pub desc_suffix: String,
    pub choice_a: LogicTag,
    pub choice_b: LogicTag,
}

/// Per-band template weights. They do not need to sum to anything in
/// particular; the sampler normalizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub low: Vec<u32>,
    pub mid: Vec<u32>,
    pub high: Vec<u32>,
}

impl WeightProfile {
    /// The canonical tuning: early stages lean on pure gain and buffs,
    /// late stages on risk and items.
    pub fn classic() -> WeightProfile {
        WeightProfile {
            low: vec![40, 10, 40, 5, 5],
            mid: vec![40, 20, 20, 15, 5],
            high: vec![25, 30, 10, 25, 10],
        }
    }

    fn for_band(&self, band: TierBand) -> &[u32] {
        match band {
            TierBand::Low => &self.low,
            TierBand::Mid => &self.mid,
            TierBand::High => &self.high,
        }
    }
}

/// A template draw with the second-level buff-gamble branch already taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTemplate<'a> {
    pub kind: TemplateKind,
    pub choice_a: LogicTag,
    pub choice_b: LogicTag,
    pub desc_suffix: &'a str,
}

/// The fixed template catalog plus one prebuilt discrete distribution per
/// band.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<EventTemplate>,
    impulse_suffix: String,
    low: WeightedIndex<u32>,
    mid: WeightedIndex<u32>,
    high: WeightedIndex<u32>,
}

/// The five standard templates.
pub fn classic_templates() -> Vec<EventTemplate> {
    vec![
        EventTemplate {
            kind: TemplateKind::PureGain,
            desc_suffix: "Fortune has come knocking.".to_string(),
            choice_a: LogicTag::GainStandard,
            choice_b: LogicTag::Nothing,
        },
        EventTemplate {
            kind: TemplateKind::RiskReward,
            desc_suffix: "Fortune and ruin walk together.".to_string(),
            choice_a: LogicTag::GambleQi,
            choice_b: LogicTag::Nothing,
        },
        EventTemplate {
            kind: TemplateKind::BuffGamble,
            desc_suffix: "Fortune and ruin walk together.".to_string(),
            choice_a: LogicTag::GambleBuffAuto,
            choice_b: LogicTag::GainAutoSafe,
        },
        EventTemplate {
            kind: TemplateKind::ItemReward,
            desc_suffix: "A treasure light glimmers.".to_string(),
            choice_a: LogicTag::GrantItem,
            choice_b: LogicTag::Nothing,
        },
        EventTemplate {
            kind: TemplateKind::TradeLoss,
            desc_suffix: "A price must be paid.".to_string(),
            choice_a: LogicTag::PayQi,
            choice_b: LogicTag::GambleQi,
        },
    ]
}

/// Suffix swapped in when the buff gamble flips to its tap variant.
const IMPULSE_SUFFIX: &str = "A sudden impulse stirs your blood!";

impl TemplateCatalog {
    pub fn new(
        templates: Vec<EventTemplate>,
        weights: WeightProfile,
    ) -> Result<TemplateCatalog, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let low = Self::sampler(&templates, &weights, TierBand::Low)?;
        let mid = Self::sampler(&templates, &weights, TierBand::Mid)?;
        let high = Self::sampler(&templates, &weights, TierBand::High)?;
        Ok(TemplateCatalog {
            templates,
            impulse_suffix: IMPULSE_SUFFIX.to_string(),
            low,
            mid,
            high,
        })
    }

    /// The standard five-template catalog with canonical weights.
    pub fn classic() -> Result<TemplateCatalog, CatalogError> {
        Self::new(classic_templates(), WeightProfile::classic())
    }

    fn sampler(
        templates: &[EventTemplate],
        weights: &WeightProfile,
        band: TierBand,
    ) -> Result<WeightedIndex<u32>, CatalogError> {
        let w = weights.for_band(band);
        if w.len() != templates.len() {
            return Err(CatalogError::LengthMismatch {
                band: band.label(),
                weights: w.len(),
                templates: templates.len(),
            });
        }
        WeightedIndex::new(w.iter().copied()).map_err(|source| CatalogError::BadWeights {
            band: band.label(),
            source,
        })
    }

    pub fn templates(&self) -> &[EventTemplate] {
        &self.templates
    }

    /// Draw a template for `band`.
    ///
    /// A drawn buff gamble takes a further coin flip between the idle-buff
    /// and tap-buff variants; the flip is its own draw, deliberately kept
    /// out of the weight vector so the two variants stay equally likely no
    /// matter how the band weights shift.
    pub fn resolve(&self, band: TierBand, rng: &mut StdRng) -> ResolvedTemplate<'_> {
        let sampler = match band {
            TierBand::Low => &self.low,
            TierBand::Mid => &self.mid,
            TierBand::High => &self.high,
        };
        let template = &self.templates[sampler.sample(rng)];

        let mut resolved = ResolvedTemplate {
            kind: template.kind,
            choice_a: template.choice_a,
            choice_b: template.choice_b,
            desc_suffix: &template.desc_suffix,
        };
        if template.kind == TemplateKind::BuffGamble && rng.gen_bool(0.5) {
            resolved.choice_a = LogicTag::GambleBuffTap;
            resolved.choice_b = LogicTag::GainTapSafe;
            resolved.desc_suffix = &self.impulse_suffix;
        }
        resolved
    }
}
