//! Reward calculation: a piecewise-exponential curve with random jitter and
//! readability rounding.

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::schema::stage::{Tier, TierBand};

/// One branch of the reward curve: `base * growth^tier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardCurve {
    pub base: f64,
    pub growth: f64,
}

/// Uniform multiplicative jitter applied to every roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterBounds {
    pub min: f64,
    pub max: f64,
}

impl JitterBounds {
    /// The canonical ±20% band.
    pub fn classic() -> JitterBounds {
        JitterBounds { min: 0.8, max: 1.2 }
    }

    /// The wider ±25% band used by the high-variance profile.
    pub fn wide() -> JitterBounds {
        JitterBounds {
            min: 0.75,
            max: 1.25,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min > 0.0 && self.min <= self.max && self.max.is_finite()
    }
}

/// The full reward configuration: one curve per band, jitter bounds, and the
/// threshold above which values round to hundreds instead of tens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardTuning {
    pub low: RewardCurve,
    pub mid: RewardCurve,
    pub high: RewardCurve,
    pub jitter: JitterBounds,
    pub coarse_threshold: u64,
}

impl Default for RewardTuning {
    fn default() -> Self {
        RewardTuning {
            low: RewardCurve {
                base: 120.0,
                growth: 1.6,
            },
            mid: RewardCurve {
                base: 500.0,
                growth: 1.9,
            },
            high: RewardCurve {
                base: 8000.0,
                growth: 2.4,
            },
            jitter: JitterBounds::classic(),
            coarse_threshold: 10_000,
        }
    }
}

impl RewardTuning {
    pub fn curve(&self, band: TierBand) -> RewardCurve {
        match band {
            TierBand::Low => self.low,
            TierBand::Mid => self.mid,
            TierBand::High => self.high,
        }
    }

    fn raw(&self, tier: Tier) -> f64 {
        let curve = self.curve(tier.band());
        curve.base * curve.growth.powi(tier.index() as i32)
    }

    /// Roll a reward for `tier`: curve value, jittered, truncated, rounded
    /// down to the nearest 10 (or 100 above the coarse threshold). The
    /// truncated digits are deliberate; the numbers read better in game.
    pub fn roll(&self, tier: Tier, rng: &mut StdRng) -> u64 {
        let factor = rng.gen_range(self.jitter.min..=self.jitter.max);
        self.quantize((self.raw(tier) * factor) as u64)
    }

    /// The same computation with jitter pinned to 1.0, for previews and
    /// monotonicity checks.
    pub fn nominal(&self, tier: Tier) -> u64 {
        self.quantize(self.raw(tier) as u64)
    }

    fn quantize(&self, value: u64) -> u64 {
        if value > self.coarse_threshold {
            value / 100 * 100
        } else {
            value / 10 * 10
        }
    }
}
