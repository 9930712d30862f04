//! Text composition: titles, descriptions, and choice wording.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::core::bank::{BandBank, VocabularyBank};
use crate::core::logic::LogicTag;
use crate::core::template::ResolvedTemplate;
use crate::schema::stage::TierBand;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("empty {pool} pool in the {band} band")]
    EmptyPool {
        band: &'static str,
        pool: &'static str,
    },
}

/// Everything the composer produces for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedText {
    pub title: String,
    pub desc: String,
    pub choice_a: String,
    pub choice_b: String,
}

/// Neutral choice-B phrase for intents outside the three wording
/// categories. This is the explicit fallback branch: a tag the composer
/// has no pool for gets a line that commits to nothing, rather than a
/// line borrowed from a pool that would contradict its effect.
const NEUTRAL_RESPONSE: &str = "See what comes of it";

/// The band-specific sentence frame around a title.
fn frame(band: TierBand, title: &str) -> String {
    match band {
        TierBand::Low => format!("You stumble upon the {}.", title),
        TierBand::Mid => format!("Ahead appears the {}.", title),
        TierBand::High => format!("You have touched the {}.", title),
    }
}

fn draw<'a>(
    pool: &'a [String],
    band: &'static str,
    name: &'static str,
    rng: &mut StdRng,
) -> Result<&'a str, ComposeError> {
    pool.choose(rng)
        .map(String::as_str)
        .ok_or(ComposeError::EmptyPool { band, pool: name })
}

/// Compose title, description, and both choice lines for one draw.
///
/// The title joins a band prefix with a band subject; choice A comes from
/// that same subject's approach list; choice B comes from the pool matching
/// the B intent's semantic category.
pub fn compose(
    bank: &VocabularyBank,
    band: TierBand,
    template: &ResolvedTemplate<'_>,
    rng: &mut StdRng,
) -> Result<ComposedText, ComposeError> {
    let band_bank = bank.band(band);
    let label = band.label();

    let prefix = draw(&band_bank.prefixes, label, "prefix", rng)?;
    let entry = band_bank
        .subjects
        .choose(rng)
        .ok_or(ComposeError::EmptyPool {
            band: label,
            pool: "subject",
        })?;
    let choice_a = draw(&entry.approaches, label, "approach", rng)?.to_string();

    let title = format!("{} {}", prefix, entry.subject);
    let desc = format!("{} {}", frame(band, &title), template.desc_suffix);
    let choice_b = response_text(band_bank, label, template.choice_b, rng)?;

    Ok(ComposedText {
        title,
        desc,
        choice_a,
        choice_b,
    })
}

/// Choice-B wording, keyed by the intent's semantic category rather than by
/// its slot. Intents with no category take the neutral fallback.
fn response_text(
    band_bank: &BandBank,
    label: &'static str,
    tag: LogicTag,
    rng: &mut StdRng,
) -> Result<String, ComposeError> {
    match tag.response_tone() {
        Some(tone) => {
            let pool = band_bank.response_pool(tone);
            Ok(draw(pool, label, "response", rng)?.to_string())
        }
        None => Ok(NEUTRAL_RESPONSE.to_string()),
    }
}
