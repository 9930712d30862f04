//! Vocabulary banks: stage-bucketed word tables, RON loading, and
//! validation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::logic::ResponseTone;
use crate::schema::stage::TierBand;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("empty {pool} pool in the {band} band")]
    EmptyPool {
        band: &'static str,
        pool: &'static str,
    },
    #[error("subject '{subject}' in the {band} band has no approaches")]
    NoApproaches {
        band: &'static str,
        subject: String,
    },
    #[error("duplicate subject '{subject}' in the {band} band")]
    DuplicateSubject {
        band: &'static str,
        subject: String,
    },
}

/// One encounter subject and the actions that make sense *for it*. The
/// choice-A wording is always drawn from the subject's own list, so a
/// spring offers drinking and bathing, never sword-drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub subject: String,
    pub approaches: Vec<String>,
}

/// The word tables for one tier band.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandBank {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,
    /// Choice-B pools, disjoint by semantic category.
    #[serde(default)]
    pub leave: Vec<String>,
    #[serde(default)]
    pub play_safe: Vec<String>,
    #[serde(default)]
    pub fight_back: Vec<String>,
}

impl BandBank {
    /// The choice-B pool for a semantic category.
    pub fn response_pool(&self, tone: ResponseTone) -> &[String] {
        match tone {
            ResponseTone::Leave => &self.leave,
            ResponseTone::PlaySafe => &self.play_safe,
            ResponseTone::FightBack => &self.fight_back,
        }
    }

    fn extend(&mut self, other: BandBank) {
        self.prefixes.extend(other.prefixes);
        self.subjects.extend(other.subjects);
        self.leave.extend(other.leave);
        self.play_safe.extend(other.play_safe);
        self.fight_back.extend(other.fight_back);
    }

    fn validate(&self, band: &'static str) -> Result<(), BankError> {
        let pools: [(&'static str, usize); 5] = [
            ("prefix", self.prefixes.len()),
            ("subject", self.subjects.len()),
            ("leave", self.leave.len()),
            ("play_safe", self.play_safe.len()),
            ("fight_back", self.fight_back.len()),
        ];
        for (pool, len) in pools {
            if len == 0 {
                return Err(BankError::EmptyPool { band, pool });
            }
        }

        let mut seen = FxHashSet::default();
        for entry in &self.subjects {
            if entry.approaches.is_empty() {
                return Err(BankError::NoApproaches {
                    band,
                    subject: entry.subject.clone(),
                });
            }
            if !seen.insert(entry.subject.as_str()) {
                return Err(BankError::DuplicateSubject {
                    band,
                    subject: entry.subject.clone(),
                });
            }
        }
        Ok(())
    }
}

/// The full vocabulary: one `BandBank` per tier band. Low, mid, and high
/// pools never mix; a Foundation-stage wanderer does not trip over the
/// River of Time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyBank {
    pub low: BandBank,
    pub mid: BandBank,
    pub high: BandBank,
}

impl VocabularyBank {
    /// The built-in bank.
    pub fn classic() -> VocabularyBank {
        crate::core::lexicon::classic()
    }

    /// Load a bank from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<VocabularyBank, BankError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a bank from a RON string.
    pub fn parse_ron(input: &str) -> Result<VocabularyBank, BankError> {
        let bank = ron::from_str(input)?;
        Ok(bank)
    }

    pub fn band(&self, band: TierBand) -> &BandBank {
        match band {
            TierBand::Low => &self.low,
            TierBand::Mid => &self.mid,
            TierBand::High => &self.high,
        }
    }

    /// Append another bank's pools onto this one, band by band. Used to
    /// bolt extra vocabulary onto the built-in tables.
    pub fn extend(&mut self, other: VocabularyBank) {
        self.low.extend(other.low);
        self.mid.extend(other.mid);
        self.high.extend(other.high);
    }

    /// Check every pool is usable. Run once at forge-build time so that
    /// generation itself never has to handle an empty table.
    pub fn validate(&self) -> Result<(), BankError> {
        self.low.validate("low")?;
        self.mid.validate("mid")?;
        self.high.validate("high")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_BANK: &str = r#"(
        low: (
            prefixes: ["Mossy"],
            subjects: [(subject: "Well", approaches: ["Peer inside", "Drop a coin"])],
            leave: ["Walk on"],
            play_safe: ["Sip carefully"],
            fight_back: ["Refuse the pull"],
        ),
        mid: (
            prefixes: ["Sealed"],
            subjects: [(subject: "Vault", approaches: ["Pick the lock"])],
            leave: ["Leave it shut"],
            play_safe: ["Probe the wards"],
            fight_back: ["Smash it open"],
        ),
        high: (
            prefixes: ["Nameless"],
            subjects: [(subject: "Throne", approaches: ["Sit upon it"])],
            leave: ["Bow and retreat"],
            play_safe: ["Study it from afar"],
            fight_back: ["Claim it by force"],
        ),
    )"#;

    #[test]
    fn parse_small_ron_bank() {
        let bank = VocabularyBank::parse_ron(SMALL_BANK).unwrap();
        assert_eq!(bank.low.subjects[0].subject, "Well");
        assert_eq!(bank.low.subjects[0].approaches.len(), 2);
        assert_eq!(bank.mid.prefixes, vec!["Sealed".to_string()]);
        bank.validate().unwrap();
    }

    #[test]
    fn parse_rejects_malformed_ron() {
        assert!(VocabularyBank::parse_ron("(low: oops").is_err());
    }

    #[test]
    fn validate_rejects_empty_pool() {
        let mut bank = VocabularyBank::parse_ron(SMALL_BANK).unwrap();
        bank.mid.leave.clear();
        match bank.validate() {
            Err(BankError::EmptyPool { band, pool }) => {
                assert_eq!(band, "mid");
                assert_eq!(pool, "leave");
            }
            other => panic!("expected EmptyPool, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_subject_without_approaches() {
        let mut bank = VocabularyBank::parse_ron(SMALL_BANK).unwrap();
        bank.high.subjects.push(SubjectEntry {
            subject: "Mirror".to_string(),
            approaches: Vec::new(),
        });
        assert!(matches!(
            bank.validate(),
            Err(BankError::NoApproaches { band: "high", .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_subject() {
        let mut bank = VocabularyBank::parse_ron(SMALL_BANK).unwrap();
        bank.low.subjects.push(SubjectEntry {
            subject: "Well".to_string(),
            approaches: vec!["Fill it in".to_string()],
        });
        assert!(matches!(
            bank.validate(),
            Err(BankError::DuplicateSubject { band: "low", .. })
        ));
    }

    #[test]
    fn extend_appends_pools() {
        let mut bank = VocabularyBank::parse_ron(SMALL_BANK).unwrap();
        let extra = VocabularyBank::parse_ron(SMALL_BANK).unwrap();
        bank.extend(extra);
        assert_eq!(bank.low.prefixes.len(), 2);
        assert_eq!(bank.high.subjects.len(), 2);
        // Extending with a copy duplicates subjects, which validate flags.
        assert!(bank.validate().is_err());
    }

    #[test]
    fn classic_bank_validates() {
        VocabularyBank::classic().validate().unwrap();
    }

    #[test]
    fn response_pools_are_disjoint_lookups() {
        let bank = VocabularyBank::parse_ron(SMALL_BANK).unwrap();
        assert_eq!(
            bank.low.response_pool(ResponseTone::Leave),
            &["Walk on".to_string()]
        );
        assert_eq!(
            bank.low.response_pool(ResponseTone::PlaySafe),
            &["Sip carefully".to_string()]
        );
        assert_eq!(
            bank.low.response_pool(ResponseTone::FightBack),
            &["Refuse the pull".to_string()]
        );
    }
}
