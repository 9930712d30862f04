use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::effect::Effect;
use super::stage::Rarity;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Position of a choice within an event. Always exactly "a" then "b".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceId {
    A,
    B,
}

/// One of the two options presented to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub text: String,
    pub effect: Effect,
}

/// A single encounter entry in the generated table.
///
/// `min_stage`/`max_stage` are stage *names*; the client filters the table
/// by comparing them against the player's current stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub rarity: Rarity,
    #[serde(rename = "minStage")]
    pub min_stage: String,
    #[serde(rename = "maxStage")]
    pub max_stage: String,
    pub choices: Vec<Choice>,
}

/// Serialize a whole table as one pretty-printed UTF-8 JSON array.
pub fn write_table(path: &Path, records: &[EventRecord]) -> Result<(), TableError> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a table back from disk. Used by the linter and by tests.
pub fn read_table(path: &Path) -> Result<Vec<EventRecord>, TableError> {
    let contents = std::fs::read_to_string(path)?;
    let records = serde_json::from_str(&contents)?;
    Ok(records)
}
