//! Encounter Forge: procedural random-encounter tables for idle games.
//!
//! Generates flavor-text "event" records for a cultivation game's
//! random-encounter table and serializes them as a flat JSON array, using
//! a pipeline of stage-bucketed word banks, weighted template selection,
//! an exponential reward curve, and effect construction keyed to the
//! semantic intent of each choice.

pub mod core;
pub mod profiles;
pub mod schema;
