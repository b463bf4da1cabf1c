//! The reveal operation and ordering of overlapping reveals.
//!
//! A reveal fetches the index exactly once, picks one entry uniformly at
//! random, and hands the chosen URL back to the caller; the caller applies
//! the show/hide side effects to its [`TargetState`](super::models::TargetState).
//!
//! Overlapping reveals are never cancelled. Instead each reveal carries a
//! generation from [`RevealSequencer`], and a resolution is applied only if
//! it still belongs to the latest trigger when it arrives. Without this
//! filter the final target state would be whichever response happened to
//! resolve last.

use rand::Rng;

use super::client::IndexSource;
use super::models::{RevealError, RevealResult};
use super::picker::pick_entry;

/// Resolve one reveal: fetch the index once and choose an entry at random.
pub fn reveal_from<S: IndexSource, R: Rng>(source: &S, rng: &mut R) -> RevealResult {
    let entries = source.fetch_index()?;
    let entry = pick_entry(&entries, rng).ok_or(RevealError::EmptyIndex)?;
    Ok(entry.url.clone())
}

/// Monotonically increasing trigger counter.
///
/// `begin` stamps a new reveal; `is_current` tells whether a finished reveal
/// is still the latest one and may be applied.
#[derive(Debug, Default)]
pub struct RevealSequencer {
    issued: u64,
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new reveal, superseding every reveal still in flight.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a reveal with this generation is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.issued
    }

    /// Number of reveals triggered so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
