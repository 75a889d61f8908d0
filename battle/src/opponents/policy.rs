//! Encounter selection policy and wild id sampling

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

use super::EncounterKind;

/// Default chance of a wild encounter
pub const DEFAULT_WILD_WEIGHT: f64 = 0.4;

/// Default catalog id range for wild creatures (first generation)
pub const DEFAULT_WILD_IDS: RangeInclusive<u32> = 1..=151;

/// Weighted choice between a wild and a boss encounter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncounterPolicy {
    wild_weight: f64,
}

impl EncounterPolicy {
    /// Weight outside 0..=1 is clamped; NaN falls back to the default
    pub fn new(wild_weight: f64) -> Self {
        let wild_weight = if wild_weight.is_nan() {
            DEFAULT_WILD_WEIGHT
        } else {
            wild_weight.clamp(0.0, 1.0)
        };
        Self { wild_weight }
    }

    pub fn wild_weight(&self) -> f64 {
        self.wild_weight
    }

    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> EncounterKind {
        if rng.gen_bool(self.wild_weight) {
            EncounterKind::Wild
        } else {
            EncounterKind::Boss
        }
    }
}

impl Default for EncounterPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_WILD_WEIGHT)
    }
}

/// Draws distinct ids from an inclusive range, never repeating an id it
/// already handed out
#[derive(Debug, Clone)]
pub struct IdSampler {
    range: RangeInclusive<u32>,
    drawn: HashSet<u32>,
}

impl IdSampler {
    pub fn new(range: RangeInclusive<u32>) -> Self {
        Self {
            range,
            drawn: HashSet::new(),
        }
    }

    /// Number of ids in the whole range
    pub fn len(&self) -> u64 {
        if self.range.is_empty() {
            0
        } else {
            u64::from(*self.range.end()) - u64::from(*self.range.start()) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids not drawn yet
    pub fn remaining(&self) -> u64 {
        self.len() - self.drawn.len() as u64
    }

    /// Draw an unused id uniformly, `None` once the range is exhausted.
    ///
    /// Cost is bounded by the number of ids already drawn, not by the
    /// size of the range.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u32> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }

        // rejection sampling while at least half the range is still free
        let id = if remaining * 2 >= self.len() {
            loop {
                let id = rng.gen_range(self.range.clone());
                if !self.drawn.contains(&id) {
                    break id;
                }
            }
        } else {
            // fewer free ids than drawn ones, so this walk is O(drawn)
            let available: Vec<u32> = self
                .range
                .clone()
                .filter(|id| !self.drawn.contains(id))
                .collect();
            *available.choose(rng)?
        };

        self.drawn.insert(id);
        Some(id)
    }
}

impl Default for IdSampler {
    fn default() -> Self {
        Self::new(DEFAULT_WILD_IDS)
    }
}
