//! Experience history: per-state, per-action survival tallies.

use ahash::AHashMap;

use crate::core::types::Action;
use crate::policy::state::StateKey;

/// Success/fail tally for one state-action pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub success: u32,
    pub fail: u32,
}

impl Outcome {
    /// Fraction of tries that survived; `None` until the pair has been tried
    pub fn success_rate(&self) -> Option<f64> {
        let total = self.success + self.fail;
        if total == 0 {
            None
        } else {
            Some(f64::from(self.success) / f64::from(total))
        }
    }
}

/// Remembered outcomes keyed by hashed grid state.
///
/// Owned by the run loop and passed by reference into each decision call.
#[derive(Debug, Clone, Default)]
pub struct ExperienceHistory {
    entries: AHashMap<StateKey, AHashMap<Action, Outcome>>,
}

impl ExperienceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one try of `action` in `state`. Success is survival: the
    /// step did not end the run.
    pub fn record(&mut self, state: StateKey, action: Action, success: bool) {
        let outcome = self
            .entries
            .entry(state)
            .or_default()
            .entry(action)
            .or_default();
        if success {
            outcome.success += 1;
        } else {
            outcome.fail += 1;
        }
    }

    pub fn outcomes(&self, state: StateKey) -> Option<&AHashMap<Action, Outcome>> {
        self.entries.get(&state)
    }

    /// Number of distinct states seen
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
