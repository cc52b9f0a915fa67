//! Epsilon-greedy action selection over remembered outcomes.

use rand::Rng;

use crate::core::types::Action;
use crate::policy::history::ExperienceHistory;
use crate::policy::state::StateKey;

/// Chooses a 4-bit action for the given state.
///
/// With probability `exploration_rate` a uniform random nibble is chosen.
/// Otherwise the action with the best recorded success rate for this state
/// wins, with a tiny random jitter to break ties. Unknown states and states
/// with no tried actions fall back to exploration.
pub fn choose_action<R: Rng>(
    state: StateKey,
    history: &ExperienceHistory,
    exploration_rate: f64,
    rng: &mut R,
) -> Action {
    if rng.gen::<f64>() < exploration_rate {
        return random_action(rng);
    }

    if let Some(outcomes) = history.outcomes(state) {
        let mut best: Option<(f64, Action)> = None;
        for (&action, outcome) in outcomes {
            if let Some(rate) = outcome.success_rate() {
                let scored = rate + rng.gen::<f64>() * 1e-6;
                if best.map_or(true, |(b, _)| scored > b) {
                    best = Some((scored, action));
                }
            }
        }
        if let Some((_, action)) = best {
            return action;
        }
    }

    random_action(rng)
}

fn random_action<R: Rng>(rng: &mut R) -> Action {
    Action::from_nibble(rng.gen_range(0..16))
}
