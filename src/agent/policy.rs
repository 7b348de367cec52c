//! policies for picking one action out of the legal candidates
use crate::types::Action;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;

/// Picks one action from a list of legal candidates. Returns None only for an
/// empty list, which [`AgentSession`](crate::agent::AgentSession) never passes.
pub trait SelectionPolicy: Debug {
    #[allow(missing_docs)]
    fn select(&mut self, candidates: &[Action]) -> Option<Action>;
}

/// Chooses uniformly at random over the candidates
#[derive(Debug, Clone)]
pub struct RandomPolicy<R = SmallRng> {
    rng: R,
}

impl RandomPolicy<SmallRng> {
    /// seeds a small rng from the os once, for the life of this policy
    pub fn new() -> Self {
        RandomPolicy {
            rng: SmallRng::from_entropy(),
        }
    }

    /// deterministic policy for tests and replays
    pub fn from_seed(seed: u64) -> Self {
        RandomPolicy {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPolicy<R> {
    /// use the given source of randomness
    pub fn with_rng(rng: R) -> Self {
        RandomPolicy { rng }
    }
}

impl<R: Rng + Debug> SelectionPolicy for RandomPolicy<R> {
    fn select(&mut self, candidates: &[Action]) -> Option<Action> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always takes the first candidate, which is the down move when it is legal
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegalPolicy;

impl SelectionPolicy for FirstLegalPolicy {
    fn select(&mut self, candidates: &[Action]) -> Option<Action> {
        candidates.first().copied()
    }
}
