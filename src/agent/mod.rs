//! the per turn contract between the game host and an agent
//!
//! The host calls `initialize` once per match and `play` once per turn. Each
//! `play` rebuilds the board from its percepts, so nothing about the game is
//! carried between calls; the only state a session owns is its selection
//! policy.
mod policy;

pub use policy::{FirstLegalPolicy, RandomPolicy, SelectionPolicy};

use crate::errors::{AgentError, OutOfRangeError};
use crate::types::{Action, LegalMovesGame, PawnGettableGame, SizeDeterminableGame};
use crate::wire_representation;
use serde_json::Value;
use std::convert::TryFrom;
use tracing::{debug, info, instrument, trace, warn};

/// boards wider than this are never rendered into log events
const MAX_RENDERED_SIZE: i32 = 32;

/// The two operations the host can call on an agent
pub trait Agent {
    /// Called once before the first turn. `players` are the players this
    /// agent controls and `time_left` is the remaining time credit in
    /// seconds, or None when the match is not timed.
    fn initialize(&mut self, percepts: &Value, players: &[i64], time_left: Option<f64>) -> bool;

    /// Answer one turn for `player`. `step` starts from 1. A player that
    /// does not index a pawn, negative ones included, is an
    /// [`OutOfRangeError`].
    fn play(
        &mut self,
        percepts: &Value,
        player: i64,
        step: i64,
        time_left: Option<f64>,
    ) -> Result<Action, AgentError>;
}

/// Whether the host has called `initialize` yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    #[allow(missing_docs)]
    Uninitialized,
    #[allow(missing_docs)]
    Ready,
}

/// An agent that answers each turn by generating the legal pawn moves and
/// handing them to a [`SelectionPolicy`]
#[derive(Debug, Clone)]
pub struct AgentSession<P = RandomPolicy> {
    policy: P,
    state: SessionState,
}

impl AgentSession<RandomPolicy> {
    /// a session that plays uniformly random legal moves
    pub fn random() -> Self {
        Self::new(RandomPolicy::new())
    }

    /// a random session with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomPolicy::from_seed(seed))
    }
}

impl<P: SelectionPolicy> AgentSession<P> {
    #[allow(missing_docs)]
    pub fn new(policy: P) -> Self {
        AgentSession {
            policy,
            state: SessionState::Uninitialized,
        }
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[allow(missing_docs)]
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: SelectionPolicy> Agent for AgentSession<P> {
    #[instrument(level = "debug", skip(self, _percepts))]
    fn initialize(&mut self, _percepts: &Value, players: &[i64], time_left: Option<f64>) -> bool {
        info!("initializing agent session");
        self.state = SessionState::Ready;
        true
    }

    #[instrument(level = "debug", skip(self, percepts))]
    fn play(
        &mut self,
        percepts: &Value,
        player: i64,
        step: i64,
        time_left: Option<f64>,
    ) -> Result<Action, AgentError> {
        if self.state == SessionState::Uninitialized {
            debug!("play called before initialize");
        }

        let board = wire_representation::decode(percepts)?;
        let player = usize::try_from(player).map_err(|_| OutOfRangeError {
            player,
            player_count: board.player_count(),
        })?;
        let candidates = board.legal_moves(player)?;
        debug!(candidates = candidates.len(), "generated legal moves");

        if candidates.is_empty() {
            let pawn = board.get_pawn(player)?;
            warn!(player, %pawn, "pawn is boxed in");
            if board.get_size() <= MAX_RENDERED_SIZE {
                trace!(%board, "boxed in board");
            }
            return Err(AgentError::NoLegalMove { player });
        }

        let action = self
            .policy
            .select(&candidates)
            .ok_or(AgentError::NoLegalMove { player })?;
        debug!(%action, "selected action");
        Ok(action)
    }
}
