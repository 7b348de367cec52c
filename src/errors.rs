//! errors surfaced to the host, kept distinct so that a boxed in pawn can be
//! told apart from a malformed percept
use thiserror::Error;

/// The percept payload could not be turned into a board
#[derive(Debug, Error)]
pub enum DecodeError {
    /// the payload was not a json object
    #[error("percepts must be a mapping, got {0}")]
    NotAMapping(&'static str),

    /// a required field was absent
    #[error("percepts are missing required field `{0}`")]
    MissingField(&'static str),

    /// a required field was present but had the wrong shape
    #[error("percept field `{field}` has the wrong shape: {source}")]
    WrongShape {
        #[allow(missing_docs)]
        field: &'static str,
        #[allow(missing_docs)]
        source: serde_json::Error,
    },

    /// the payload was not valid json at all
    #[error("percepts are not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A player index that does not name a pawn on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("player {player} is out of range for a board with {player_count} pawns")]
pub struct OutOfRangeError {
    /// the index as the host sent it, which may be negative
    pub player: i64,
    #[allow(missing_docs)]
    pub player_count: usize,
}

/// A wire action tag that is not one of `P`, `WH` or `WV`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action kind `{0}`")]
pub struct UnknownActionKind(pub String);

/// Everything that can stop an agent from answering a `play` call
#[derive(Debug, Error)]
pub enum AgentError {
    #[allow(missing_docs)]
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[allow(missing_docs)]
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),

    /// the pawn has nowhere to go; this is an expected outcome, not a fault
    #[error("player {player} has no legal move")]
    NoLegalMove {
        #[allow(missing_docs)]
        player: usize,
    },
}

impl AgentError {
    /// true when the turn failed only because the pawn is boxed in
    pub fn is_no_legal_move(&self) -> bool {
        matches!(self, AgentError::NoLegalMove { .. })
    }
}

/// Errors from mapping a wire call onto an agent
#[derive(Debug, Error)]
pub enum DispatchError {
    /// the method name is neither `initialize` nor `play`
    #[error("unknown method `{0}`")]
    UnknownMethod(String),

    /// the positional parameters did not match the method
    #[error("invalid params for `{method}`: {reason}")]
    InvalidParams {
        #[allow(missing_docs)]
        method: &'static str,
        #[allow(missing_docs)]
        reason: String,
    },

    #[allow(missing_docs)]
    #[error(transparent)]
    Agent(#[from] AgentError),
}
