#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for writing agents for the quoridor blitz game host.
//! The host calls `initialize` once and then `play` every turn, handing over
//! the whole board as an untyped percepts mapping. This crate decodes those
//! percepts into a typed [`board::BoardState`], generates the legal pawn moves
//! for a player, and answers the turn through a pluggable selection policy.
//! ```plain
//! percepts --decode--> BoardState --legal_moves--> [Action] --select--> ["P", row, col]
//! ```
//! Move generation is deliberately small: single cardinal steps that stay on
//! the board and do not land on a pawn. Walls are decoded but do not block.

use board::BoardState;

pub mod agent;
pub mod board;
pub mod errors;
pub mod move_generation;
pub mod rpc;
pub mod types;
pub mod wire_representation;

/// Loads a board from a percepts fixture
pub fn board_fixture(percepts_fixture: &str) -> BoardState {
    let b = wire_representation::decode_str(percepts_fixture);
    b.expect("the json literal is valid")
}
