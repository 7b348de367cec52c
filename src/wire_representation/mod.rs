#![allow(missing_docs)]
//! types to match the percepts the game host sends each turn, and the decode
//! step that turns them into a [`BoardState`]
use crate::board::BoardState;
use crate::errors::DecodeError;
use crate::types::{Coordinate, Goal};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Struct that matches the percepts mapping from the wire representation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Percepts {
    pub pawns: Vec<Coordinate>,
    pub goals: Vec<Goal>,
    pub nb_walls: Vec<i32>,
    pub horiz_walls: Vec<Coordinate>,
    pub verti_walls: Vec<Coordinate>,
    pub rows: i32,
    pub cols: i32,
    pub size: i32,
}

impl From<Percepts> for BoardState {
    fn from(p: Percepts) -> Self {
        BoardState {
            pawns: p.pawns,
            goals: p.goals,
            wall_budget: p.nb_walls,
            horizontal_walls: p.horiz_walls,
            vertical_walls: p.verti_walls,
            rows: p.rows,
            cols: p.cols,
            size: p.size,
        }
    }
}

impl From<&BoardState> for Percepts {
    fn from(b: &BoardState) -> Self {
        Percepts {
            pawns: b.pawns.clone(),
            goals: b.goals.clone(),
            nb_walls: b.wall_budget.clone(),
            horiz_walls: b.horizontal_walls.clone(),
            verti_walls: b.vertical_walls.clone(),
            rows: b.rows,
            cols: b.cols,
            size: b.size,
        }
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, name: &'static str) -> Result<T, DecodeError> {
    let raw = map.get(name).ok_or(DecodeError::MissingField(name))?;
    T::deserialize(raw).map_err(|source| DecodeError::WrongShape {
        field: name,
        source,
    })
}

/// Decodes a percepts mapping into a board.
///
/// Only the presence and shape of each field is checked. Sequences keep the
/// order they arrived in, so pawn `i` is player `i`. Unknown fields are
/// ignored.
/// ```
/// # use quoridor_agent_types::wire_representation::decode;
/// let percepts = serde_json::json!({
///     "pawns": [[0, 4], [8, 4]],
///     "goals": [[8, null], [0, null]],
///     "nb_walls": [10, 10],
///     "horiz_walls": [],
///     "verti_walls": [],
///     "rows": 9,
///     "cols": 9,
///     "size": 9,
/// });
/// let board = decode(&percepts).unwrap();
/// assert_eq!(2, board.pawns.len());
/// ```
pub fn decode(payload: &Value) -> Result<BoardState, DecodeError> {
    let map = payload
        .as_object()
        .ok_or_else(|| DecodeError::NotAMapping(kind_of(payload)))?;

    Ok(Percepts {
        pawns: field(map, "pawns")?,
        goals: field(map, "goals")?,
        nb_walls: field(map, "nb_walls")?,
        horiz_walls: field(map, "horiz_walls")?,
        verti_walls: field(map, "verti_walls")?,
        rows: field(map, "rows")?,
        cols: field(map, "cols")?,
        size: field(map, "size")?,
    }
    .into())
}

/// Parses a json document and decodes it, see [`decode`]
pub fn decode_str(s: &str) -> Result<BoardState, DecodeError> {
    let v: Value = serde_json::from_str(s)?;
    decode(&v)
}

/// Encodes a board back into the percepts mapping the host would send
pub fn encode(board: &BoardState) -> Value {
    let p = Percepts::from(board);
    serde_json::json!({
        "pawns": p.pawns,
        "goals": p.goals,
        "nb_walls": p.nb_walls,
        "horiz_walls": p.horiz_walls,
        "verti_walls": p.verti_walls,
        "rows": p.rows,
        "cols": p.cols,
        "size": p.size,
    })
}
