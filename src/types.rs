//! various types that are useful for working with quoridor agents
use crate::errors::{OutOfRangeError, UnknownActionKind};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// row offset
    pub row: i32,
    /// col offset
    pub col: i32,
}

/// A cell on the grid, addressed as `(row, col)`. On the wire this is a two
/// element array `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coordinate {
    #[allow(missing_docs)]
    pub row: i32,
    #[allow(missing_docs)]
    pub col: i32,
}

impl Coordinate {
    /// make a new coordinate
    pub const fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }

    /// offset this coordinate by `v`, returning None if either component
    /// overflows an i32. An overflowing cell can never be on the board.
    pub fn checked_add_vec(&self, v: Vector) -> Option<Coordinate> {
        Some(Coordinate {
            row: self.row.checked_add(v.row)?,
            col: self.col.checked_add(v.col)?,
        })
    }

    /// checks whether this coordinate lies inside a `size` x `size` square
    pub fn in_bounds(&self, size: i32) -> bool {
        0 <= self.row && self.row < size && 0 <= self.col && self.col < size
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinate { row, col }
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four single steps a pawn can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// row + 1
    Down,
    /// row - 1
    Up,
    /// col + 1
    Right,
    /// col - 1
    Left,
}

impl Direction {
    /// convert this direction to a vector
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Down => Vector { row: 1, col: 0 },
            Direction::Up => Vector { row: -1, col: 0 },
            Direction::Right => Vector { row: 0, col: 1 },
            Direction::Left => Vector { row: 0, col: -1 },
        }
    }

    /// all four directions, in the order moves are generated
    pub fn all() -> [Direction; 4] {
        [
            Direction::Down,
            Direction::Up,
            Direction::Right,
            Direction::Left,
        ]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Left => write!(f, "left"),
        }
    }
}

/// A goal for a single player. The host leaves an axis as `null` when any
/// value on that axis is acceptable, so `[8, null]` means "anywhere on row 8".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Option<i32>, Option<i32>)", into = "(Option<i32>, Option<i32>)")]
pub struct Goal {
    #[allow(missing_docs)]
    pub row: Option<i32>,
    #[allow(missing_docs)]
    pub col: Option<i32>,
}

impl Goal {
    /// a goal on a single cell
    pub fn cell(c: Coordinate) -> Self {
        Goal {
            row: Some(c.row),
            col: Some(c.col),
        }
    }

    /// a goal covering a whole row
    pub fn row(row: i32) -> Self {
        Goal {
            row: Some(row),
            col: None,
        }
    }

    /// a goal covering a whole column
    pub fn col(col: i32) -> Self {
        Goal {
            row: None,
            col: Some(col),
        }
    }

    /// true if every axis this goal specifies matches `pos`
    pub fn contains(&self, pos: Coordinate) -> bool {
        self.row.map_or(true, |r| r == pos.row) && self.col.map_or(true, |c| c == pos.col)
    }

    /// the single cell this goal names, if both axes are given
    pub fn as_coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.row?, self.col?))
    }
}

impl From<(Option<i32>, Option<i32>)> for Goal {
    fn from((row, col): (Option<i32>, Option<i32>)) -> Self {
        Goal { row, col }
    }
}

impl From<Goal> for (Option<i32>, Option<i32>) {
    fn from(g: Goal) -> Self {
        (g.row, g.col)
    }
}

impl From<Coordinate> for Goal {
    fn from(c: Coordinate) -> Self {
        Goal::cell(c)
    }
}

/// The kind of an action. Only `Move` is produced by the move generator, the
/// wall kinds exist so that host actions can be read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// move the pawn, wire tag `P`
    Move,
    /// place a horizontal wall, wire tag `WH`
    HorizontalWall,
    /// place a vertical wall, wire tag `WV`
    VerticalWall,
}

impl ActionKind {
    /// the tag the host expects for this action kind
    pub fn as_tag(&self) -> &'static str {
        match self {
            ActionKind::Move => "P",
            ActionKind::HorizontalWall => "WH",
            ActionKind::VerticalWall => "WV",
        }
    }
}

impl FromStr for ActionKind {
    type Err = UnknownActionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(ActionKind::Move),
            "WH" => Ok(ActionKind::HorizontalWall),
            "WV" => Ok(ActionKind::VerticalWall),
            other => Err(UnknownActionKind(other.to_string())),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// An action an agent can answer a `play` call with. Encoded on the wire as
/// the 3-tuple `[tag, row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "(String, i32, i32)",
    into = "(&'static str, i32, i32)"
)]
pub struct Action {
    #[allow(missing_docs)]
    pub kind: ActionKind,
    #[allow(missing_docs)]
    pub target: Coordinate,
}

impl Action {
    /// a pawn move to `target`
    pub fn pawn_move(target: Coordinate) -> Self {
        Action {
            kind: ActionKind::Move,
            target,
        }
    }

    /// the wire 3-tuple for this action
    pub fn to_wire(&self) -> (&'static str, i32, i32) {
        (*self).into()
    }
}

impl From<Action> for (&'static str, i32, i32) {
    fn from(a: Action) -> Self {
        (a.kind.as_tag(), a.target.row, a.target.col)
    }
}

impl TryFrom<(String, i32, i32)> for Action {
    type Error = UnknownActionKind;

    fn try_from((tag, row, col): (String, i32, i32)) -> Result<Self, Self::Error> {
        Ok(Action {
            kind: tag.parse()?,
            target: Coordinate::new(row, col),
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.target)
    }
}

/// A game for which the size of the playable square can be determined
pub trait SizeDeterminableGame {
    /// the playable bound used for move legality
    fn get_size(&self) -> i32;
    #[allow(missing_docs)]
    fn get_rows(&self) -> i32;
    #[allow(missing_docs)]
    fn get_cols(&self) -> i32;

    /// is this position outside the playable square
    fn off_board(&self, pos: Coordinate) -> bool {
        !pos.in_bounds(self.get_size())
    }
}

/// A game for which the pawn of each player can be got
pub trait PawnGettableGame {
    /// all pawns, indexed by player
    fn get_pawns(&self) -> &[Coordinate];

    /// number of players in this game
    fn player_count(&self) -> usize {
        self.get_pawns().len()
    }

    /// get the pawn for a given player
    fn get_pawn(&self, player: usize) -> Result<Coordinate, OutOfRangeError> {
        self.get_pawns()
            .get(player)
            .copied()
            .ok_or(OutOfRangeError {
                player: i64::try_from(player).unwrap_or(i64::MAX),
                player_count: self.player_count(),
            })
    }

    /// check if any pawn stands on the given position
    fn is_occupied(&self, pos: Coordinate) -> bool {
        self.get_pawns().contains(&pos)
    }
}

/// A game for which each player's remaining walls can be got
pub trait WallBudgetGettableGame {
    /// walls the given player may still place
    fn walls_left(&self, player: usize) -> Result<i32, OutOfRangeError>;
}

/// a game for which the legal moves of a player can be determined
pub trait LegalMovesGame {
    /// returns the legal pawn moves for `player`, in generation order
    fn legal_moves(&self, player: usize) -> Result<Vec<Action>, OutOfRangeError>;
}
