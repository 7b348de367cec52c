//! the decoded snapshot of a game, rebuilt from the percepts on every turn
use crate::errors::OutOfRangeError;
use crate::move_generation;
use crate::types::{
    Action, Coordinate, Goal, LegalMovesGame, PawnGettableGame, SizeDeterminableGame,
    WallBudgetGettableGame,
};
use fxhash::FxHashSet;
use itertools::Itertools;
use std::convert::TryFrom;
use std::fmt;

/// Typed board state for one turn. Nothing here is validated against the
/// rules; two pawns on one cell or a pawn off the board decode fine and are
/// only caught by the move generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// pawn positions, indexed by player
    pub pawns: Vec<Coordinate>,
    /// goals in the order the host sent them
    pub goals: Vec<Goal>,
    /// walls each player may still place, indexed by player
    pub wall_budget: Vec<i32>,
    /// anchors of placed horizontal walls, in wire order
    pub horizontal_walls: Vec<Coordinate>,
    /// anchors of placed vertical walls, in wire order
    pub vertical_walls: Vec<Coordinate>,
    #[allow(missing_docs)]
    pub rows: i32,
    #[allow(missing_docs)]
    pub cols: i32,
    /// the playable bound used for legality, independent of rows and cols
    pub size: i32,
}

impl BoardState {
    /// is there a horizontal wall anchored at `pos`
    pub fn has_horizontal_wall(&self, pos: Coordinate) -> bool {
        self.horizontal_walls.contains(&pos)
    }

    /// is there a vertical wall anchored at `pos`
    pub fn has_vertical_wall(&self, pos: Coordinate) -> bool {
        self.vertical_walls.contains(&pos)
    }

    /// the goal sent for a given player, if the host sent one per player
    pub fn goal_for(&self, player: usize) -> Option<Goal> {
        self.goals.get(player).copied()
    }
}

impl SizeDeterminableGame for BoardState {
    fn get_size(&self) -> i32 {
        self.size
    }

    fn get_rows(&self) -> i32 {
        self.rows
    }

    fn get_cols(&self) -> i32 {
        self.cols
    }
}

impl PawnGettableGame for BoardState {
    fn get_pawns(&self) -> &[Coordinate] {
        &self.pawns
    }
}

impl WallBudgetGettableGame for BoardState {
    fn walls_left(&self, player: usize) -> Result<i32, OutOfRangeError> {
        self.wall_budget
            .get(player)
            .copied()
            .ok_or(OutOfRangeError {
                player: i64::try_from(player).unwrap_or(i64::MAX),
                player_count: self.wall_budget.len(),
            })
    }
}

impl LegalMovesGame for BoardState {
    fn legal_moves(&self, player: usize) -> Result<Vec<Action>, OutOfRangeError> {
        move_generation::legal_moves(self, player)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let horizontal: FxHashSet<Coordinate> = self.horizontal_walls.iter().copied().collect();
        let vertical: FxHashSet<Coordinate> = self.vertical_walls.iter().copied().collect();
        writeln!(f)?;
        for i in 0..self.size {
            for j in 0..self.size {
                let here = Coordinate::new(i, j);
                match self.pawns.iter().position(|p| *p == here) {
                    Some(player) => write!(f, "P{}", player)?,
                    None => write!(f, "..")?,
                }
                if vertical.contains(&here) || vertical.contains(&Coordinate::new(i - 1, j)) {
                    write!(f, "|")?;
                } else {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
            for j in 0..self.size {
                if horizontal.contains(&Coordinate::new(i, j)) {
                    write!(f, "---")?;
                } else if horizontal.contains(&Coordinate::new(i, j - 1)) {
                    write!(f, "-- ")?;
                } else if vertical.contains(&Coordinate::new(i, j)) {
                    write!(f, "  |")?;
                } else {
                    write!(f, "   ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "walls left: [{}]", self.wall_budget.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardState {
        BoardState {
            pawns: vec![Coordinate::new(0, 1), Coordinate::new(2, 1)],
            goals: vec![Goal::row(2), Goal::row(0)],
            wall_budget: vec![3, 1],
            horizontal_walls: vec![Coordinate::new(0, 0)],
            vertical_walls: vec![Coordinate::new(1, 1)],
            rows: 3,
            cols: 3,
            size: 3,
        }
    }

    #[test]
    fn test_pawn_gettable() {
        let b = board();
        assert_eq!(2, b.player_count());
        assert_eq!(Ok(Coordinate::new(2, 1)), b.get_pawn(1));
        assert_eq!(
            Err(OutOfRangeError {
                player: 2,
                player_count: 2
            }),
            b.get_pawn(2)
        );
        assert!(b.is_occupied(Coordinate::new(0, 1)));
        assert!(!b.is_occupied(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_walls() {
        let b = board();
        assert_eq!(Ok(3), b.walls_left(0));
        assert!(b.walls_left(4).is_err());
        assert!(b.has_horizontal_wall(Coordinate::new(0, 0)));
        assert!(!b.has_horizontal_wall(Coordinate::new(1, 1)));
        assert!(b.has_vertical_wall(Coordinate::new(1, 1)));
        assert_eq!(Some(Goal::row(0)), b.goal_for(1));
        assert_eq!(None, b.goal_for(2));
    }

    #[test]
    fn test_size_is_not_rows() {
        let mut b = board();
        b.rows = 9;
        b.cols = 9;
        assert_eq!(3, b.get_size());
        assert_eq!(9, b.get_rows());
        assert!(b.off_board(Coordinate::new(3, 0)));
        assert!(!b.off_board(Coordinate::new(2, 2)));
    }

    #[test]
    fn test_display() {
        let rendered = board().to_string();
        let expected = [
            "",
            ".. P0 .. ",
            "-----    ",
            ".. ..|.. ",
            "     |   ",
            ".. P1|.. ",
            "         ",
            "walls left: [3, 1]",
        ]
        .join("\n");
        eprintln!("{}", rendered);
        assert_eq!(expected, rendered);
    }
}
