//! legal pawn move generation
use crate::errors::OutOfRangeError;
use crate::types::{Action, Coordinate, Direction, PawnGettableGame, SizeDeterminableGame};
use fxhash::FxHashSet;
use tracing::instrument;

/// Returns the legal single step pawn moves for `player`.
///
/// Candidates are generated in the fixed order down (row + 1), up (row - 1),
/// right (col + 1), left (col - 1) and kept when the target is inside the
/// `size` x `size` square and no pawn stands on it.
///
/// Walls are not consulted: a step through a placed wall is still reported
/// as legal. Jumps over adjacent pawns are not generated either.
#[instrument(level = "trace", skip(game))]
pub fn legal_moves<G>(game: &G, player: usize) -> Result<Vec<Action>, OutOfRangeError>
where
    G: PawnGettableGame + SizeDeterminableGame,
{
    let from = game.get_pawn(player)?;
    let occupied: FxHashSet<Coordinate> = game.get_pawns().iter().copied().collect();

    Ok(Direction::all()
        .iter()
        .filter_map(|d| from.checked_add_vec(d.to_vector()))
        .filter(|target| !game.off_board(*target) && !occupied.contains(target))
        .map(Action::pawn_move)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardState;
    use crate::types::{ActionKind, Goal};
    use itertools::Itertools;

    fn board(size: i32, pawns: Vec<(i32, i32)>) -> BoardState {
        let players = pawns.len();
        BoardState {
            pawns: pawns.into_iter().map(Coordinate::from).collect(),
            goals: vec![Goal::row(size - 1); players],
            wall_budget: vec![10; players],
            horizontal_walls: vec![],
            vertical_walls: vec![],
            rows: size,
            cols: size,
            size,
        }
    }

    fn targets(actions: &[Action]) -> Vec<(i32, i32)> {
        actions.iter().map(|a| a.target.into()).collect()
    }

    #[test]
    fn test_centre_of_open_board() {
        let b = board(5, vec![(2, 2), (4, 4)]);
        let moves = legal_moves(&b, 0).unwrap();
        assert_eq!(vec![(3, 2), (1, 2), (2, 3), (2, 1)], targets(&moves));
        assert!(moves.iter().all(|a| a.kind == ActionKind::Move));
    }

    #[test]
    fn test_boxed_in_corner() {
        let b = board(5, vec![(0, 0), (1, 0), (0, 1)]);
        let moves = legal_moves(&b, 0).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn test_filters_in_place() {
        // down is occupied, up is off the board
        let b = board(5, vec![(0, 3), (1, 3)]);
        let moves = legal_moves(&b, 0).unwrap();
        assert_eq!(vec![(0, 4), (0, 2)], targets(&moves));
    }

    #[test]
    fn test_player_out_of_range() {
        let b = board(5, vec![(0, 0), (4, 4)]);
        assert_eq!(
            Err(OutOfRangeError {
                player: 5,
                player_count: 2
            }),
            legal_moves(&b, 5)
        );
    }

    #[test]
    fn test_uses_size_not_rows() {
        let mut b = board(3, vec![(2, 2), (0, 0)]);
        b.rows = 9;
        b.cols = 9;
        let moves = legal_moves(&b, 0).unwrap();
        assert_eq!(vec![(1, 2), (2, 1)], targets(&moves));
    }

    #[test]
    fn test_walls_do_not_block() {
        let mut b = board(5, vec![(2, 2), (4, 4)]);
        b.horizontal_walls = vec![Coordinate::new(2, 1), Coordinate::new(1, 1)];
        b.vertical_walls = vec![Coordinate::new(1, 2), Coordinate::new(1, 1)];
        assert_eq!(4, legal_moves(&b, 0).unwrap().len());
    }

    #[test]
    fn test_pawn_off_board_and_stacked_pawns() {
        let b = board(3, vec![(-1, 1), (-1, 1), (5, 5)]);
        assert_eq!(vec![(0, 1)], targets(&legal_moves(&b, 0).unwrap()));
        assert!(legal_moves(&b, 2).unwrap().is_empty());
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let b = board(5, vec![(i32::MAX, i32::MIN)]);
        assert!(legal_moves(&b, 0).unwrap().is_empty());
    }

    #[test]
    fn test_soundness_and_completeness_everywhere() {
        let size = 4;
        let other = Coordinate::new(1, 2);
        for (row, col) in (0..size).cartesian_product(0..size) {
            let me = Coordinate::new(row, col);
            if me == other {
                continue;
            }
            let b = board(size, vec![(row, col), (other.row, other.col)]);
            let moves = legal_moves(&b, 0).unwrap();

            for a in moves.iter() {
                assert!(a.target.in_bounds(size));
                assert!(!b.pawns.contains(&a.target));
            }

            let expected = Direction::all()
                .iter()
                .map(|d| me.checked_add_vec(d.to_vector()).unwrap())
                .filter(|c| c.in_bounds(size) && *c != other && *c != me)
                .collect::<Vec<_>>();
            let got = moves.iter().map(|a| a.target).collect::<Vec<_>>();
            assert_eq!(expected, got, "from {}", me);
            assert_eq!(got.len(), got.iter().unique().count());
        }
    }

    #[test]
    fn test_deterministic() {
        let b = board(7, vec![(3, 3), (3, 4), (6, 6)]);
        assert_eq!(legal_moves(&b, 0), legal_moves(&b, 0));
        assert_eq!(legal_moves(&b, 1), legal_moves(&b, 1));
    }
}
