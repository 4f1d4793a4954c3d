use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::analyzer::{extendable_sequences, is_opening, opening_column, single_token_candidates};
use super::sequence::{Direction, DropSequence};
use crate::error::MoveError;
use crate::game::{Board, DropColor};

/// Skill tier of a CPU player. Tiers differ only in which run directions
/// they look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Easy,
    Advanced,
    Hard,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Easy, Strategy::Advanced, Strategy::Hard];

    pub fn directions(self) -> &'static [Direction] {
        match self {
            Strategy::Easy => &[Direction::Column],
            Strategy::Advanced => &[Direction::Row, Direction::Column, Direction::DiagonalUpRight],
            Strategy::Hard => &[
                Direction::Row,
                Direction::Column,
                Direction::DiagonalUpRight,
                Direction::DiagonalLowRight,
            ],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Easy => "easy",
            Strategy::Advanced => "advanced",
            Strategy::Hard => "hard",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the column `color` should play next.
///
/// Opening turns go to a random inner column. Afterwards, in order:
/// extend an own run, block an opponent run, grow an isolated own drop,
/// take the leftmost open column. Longer runs win over shorter ones inside
/// each step; remaining ties are broken at random.
///
/// Returns `Ok(None)` when the board is full.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    color: DropColor,
    strategy: Strategy,
    rng: &mut R,
) -> Result<Option<char>, MoveError> {
    if !color.is_set() {
        return Err(MoveError::InvalidColor);
    }

    if is_opening(board) {
        if let Some(column) = opening_column(board, rng) {
            debug!(%color, %strategy, column = %column, "opening move");
            return Ok(Some(column));
        }
    }

    let directions = strategy.directions();

    let own = extendable_sequences(board, color, directions);
    if let Some(column) = pick_sequence(&own, rng) {
        debug!(%color, %strategy, column = %column, "extending own run");
        return Ok(Some(column));
    }

    let opponent = extendable_sequences(board, color.other(), directions);
    if let Some(column) = pick_sequence(&opponent, rng) {
        debug!(%color, %strategy, column = %column, "blocking opponent run");
        return Ok(Some(column));
    }

    let singles: Vec<_> = single_token_candidates(board, color)
        .into_iter()
        .filter(|single| !single.targets.is_empty())
        .collect();
    if !singles.is_empty() {
        let single = &singles[rng.random_range(0..singles.len())];
        if let Some(column) = single.target_column(rng) {
            debug!(%color, %strategy, column = %column, "growing single drop");
            return Ok(Some(column));
        }
    }

    let fallback = board.first_open_column();
    debug!(%color, %strategy, column = ?fallback, "fallback move");
    Ok(fallback)
}

/// Random choice among the longest extendable runs.
fn pick_sequence<R: Rng + ?Sized>(sequences: &[DropSequence], rng: &mut R) -> Option<char> {
    let longest = sequences.iter().map(DropSequence::len).max()?;
    let best: Vec<&DropSequence> = sequences.iter().filter(|seq| seq.len() == longest).collect();
    best[rng.random_range(0..best.len())].target_column(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_with(moves: &[(char, DropColor)]) -> Board {
        let mut board = Board::new();
        for &(key, color) in moves {
            board.insert(key, color).unwrap();
        }
        board
    }

    fn choices(board: &Board, color: DropColor, strategy: Strategy) -> Vec<char> {
        (0..40)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                choose_move(board, color, strategy, &mut rng).unwrap().unwrap()
            })
            .collect()
    }

    const R: DropColor = DropColor::Red;
    const Y: DropColor = DropColor::Yellow;

    #[test]
    fn test_opening_moves_stay_inside() {
        let board = board_with(&[('D', R), ('D', Y)]);
        for strategy in Strategy::ALL {
            for column in choices(&board, R, strategy) {
                assert!(('B'..='F').contains(&column), "unexpected column {column}");
            }
        }
    }

    #[test]
    fn test_extends_own_column_run() {
        let board = board_with(&[('A', R), ('G', Y), ('A', R), ('G', Y), ('A', R)]);
        for strategy in Strategy::ALL {
            assert!(choices(&board, R, strategy).iter().all(|&c| c == 'A'));
        }
    }

    #[test]
    fn test_prefers_longer_own_run() {
        // Red: C1-C3 column and a row pair E1-F1.
        let board = board_with(&[('C', R), ('A', Y), ('C', R), ('A', Y), ('C', R), ('E', R), ('F', R)]);
        assert!(choices(&board, R, Strategy::Hard).iter().all(|&c| c == 'C'));
    }

    #[test]
    fn test_blocks_opponent_column_run() {
        let board = board_with(&[('C', Y), ('E', R), ('C', Y), ('G', R), ('C', Y)]);
        for strategy in Strategy::ALL {
            assert!(choices(&board, R, strategy).iter().all(|&c| c == 'C'));
        }
    }

    #[test]
    fn test_easy_misses_row_threat_hard_blocks_it() {
        let board = board_with(&[('B', Y), ('F', R), ('C', Y), ('D', Y)]);

        for strategy in [Strategy::Advanced, Strategy::Hard] {
            for column in choices(&board, R, strategy) {
                assert!(column == 'A' || column == 'E', "unexpected column {column}");
            }
        }

        // Easy only sees columns, so it grows its lone drop on F1 instead.
        let easy = choices(&board, R, Strategy::Easy);
        assert!(easy.iter().all(|c| ['E', 'F', 'G'].contains(c)));
        assert!(easy.iter().any(|c| *c == 'F' || *c == 'G'));
    }

    #[test]
    fn test_only_hard_sees_low_right_diagonal() {
        // Yellow holds A4, B3, C2 down-right with D1 open, plus a pair C1-C2.
        // Red has no run it could still extend.
        let board = board_with(&[
            ('A', Y),
            ('A', R),
            ('A', R),
            ('A', Y),
            ('B', R),
            ('B', R),
            ('B', Y),
            ('C', Y),
            ('C', Y),
        ]);
        assert!(all_red_runs_blocked(&board));
        let yellow_diagonal = extendable_sequences(&board, Y, &[Direction::DiagonalLowRight]);
        assert_eq!(yellow_diagonal.len(), 1);
        assert_eq!(yellow_diagonal[0].after().map(|p| p.key()), Some("D1".to_string()));

        assert!(choices(&board, R, Strategy::Hard).iter().all(|&c| c == 'D'));
        for strategy in [Strategy::Easy, Strategy::Advanced] {
            assert!(choices(&board, R, strategy).iter().all(|&c| c == 'C'));
        }
    }

    fn all_red_runs_blocked(board: &Board) -> bool {
        extendable_sequences(board, R, Strategy::Hard.directions()).is_empty()
    }

    #[test]
    fn test_full_board_has_no_move() {
        let (r, y) = (R, Y);
        let outer = [r, r, y, y, r, r];
        let center = [y, y, r, r, y, y];
        let mut board = Board::new();
        for key in ['A', 'B', 'C', 'D', 'E', 'F', 'G'] {
            for color in if key == 'D' { center } else { outer } {
                board.insert(key, color).unwrap();
            }
        }
        let mut rng = StdRng::seed_from_u64(1);
        for strategy in Strategy::ALL {
            assert_eq!(choose_move(&board, R, strategy, &mut rng), Ok(None));
        }
    }

    #[test]
    fn test_unset_color_is_rejected() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            choose_move(&board, DropColor::Unset, Strategy::Hard, &mut rng),
            Err(MoveError::InvalidColor)
        );
    }

    #[test]
    fn test_strategy_directions() {
        assert_eq!(Strategy::Easy.directions(), &[Direction::Column]);
        assert_eq!(Strategy::Advanced.directions().len(), 3);
        assert!(!Strategy::Advanced.directions().contains(&Direction::DiagonalLowRight));
        assert_eq!(Strategy::Hard.directions().len(), 4);
    }
}
