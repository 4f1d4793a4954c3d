//! Board scans that find partial runs of one color and the slots that
//! would extend them.

use rand::Rng;

use super::sequence::{Direction, DropSequence, SingleCandidate};
use crate::game::{column_key, Board, DropColor, COLUMNS};

/// Completed turns before CPU players start analysing the board.
pub const OPENING_TURN_COUNT: usize = 4;

/// Run lengths the analyzer looks for.
pub const MIN_SEQUENCE: usize = 2;
pub const MAX_SEQUENCE: usize = 3;

/// Every window of `length` contiguous slots holding `color`, on every line.
fn scan_runs(board: &Board, color: DropColor, length: usize) -> Vec<DropSequence> {
    let mut sequences = Vec::new();
    for line in board.all_lines() {
        for window in line.line().positions().windows(length) {
            if window.iter().all(|&pos| board.slot(pos).holds(color)) {
                sequences.push(DropSequence::new(board, window.to_vec()));
            }
        }
    }
    sequences
}

/// Runs of exactly `length` (2 or 3) drops of `color`. Pairs that lie inside
/// a run of three are left out. Other lengths yield nothing.
pub fn sequences_of_length(board: &Board, color: DropColor, length: usize) -> Vec<DropSequence> {
    match length {
        MAX_SEQUENCE => scan_runs(board, color, MAX_SEQUENCE),
        MIN_SEQUENCE => {
            let threes = scan_runs(board, color, MAX_SEQUENCE);
            scan_runs(board, color, MIN_SEQUENCE)
                .into_iter()
                .filter(|two| !threes.iter().any(|three| two.is_sub_sequence_of(three)))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Runs of three followed by the remaining runs of two.
pub fn all_sequences(board: &Board, color: DropColor) -> Vec<DropSequence> {
    let mut sequences = sequences_of_length(board, color, MAX_SEQUENCE);
    sequences.extend(sequences_of_length(board, color, MIN_SEQUENCE));
    sequences
}

/// Runs of `color` in one of `directions` with at least one legal
/// extension slot.
pub fn extendable_sequences(
    board: &Board,
    color: DropColor,
    directions: &[Direction],
) -> Vec<DropSequence> {
    all_sequences(board, color)
        .into_iter()
        .filter(|seq| seq.is_extendable() && directions.contains(&seq.direction()))
        .collect()
}

/// Drops of `color` that are not part of any run of two or three, each with
/// its playable neighbours.
pub fn single_token_candidates(board: &Board, color: DropColor) -> Vec<SingleCandidate> {
    let sequences = all_sequences(board, color);
    board
        .slots()
        .filter(|slot| slot.holds(color))
        .map(|slot| slot.position())
        .filter(|&pos| !sequences.iter().any(|seq| seq.contains(pos)))
        .map(|pos| SingleCandidate::new(board, pos))
        .collect()
}

pub fn is_opening(board: &Board) -> bool {
    board.count_occupied() < OPENING_TURN_COUNT
}

/// A random column, leaving out the outermost column on each side.
/// `None` if the drawn column is already full.
pub fn opening_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<char> {
    let id = rng.random_range(2..COLUMNS);
    board
        .column_by_id(id)
        .filter(|column| column.has_empty_slots())
        .and_then(|_| column_key(id))
}
