use rand::Rng;

use crate::game::{Board, Position, Step};

/// Geometric direction of a run of drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Row,
    Column,
    DiagonalUpRight,
    DiagonalLowRight,
    Indeterminate,
}

impl Direction {
    /// Steps leading to the slot before the first and after the last element.
    fn extension_steps(self) -> Option<(Step, Step)> {
        match self {
            Direction::Row => Some((Step::Left, Step::Right)),
            Direction::Column => Some((Step::Bottom, Step::Top)),
            Direction::DiagonalLowRight => Some((Step::UpLeft, Step::LowRight)),
            Direction::DiagonalUpRight => Some((Step::LowLeft, Step::UpRight)),
            Direction::Indeterminate => None,
        }
    }
}

/// Classify a run from the positions of its first two slots. Row and column
/// runs must stay on one row/column throughout; diagonal runs must change
/// both coordinates at every step.
pub fn classify_direction(slots: &[Position]) -> Direction {
    let (first, second) = match slots {
        [first, second, ..] => (*first, *second),
        _ => return Direction::Indeterminate,
    };
    let pairs = || slots.windows(2).map(|pair| (pair[0], pair[1]));

    if first.row() == second.row() {
        if pairs().all(|(a, b)| a.row() == b.row()) {
            return Direction::Row;
        }
        return Direction::Indeterminate;
    }
    if first.column() == second.column() {
        if pairs().all(|(a, b)| a.column() == b.column()) {
            return Direction::Column;
        }
        return Direction::Indeterminate;
    }
    if !pairs().all(|(a, b)| a.column() != b.column() && a.row() != b.row()) {
        return Direction::Indeterminate;
    }

    let downward = first.row() > second.row();
    let rightward = first.column() < second.column();
    match (downward, rightward) {
        (true, true) => Direction::DiagonalLowRight,
        (false, true) => Direction::DiagonalUpRight,
        _ => Direction::Indeterminate,
    }
}

/// A run of contiguous same-colored slots along one line, with the empty
/// slots a drop could land in right now to extend it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSequence {
    slots: Vec<Position>,
    direction: Direction,
    before: Option<Position>,
    after: Option<Position>,
}

impl DropSequence {
    /// Classify `slots` and look up their extension points on `board`.
    pub fn new(board: &Board, slots: Vec<Position>) -> Self {
        let direction = classify_direction(&slots);
        let (before, after) = extension_points(board, &slots, direction);
        DropSequence {
            slots,
            direction,
            before,
            after,
        }
    }

    pub fn slots(&self) -> &[Position] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Legal extension slot before the first element.
    pub fn before(&self) -> Option<Position> {
        self.before
    }

    /// Legal extension slot after the last element.
    pub fn after(&self) -> Option<Position> {
        self.after
    }

    pub fn extension_points(&self) -> (Option<Position>, Option<Position>) {
        (self.before, self.after)
    }

    pub fn is_extendable(&self) -> bool {
        self.before.is_some() || self.after.is_some()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.slots.contains(&position)
    }

    pub fn is_sub_sequence_of(&self, other: &DropSequence) -> bool {
        self.slots.iter().all(|&pos| other.contains(pos))
    }

    /// Column to play to extend this run; a coin flip when both ends are open.
    pub fn target_column<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        let target = match (self.before, self.after) {
            (Some(before), Some(after)) => {
                if rng.random_bool(0.5) {
                    after
                } else {
                    before
                }
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => return None,
        };
        Some(target.column_key())
    }
}

/// The slots immediately before and after the run in its direction, kept
/// only if they are empty and gravity-playable.
pub fn extension_points(
    board: &Board,
    slots: &[Position],
    direction: Direction,
) -> (Option<Position>, Option<Position>) {
    let (Some(first), Some(last), Some((back, forward))) =
        (slots.first(), slots.last(), direction.extension_steps())
    else {
        return (None, None);
    };
    let legal = |pos: Option<Position>| pos.filter(|&p| board.is_playable(p));
    (legal(first.step(back)), legal(last.step(forward)))
}

/// An isolated drop and the neighbouring slots a drop could land in next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleCandidate {
    pub slot: Position,
    pub targets: Vec<Position>,
}

impl SingleCandidate {
    pub fn new(board: &Board, slot: Position) -> Self {
        let targets = Step::ALL
            .iter()
            .filter_map(|&step| slot.step(step))
            .filter(|&pos| board.is_playable(pos))
            .collect();
        SingleCandidate { slot, targets }
    }

    pub fn target_column<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        if self.targets.is_empty() {
            return None;
        }
        let target = self.targets[rng.random_range(0..self.targets.len())];
        Some(target.column_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DropColor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pos(key: &str) -> Position {
        let mut chars = key.chars();
        let column = crate::game::column_id(chars.next().unwrap()).unwrap();
        let row = chars.as_str().parse().unwrap();
        Position::new(column, row).unwrap()
    }

    fn positions(keys: &[&str]) -> Vec<Position> {
        keys.iter().map(|key| pos(key)).collect()
    }

    #[test]
    fn test_classify_direction() {
        assert_eq!(classify_direction(&positions(&["A1", "B1", "C1"])), Direction::Row);
        assert_eq!(classify_direction(&positions(&["C2", "C3"])), Direction::Column);
        assert_eq!(
            classify_direction(&positions(&["A1", "B2", "C3"])),
            Direction::DiagonalUpRight
        );
        assert_eq!(
            classify_direction(&positions(&["A4", "B3"])),
            Direction::DiagonalLowRight
        );
        assert_eq!(classify_direction(&positions(&["D4"])), Direction::Indeterminate);
        assert_eq!(classify_direction(&positions(&["B1", "A2"])), Direction::Indeterminate);
        assert_eq!(
            classify_direction(&positions(&["A1", "B1", "B2"])),
            Direction::Indeterminate
        );
    }

    #[test]
    fn test_row_extension_points() {
        let mut board = Board::new();
        board.insert('C', DropColor::Red).unwrap();
        board.insert('D', DropColor::Red).unwrap();

        let sequence = DropSequence::new(&board, positions(&["C1", "D1"]));
        assert_eq!(sequence.direction(), Direction::Row);
        assert_eq!(sequence.extension_points(), (Some(pos("B1")), Some(pos("E1"))));
        assert!(sequence.is_extendable());
    }

    #[test]
    fn test_floating_extension_points_are_illegal() {
        let mut board = Board::new();
        board.insert('B', DropColor::Yellow).unwrap();
        board.insert('C', DropColor::Yellow).unwrap();
        board.insert('B', DropColor::Red).unwrap();
        board.insert('C', DropColor::Red).unwrap();

        // A2 and D2 have nothing beneath them yet.
        let sequence = DropSequence::new(&board, positions(&["B2", "C2"]));
        assert_eq!(sequence.direction(), Direction::Row);
        assert_eq!(sequence.extension_points(), (None, None));
        assert!(!sequence.is_extendable());
    }

    #[test]
    fn test_column_extends_upwards_only() {
        let mut board = Board::new();
        board.insert('E', DropColor::Red).unwrap();
        board.insert('E', DropColor::Red).unwrap();

        let sequence = DropSequence::new(&board, positions(&["E1", "E2"]));
        assert_eq!(sequence.direction(), Direction::Column);
        assert_eq!(sequence.extension_points(), (None, Some(pos("E3"))));

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sequence.target_column(&mut rng), Some('E'));
    }

    #[test]
    fn test_diagonal_extension_points() {
        let mut board = Board::new();
        // Red on B2 and C3 with supports beneath; A1 empty, D4 unsupported.
        board.insert('B', DropColor::Yellow).unwrap();
        board.insert('B', DropColor::Red).unwrap();
        board.insert('C', DropColor::Yellow).unwrap();
        board.insert('C', DropColor::Yellow).unwrap();
        board.insert('C', DropColor::Red).unwrap();

        let sequence = DropSequence::new(&board, positions(&["B2", "C3"]));
        assert_eq!(sequence.direction(), Direction::DiagonalUpRight);
        assert_eq!(sequence.extension_points(), (Some(pos("A1")), None));
    }

    #[test]
    fn test_target_column_picks_either_end() {
        let mut board = Board::new();
        board.insert('C', DropColor::Red).unwrap();
        board.insert('D', DropColor::Red).unwrap();
        let sequence = DropSequence::new(&board, positions(&["C1", "D1"]));

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let column = sequence.target_column(&mut rng).unwrap();
            assert!(column == 'B' || column == 'E', "unexpected column {column}");
        }
    }

    #[test]
    fn test_sub_sequence() {
        let board = Board::new();
        let three = DropSequence::new(&board, positions(&["A1", "A2", "A3"]));
        let two = DropSequence::new(&board, positions(&["A2", "A3"]));
        let other = DropSequence::new(&board, positions(&["A3", "A4"]));
        assert!(two.is_sub_sequence_of(&three));
        assert!(!other.is_sub_sequence_of(&three));
        assert!(!three.is_sub_sequence_of(&two));
    }

    #[test]
    fn test_single_candidate_targets() {
        let mut board = Board::new();
        board.insert('D', DropColor::Red).unwrap();

        let single = SingleCandidate::new(&board, pos("D1"));
        assert_eq!(single.targets, positions(&["D2", "E1", "C1"]));

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let column = single.target_column(&mut rng).unwrap();
            assert!(['C', 'D', 'E'].contains(&column));
        }
    }
}
