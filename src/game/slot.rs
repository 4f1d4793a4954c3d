use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Number of columns on the board (A..G).
pub const COLUMNS: usize = 7;
/// Number of slots per column (rows 1..6, bottom to top).
pub const ROWS: usize = 6;

/// Color of a drop. `Unset` is the sentinel carried by empty slots and is
/// never a legal drop color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropColor {
    Red,
    Yellow,
    #[default]
    Unset,
}

impl DropColor {
    /// The color of the other player. `Unset` has no opponent.
    pub fn other(self) -> DropColor {
        match self {
            DropColor::Red => DropColor::Yellow,
            DropColor::Yellow => DropColor::Red,
            DropColor::Unset => DropColor::Unset,
        }
    }

    pub fn is_set(self) -> bool {
        self != DropColor::Unset
    }

    pub fn name(self) -> &'static str {
        match self {
            DropColor::Red => "Red",
            DropColor::Yellow => "Yellow",
            DropColor::Unset => "Unset",
        }
    }
}

impl fmt::Display for DropColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Letter key of a 1-based column id.
pub fn column_key(id: usize) -> Option<char> {
    if (1..=COLUMNS).contains(&id) {
        Some((b'A' + (id - 1) as u8) as char)
    } else {
        None
    }
}

/// 1-based column id of a letter key, case-insensitive.
pub fn column_id(key: char) -> Option<usize> {
    let upper = key.to_ascii_uppercase();
    if ('A'..='G').contains(&upper) {
        Some((upper as u8 - b'A') as usize + 1)
    } else {
        None
    }
}

/// Parse user input such as `"d"` or `" E "` into a column key.
pub fn parse_column_key(input: &str) -> Result<char, MoveError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if column_id(c).is_some() => Ok(c.to_ascii_uppercase()),
        _ => Err(MoveError::InvalidColumn(trimmed.to_string())),
    }
}

/// One of the eight neighbouring directions of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Top,
    UpRight,
    Right,
    LowRight,
    Bottom,
    LowLeft,
    Left,
    UpLeft,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::Top,
        Step::UpRight,
        Step::Right,
        Step::LowRight,
        Step::Bottom,
        Step::LowLeft,
        Step::Left,
        Step::UpLeft,
    ];

    /// (column delta, row delta)
    fn delta(self) -> (isize, isize) {
        match self {
            Step::Top => (0, 1),
            Step::UpRight => (1, 1),
            Step::Right => (1, 0),
            Step::LowRight => (1, -1),
            Step::Bottom => (0, -1),
            Step::LowLeft => (-1, -1),
            Step::Left => (-1, 0),
            Step::UpLeft => (-1, 1),
        }
    }
}

/// Fixed position of a slot. Both coordinates are 1-based; row 1 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    column: u8,
    row: u8,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Option<Position> {
        if (1..=COLUMNS).contains(&column) && (1..=ROWS).contains(&row) {
            Some(Position {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    pub fn column(self) -> usize {
        self.column as usize
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn column_key(self) -> char {
        (b'A' + self.column - 1) as char
    }

    /// Key such as `"D4"`.
    pub fn key(self) -> String {
        format!("{}{}", self.column_key(), self.row)
    }

    /// Neighbouring position, `None` past a board edge.
    pub fn step(self, step: Step) -> Option<Position> {
        let (dc, dr) = step.delta();
        let column = self.column() as isize + dc;
        let row = self.row() as isize + dr;
        if column < 1 || row < 1 {
            return None;
        }
        Position::new(column as usize, row as usize)
    }

    pub fn is_bottom(self) -> bool {
        self.row == 1
    }

    /// Index into the board's slot arena (column-major, bottom to top).
    pub(crate) fn index(self) -> usize {
        (self.column() - 1) * ROWS + (self.row() - 1)
    }

    pub(crate) fn from_index(index: usize) -> Position {
        Position {
            column: (index / ROWS + 1) as u8,
            row: (index % ROWS + 1) as u8,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_key(), self.row)
    }
}

/// A single grid cell. Empty exactly when its color is `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    position: Position,
    color: DropColor,
}

impl Slot {
    pub(crate) fn new(position: Position) -> Self {
        Slot {
            position,
            color: DropColor::Unset,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn key(&self) -> String {
        self.position.key()
    }

    pub fn color(&self) -> DropColor {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.color == DropColor::Unset
    }

    /// Whether the slot holds a drop of `color`.
    pub fn holds(&self, color: DropColor) -> bool {
        !self.is_empty() && self.color == color
    }

    pub(crate) fn set_drop(&mut self, color: DropColor) -> Result<(), MoveError> {
        if !color.is_set() {
            return Err(MoveError::InvalidColor);
        }
        self.color = color;
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.color = DropColor::Unset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_keys() {
        assert_eq!(column_key(1), Some('A'));
        assert_eq!(column_key(7), Some('G'));
        assert_eq!(column_key(0), None);
        assert_eq!(column_key(8), None);
        assert_eq!(column_id('d'), Some(4));
        assert_eq!(column_id('Z'), None);
    }

    #[test]
    fn test_parse_column_key() {
        assert_eq!(parse_column_key(" e "), Ok('E'));
        assert_eq!(
            parse_column_key("Z"),
            Err(MoveError::InvalidColumn("Z".to_string()))
        );
        assert!(parse_column_key("AB").is_err());
        assert!(parse_column_key("").is_err());
    }

    #[test]
    fn test_position_key_and_index() {
        let pos = Position::new(4, 4).unwrap();
        assert_eq!(pos.key(), "D4");
        assert_eq!(Position::from_index(pos.index()), pos);
        assert!(Position::new(8, 1).is_none());
        assert!(Position::new(1, 7).is_none());
    }

    #[test]
    fn test_position_steps_stop_at_edges() {
        let a1 = Position::new(1, 1).unwrap();
        assert_eq!(a1.step(Step::Top).map(Position::key), Some("A2".to_string()));
        assert_eq!(a1.step(Step::UpRight).map(Position::key), Some("B2".to_string()));
        assert_eq!(a1.step(Step::Left), None);
        assert_eq!(a1.step(Step::Bottom), None);
        assert_eq!(a1.step(Step::LowRight), None);

        let g6 = Position::new(7, 6).unwrap();
        assert_eq!(g6.step(Step::Top), None);
        assert_eq!(g6.step(Step::Right), None);
        assert_eq!(g6.step(Step::LowLeft).map(Position::key), Some("F5".to_string()));
    }

    #[test]
    fn test_slot_rejects_unset_color() {
        let mut slot = Slot::new(Position::new(1, 1).unwrap());
        assert!(slot.is_empty());
        assert_eq!(slot.set_drop(DropColor::Unset), Err(MoveError::InvalidColor));
        assert!(slot.is_empty());

        slot.set_drop(DropColor::Red).unwrap();
        assert!(slot.holds(DropColor::Red));
        assert!(!slot.holds(DropColor::Yellow));

        slot.clear();
        assert!(slot.is_empty());
        assert_eq!(slot.color(), DropColor::Unset);
    }

    #[test]
    fn test_other_color() {
        assert_eq!(DropColor::Red.other(), DropColor::Yellow);
        assert_eq!(DropColor::Yellow.other(), DropColor::Red);
        assert_eq!(DropColor::Unset.other(), DropColor::Unset);
    }
}
