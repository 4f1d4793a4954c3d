use serde::{Deserialize, Serialize};

use super::line::{DiagonalDirection, Line, LineKind, LineView, CONNECT};
use super::slot::{column_id, DropColor, Position, Slot, Step, COLUMNS, ROWS};
use crate::error::MoveError;

/// A completed four-in-a-row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFour {
    pub color: DropColor,
    pub line_key: String,
    /// Winning slots in line order.
    pub slots: Vec<Position>,
}

/// The 7x6 grid. Owns every slot; columns, rows and diagonals only hold
/// positions into the slot arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Slot>,
    columns: Vec<Line>,
    rows: Vec<Line>,
    diagonals: Vec<Line>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            slots: (0..COLUMNS * ROWS).map(|i| Slot::new(Position::from_index(i))).collect(),
            columns: (1..=COLUMNS).map(Line::column).collect(),
            rows: (1..=ROWS).map(Line::row).collect(),
            diagonals: build_diagonals(),
        }
    }

    pub fn slot(&self, position: Position) -> &Slot {
        &self.slots[position.index()]
    }

    /// Every slot, column by column, bottom to top.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn neighbour(&self, position: Position, step: Step) -> Option<&Slot> {
        position.step(step).map(|pos| self.slot(pos))
    }

    /// A drop can land here next: the slot is empty and sits on the bottom
    /// row or on an occupied slot.
    pub fn is_playable(&self, position: Position) -> bool {
        self.slot(position).is_empty()
            && self
                .neighbour(position, Step::Bottom)
                .map_or(true, |below| !below.is_empty())
    }

    /// Drop `color` into the column with the given key (case-insensitive).
    /// Returns the slot the drop landed in.
    pub fn insert(&mut self, column_key: char, color: DropColor) -> Result<Slot, MoveError> {
        if !color.is_set() {
            return Err(MoveError::InvalidColor);
        }
        let id = column_id(column_key).ok_or_else(|| MoveError::InvalidColumn(column_key.to_string()))?;
        let target = self.columns[id - 1]
            .positions()
            .iter()
            .copied()
            .find(|&pos| self.slot(pos).is_empty())
            .ok_or(MoveError::ColumnFull(column_key.to_ascii_uppercase()))?;

        let slot = &mut self.slots[target.index()];
        slot.set_drop(color)?;
        Ok(*slot)
    }

    /// Clear every slot. The geometry is left untouched.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Columns, rows and diagonals.
    pub fn all_lines(&self) -> impl Iterator<Item = LineView<'_>> {
        self.columns
            .iter()
            .chain(self.rows.iter())
            .chain(self.diagonals.iter())
            .map(move |line| LineView::new(self, line))
    }

    pub fn columns(&self) -> impl Iterator<Item = LineView<'_>> {
        self.columns.iter().map(move |line| LineView::new(self, line))
    }

    pub fn rows(&self) -> impl Iterator<Item = LineView<'_>> {
        self.rows.iter().map(move |line| LineView::new(self, line))
    }

    pub fn diagonals(&self) -> impl Iterator<Item = LineView<'_>> {
        self.diagonals.iter().map(move |line| LineView::new(self, line))
    }

    pub fn column_by_key(&self, key: char) -> Option<LineView<'_>> {
        column_id(key).and_then(|id| self.column_by_id(id))
    }

    /// 1-based column id.
    pub fn column_by_id(&self, id: usize) -> Option<LineView<'_>> {
        id.checked_sub(1)
            .and_then(|i| self.columns.get(i))
            .map(|line| LineView::new(self, line))
    }

    /// 1-based row id, row 1 at the bottom.
    pub fn row(&self, id: usize) -> Option<LineView<'_>> {
        id.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|line| LineView::new(self, line))
    }

    pub fn count_empty(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_empty()).count()
    }

    pub fn count_occupied(&self) -> usize {
        self.slots.len() - self.count_empty()
    }

    pub fn count_drops(&self, color: DropColor) -> usize {
        self.slots.iter().filter(|slot| slot.holds(color)).count()
    }

    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Key of the leftmost column that still accepts a drop.
    pub fn first_open_column(&self) -> Option<char> {
        self.columns()
            .find(|column| column.has_empty_slots())
            .and_then(|column| column.slots().next().map(|slot| slot.position().column_key()))
    }

    /// Scan every line for four in a row. Within a line red is checked
    /// before yellow.
    pub fn connect_four(&self) -> Option<ConnectFour> {
        self.all_lines().find_map(|line| {
            let color = [DropColor::Red, DropColor::Yellow]
                .into_iter()
                .find(|&color| line.has_connect_four(color))?;
            let slots = line
                .connect_four_slots()?
                .into_iter()
                .map(Slot::position)
                .collect();
            Some(ConnectFour {
                color,
                line_key: line.key(),
                slots,
            })
        })
    }

    /// Serializable traversal of every line's slots.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            lines: self
                .all_lines()
                .map(|line| LineSnapshot {
                    kind: match line.kind() {
                        LineKind::Column(_) => "column",
                        LineKind::Row(_) => "row",
                        LineKind::Diagonal(_) => "diagonal",
                    }
                    .to_string(),
                    key: line.key(),
                    slots: line
                        .slots()
                        .map(|slot| SlotSnapshot {
                            key: slot.key(),
                            color: slot.color(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Build both diagonal families. Each family is seeded from one edge row
/// (top for down-right, bottom for up-right) and from the leftmost column;
/// diagonals shorter than four and repeated endpoint pairs are dropped.
fn build_diagonals() -> Vec<Line> {
    let mut diagonals: Vec<Line> = Vec::new();

    for (direction, edge_row) in [
        (DiagonalDirection::DownRight, ROWS),
        (DiagonalDirection::UpRight, 1),
    ] {
        let seeds = (1..=COLUMNS)
            .filter_map(|column| Position::new(column, edge_row))
            .chain((1..=ROWS).filter_map(|row| Position::new(1, row)));

        for start in seeds {
            let diagonal = Line::diagonal(start, direction);
            if diagonal.len() >= CONNECT && !diagonals.iter().any(|d| d.same_endpoints(&diagonal)) {
                diagonals.push(diagonal);
            }
        }
    }

    diagonals
}

/// Every line of the board with its slot colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub lines: Vec<LineSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSnapshot {
    pub kind: String,
    pub key: String,
    pub slots: Vec<SlotSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub key: String,
    pub color: DropColor,
}
