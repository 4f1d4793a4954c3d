use super::board::Board;
use super::slot::{column_key, DropColor, Position, Slot, Step};

/// Number of aligned drops needed to win.
pub const CONNECT: usize = 4;

/// Walking direction of a diagonal, always left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalDirection {
    /// One column right, one row down.
    DownRight,
    /// One column right, one row up.
    UpRight,
}

impl DiagonalDirection {
    fn step(self) -> Step {
        match self {
            DiagonalDirection::DownRight => Step::LowRight,
            DiagonalDirection::UpRight => Step::UpRight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// 1-based column id; slots ordered bottom to top.
    Column(usize),
    /// 1-based row id; slots ordered left to right.
    Row(usize),
    Diagonal(DiagonalDirection),
}

/// An ordered, fixed sequence of slot positions owned by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    slots: Vec<Position>,
}

impl Line {
    pub(crate) fn column(id: usize) -> Line {
        Line {
            kind: LineKind::Column(id),
            slots: (1..=super::ROWS).filter_map(|row| Position::new(id, row)).collect(),
        }
    }

    pub(crate) fn row(id: usize) -> Line {
        Line {
            kind: LineKind::Row(id),
            slots: (1..=super::COLUMNS)
                .filter_map(|column| Position::new(column, id))
                .collect(),
        }
    }

    /// Walk from `start` along `direction` until the board edge.
    pub(crate) fn diagonal(start: Position, direction: DiagonalDirection) -> Line {
        let mut slots = vec![start];
        let mut current = start;
        while let Some(next) = current.step(direction.step()) {
            slots.push(next);
            current = next;
        }
        Line {
            kind: LineKind::Diagonal(direction),
            slots,
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn positions(&self) -> &[Position] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn start(&self) -> Option<Position> {
        self.slots.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.slots.last().copied()
    }

    /// True when both lines span the same unordered (start, end) pair.
    pub fn same_endpoints(&self, other: &Line) -> bool {
        let (a, b) = (self.start(), self.end());
        let (c, d) = (other.start(), other.end());
        (a == c && b == d) || (a == d && b == c)
    }

    /// `"C"` for columns, `"3"` for rows, `"A6-F1"` for diagonals.
    pub fn key(&self) -> String {
        match self.kind {
            LineKind::Column(id) => column_key(id).map(String::from).unwrap_or_default(),
            LineKind::Row(id) => id.to_string(),
            LineKind::Diagonal(_) => match (self.start(), self.end()) {
                (Some(start), Some(end)) => format!("{start}-{end}"),
                _ => String::new(),
            },
        }
    }
}

/// A line paired with the board whose slots it references.
#[derive(Debug, Clone, Copy)]
pub struct LineView<'a> {
    board: &'a Board,
    line: &'a Line,
}

impl<'a> LineView<'a> {
    pub(crate) fn new(board: &'a Board, line: &'a Line) -> Self {
        LineView { board, line }
    }

    pub fn line(&self) -> &'a Line {
        self.line
    }

    pub fn kind(&self) -> LineKind {
        self.line.kind
    }

    pub fn key(&self) -> String {
        self.line.key()
    }

    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    pub fn is_column(&self) -> bool {
        matches!(self.line.kind, LineKind::Column(_))
    }

    pub fn slots(&self) -> impl Iterator<Item = &'a Slot> + 'a {
        let (board, line) = (self.board, self.line);
        line.slots.iter().map(move |&pos| board.slot(pos))
    }

    pub fn as_list(&self) -> Vec<&'a Slot> {
        self.slots().collect()
    }

    /// Whether four consecutive slots all hold `color`.
    pub fn has_connect_four(&self, color: DropColor) -> bool {
        color.is_set() && self.first_four(Some(color)).is_some()
    }

    /// The first run of four identical, non-empty slots, in line order.
    pub fn connect_four_slots(&self) -> Option<Vec<&'a Slot>> {
        let slots = self.as_list();
        self.first_four(None)
            .map(|start| slots[start..start + CONNECT].to_vec())
    }

    /// Start index of the first window whose anchor matches every one of the
    /// following three slots. `None` as color accepts either player.
    fn first_four(&self, color: Option<DropColor>) -> Option<usize> {
        let slots = self.as_list();
        slots.windows(CONNECT).position(|window| {
            let anchor = window[0];
            !anchor.is_empty()
                && color.map_or(true, |c| anchor.color() == c)
                && window[1..].iter().all(|slot| slot.holds(anchor.color()))
        })
    }

    /// Lowest empty slot of a column. Other line kinds return the first empty
    /// slot in line order.
    pub fn next_empty_slot(&self) -> Option<&'a Slot> {
        self.slots().find(|slot| slot.is_empty())
    }

    pub fn has_empty_slots(&self) -> bool {
        self.next_empty_slot().is_some()
    }

    pub fn drop_count(&self, color: DropColor) -> usize {
        self.slots().filter(|slot| slot.holds(color)).count()
    }

    /// Neighbouring column to the left; `None` at the edge or for non-columns.
    pub fn left(&self) -> Option<LineView<'a>> {
        match self.line.kind {
            LineKind::Column(id) if id > 1 => self.board.column_by_id(id - 1),
            _ => None,
        }
    }

    /// Neighbouring column to the right; `None` at the edge or for non-columns.
    pub fn right(&self) -> Option<LineView<'a>> {
        match self.line.kind {
            LineKind::Column(id) => self.board.column_by_id(id + 1),
            _ => None,
        }
    }
}
