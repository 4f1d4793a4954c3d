use super::board::{Board, ConnectFour};
use super::slot::{DropColor, Position};

/// Snapshot of the game after the latest drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    connect_four: Option<ConnectFour>,
    turns_remaining: usize,
    turns_completed: usize,
    red_drops: usize,
    yellow_drops: usize,
    current_color: DropColor,
}

impl GameStatus {
    /// Recompute everything from the board. `start_color` is the color of
    /// the player who opened the game.
    pub fn evaluate(board: &Board, start_color: DropColor) -> Self {
        let turns_completed = board.count_occupied();
        // Even number of completed turns: the start player moves.
        let current_color = if turns_completed % 2 == 0 {
            start_color
        } else {
            start_color.other()
        };

        GameStatus {
            connect_four: board.connect_four(),
            turns_remaining: board.count_empty(),
            turns_completed,
            red_drops: board.count_drops(DropColor::Red),
            yellow_drops: board.count_drops(DropColor::Yellow),
            current_color,
        }
    }

    pub fn turns_remaining(&self) -> usize {
        self.turns_remaining
    }

    pub fn turns_completed(&self) -> usize {
        self.turns_completed
    }

    pub fn red_drops(&self) -> usize {
        self.red_drops
    }

    pub fn yellow_drops(&self) -> usize {
        self.yellow_drops
    }

    pub fn total_drops(&self) -> usize {
        self.red_drops + self.yellow_drops
    }

    pub fn current_color(&self) -> DropColor {
        self.current_color
    }

    pub fn is_connect_four(&self) -> bool {
        self.connect_four.is_some()
    }

    pub fn connect_four(&self) -> Option<&ConnectFour> {
        self.connect_four.as_ref()
    }

    pub fn winner_color(&self) -> Option<DropColor> {
        self.connect_four.as_ref().map(|win| win.color)
    }

    /// Present only when four in a row was found.
    pub fn winning_slots(&self) -> Option<&[Position]> {
        self.connect_four.as_ref().map(|win| win.slots.as_slice())
    }

    pub fn is_draw(&self) -> bool {
        !self.is_connect_four() && self.turns_remaining == 0
    }

    pub fn is_over(&self) -> bool {
        self.is_connect_four() || self.turns_remaining == 0
    }
}
