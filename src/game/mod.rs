//! Core Connect Four model: slots and their geometry, lines with win
//! detection, the gravity-aware board, players, and the game lifecycle.

mod board;
mod line;
mod player;
mod shared;
mod slot;
mod state;
mod statistic;
mod status;

pub use board::{Board, BoardSnapshot, ConnectFour, LineSnapshot, SlotSnapshot};
pub use line::{DiagonalDirection, Line, LineKind, LineView, CONNECT};
pub use player::{Player, PlayerKind, DROPS_PER_PLAYER};
pub use shared::SharedBoard;
pub use slot::{column_id, column_key, parse_column_key, DropColor, Position, Slot, Step, COLUMNS, ROWS};
pub use state::{Game, InsertResult};
pub use statistic::{format_duration, GameStatistic};
pub use status::GameStatus;
