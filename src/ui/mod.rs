//! Terminal front end: the board view and the key-driven session that
//! alternates human input with CPU moves.

mod app;
mod board_widget;
mod game_view;

pub use app::App;
pub use board_widget::board_lines;
