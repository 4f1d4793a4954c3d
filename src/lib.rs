//! # Drop Four
//!
//! A 7×6 drop-token (Connect Four) engine with rule-based CPU players and a
//! terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: slots, lines, board, players, game lifecycle
//! - [`ai`]: Sequence analysis, skill tiers and the CPU agent
//! - [`ui`]: Terminal UI: board view and interactive session
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
