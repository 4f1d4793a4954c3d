//! Rule-based computer players: run detection, the three skill tiers and
//! the agent wrapper the front ends drive.

mod agent;
pub mod analyzer;
mod cpu;
pub mod sequence;
mod strategy;

pub use agent::Agent;
pub use analyzer::{
    all_sequences, extendable_sequences, is_opening, opening_column, sequences_of_length,
    single_token_candidates,
};
pub use cpu::CpuAgent;
pub use sequence::{classify_direction, Direction, DropSequence, SingleCandidate};
pub use strategy::{choose_move, Strategy};
