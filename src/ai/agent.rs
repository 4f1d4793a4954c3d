use crate::error::MoveError;
use crate::game::Game;

/// Anything that can pick a column for the player whose turn it is.
pub trait Agent {
    /// Select the column key for the current player of `game`.
    /// `Ok(None)` means there is no column left to play.
    fn select_column(&mut self, game: &Game) -> Result<Option<char>, MoveError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
