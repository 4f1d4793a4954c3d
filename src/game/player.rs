use std::fmt;

use super::slot::DropColor;
use crate::ai::Strategy;
use crate::error::GameError;

/// Drops each player holds at the start of a game (42 slots / 2).
pub const DROPS_PER_PLAYER: u8 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Cpu(Strategy),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    color: DropColor,
    drops_left: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Player {
            name: name.into(),
            kind,
            color: DropColor::Unset,
            drops_left: DROPS_PER_PLAYER,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn cpu(name: impl Into<String>, strategy: Strategy) -> Self {
        Self::new(name, PlayerKind::Cpu(strategy))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    /// Skill tier of a CPU player.
    pub fn strategy(&self) -> Option<Strategy> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Cpu(strategy) => Some(strategy),
        }
    }

    pub fn color(&self) -> DropColor {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: DropColor) {
        self.color = color;
    }

    pub fn drops_left(&self) -> u8 {
        self.drops_left
    }

    pub(crate) fn decrement_drops(&mut self) -> Result<(), GameError> {
        self.drops_left = self.drops_left.checked_sub(1).ok_or_else(|| {
            GameError::IllegalState(format!("{} has no drops remaining", self.name))
        })?;
        Ok(())
    }

    pub(crate) fn reset_drops(&mut self) {
        self.drops_left = DROPS_PER_PLAYER;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PlayerKind::Human => write!(f, "{} ({})", self.name, self.color),
            PlayerKind::Cpu(strategy) => write!(f, "{} ({}, CPU {})", self.name, self.color, strategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::cpu("Deep Drop", Strategy::Hard);
        assert_eq!(player.name(), "Deep Drop");
        assert_eq!(player.strategy(), Some(Strategy::Hard));
        assert!(!player.is_human());
        assert_eq!(player.color(), DropColor::Unset);
        assert_eq!(player.drops_left(), DROPS_PER_PLAYER);

        let human = Player::human("Ada");
        assert!(human.is_human());
        assert_eq!(human.strategy(), None);
    }

    #[test]
    fn test_drop_budget_cannot_go_negative() {
        let mut player = Player::human("Ada");
        for _ in 0..DROPS_PER_PLAYER {
            player.decrement_drops().unwrap();
        }
        assert_eq!(player.drops_left(), 0);
        assert!(matches!(
            player.decrement_drops(),
            Err(GameError::IllegalState(_))
        ));

        player.reset_drops();
        assert_eq!(player.drops_left(), DROPS_PER_PLAYER);
    }

    #[test]
    fn test_display() {
        let mut player = Player::cpu("Bot", Strategy::Easy);
        player.set_color(DropColor::Yellow);
        assert_eq!(player.to_string(), "Bot (Yellow, CPU easy)");
    }
}
