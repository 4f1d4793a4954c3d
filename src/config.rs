use std::path::Path;

use tracing::warn;

use crate::ai::Strategy;
use crate::error::ConfigError;
use crate::game::Player;

/// Upper bound for the cosmetic CPU thinking delay.
pub const MAX_CPU_DELAY_MS: u64 = 10_000;

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    #[default]
    Human,
    Cpu,
}

/// One of the two players taking part in a game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub kind: SeatKind,
    /// Only used when `kind` is `cpu`.
    pub skill: Strategy,
}

impl PlayerConfig {
    pub fn human(name: &str) -> Self {
        PlayerConfig {
            name: name.into(),
            kind: SeatKind::Human,
            skill: Strategy::default(),
        }
    }

    pub fn cpu(name: &str, skill: Strategy) -> Self {
        PlayerConfig {
            name: name.into(),
            kind: SeatKind::Cpu,
            skill,
        }
    }

    pub fn is_cpu(&self) -> bool {
        self.kind == SeatKind::Cpu
    }

    pub fn to_player(&self) -> Player {
        match self.kind {
            SeatKind::Human => Player::human(self.name.clone()),
            SeatKind::Cpu => Player::cpu(self.name.clone(), self.skill),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::human("Player")
    }
}

/// Settings shared by both seats.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixes color/start assignment and CPU choices when set.
    pub seed: Option<u64>,
    /// Pause before a CPU move in the terminal front end.
    pub cpu_delay_ms: u64,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
    pub game: GameConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            first: PlayerConfig::human("Player"),
            second: PlayerConfig::cpu("Computer", Strategy::Advanced),
            game: GameConfig {
                seed: None,
                cpu_delay_ms: 400,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first.name.trim().is_empty() {
            return Err(ConfigError::Validation("first.name must not be empty".into()));
        }
        if self.second.name.trim().is_empty() {
            return Err(ConfigError::Validation("second.name must not be empty".into()));
        }
        if self.game.cpu_delay_ms > MAX_CPU_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "game.cpu_delay_ms must be <= {MAX_CPU_DELAY_MS}"
            )));
        }
        Ok(())
    }

    pub fn both_cpu(&self) -> bool {
        self.first.is_cpu() && self.second.is_cpu()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
    }
}
