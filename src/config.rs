use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::{Difficulty, Mode};

/// Upper bound for [`GameConfig::bot_delay_ms`]. Past this the computer
/// reads as stuck rather than deliberate.
const MAX_BOT_DELAY_MS: u64 = 10_000;

/// Startup settings for a session, usually read from a YAML file next to
/// the embedding shell. A missing file means defaults.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: Mode,
    pub difficulty: Difficulty,
    /// Pause between a human move and the computer's reply, in milliseconds.
    pub bot_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::HumanVsHuman,
            difficulty: Difficulty::Easy,
            bot_delay_ms: 500,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }

    /// Reads the config from `path`. A file that does not exist yields the
    /// defaults; a file that exists but does not parse or validate is an
    /// error.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
    }
}
