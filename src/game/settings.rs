use std::time::Duration;

use crate::config::GameConfig;

use super::types::{Difficulty, Mode, Player};

/// Live settings of one session. Mode and difficulty track the shell's
/// selectors; the computer's seat stays explicit rather than hardwired to
/// a mark, even though new games give it O.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub computer_player: Player,
    pub bot_delay: Duration,
}

impl SessionSettings {
    /// Whether `player`'s seat is driven by the session itself. Always
    /// false in `HumanVsHuman`.
    pub fn is_computer_seat(&self, player: Player) -> bool {
        self.mode == Mode::HumanVsComputer && player == self.computer_player
    }
}

impl From<&GameConfig> for SessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            mode: config.mode,
            difficulty: config.difficulty,
            computer_player: Player::O,
            bot_delay: Duration::from_millis(config.bot_delay_ms),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}
