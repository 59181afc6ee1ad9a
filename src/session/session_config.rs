//! Session options fixed at game start.

use std::time::Duration;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::GameMode;

/// Pause before each scheduled AI move or chain continuation.
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub ai_delay: Duration,
    /// Seed for the AI's random source; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// When set, a side left with pieces but no legal move loses, whichever
    /// side it is. Otherwise only the AI is ever declared blocked.
    pub blocked_side_loses: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsPlayer,
            ai_delay: DEFAULT_AI_DELAY,
            seed: None,
            blocked_side_loses: false,
        }
    }
}

impl SessionConfig {
    /// Applies one named option, as sent by `setoption name <name> value <v>`.
    pub fn set_option(&mut self, name: &str, value: &str) -> CheckersResult<()> {
        let invalid = || CheckersError::InvalidOption {
            option: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case("Mode") {
            self.mode = value.parse()?;
        } else if name.eq_ignore_ascii_case("AiDelay") {
            let millis = value.trim().parse::<u64>().map_err(|_| invalid())?;
            self.ai_delay = Duration::from_millis(millis);
        } else if name.eq_ignore_ascii_case("Seed") {
            self.seed = match value.trim() {
                "" | "none" => None,
                v => Some(v.parse::<u64>().map_err(|_| invalid())?),
            };
        } else if name.eq_ignore_ascii_case("BlockedLoses") {
            let lower = value.trim().to_ascii_lowercase();
            self.blocked_side_loses = matches!(lower.as_str(), "true" | "1" | "yes" | "on");
        } else {
            return Err(invalid());
        }
        Ok(())
    }
}
