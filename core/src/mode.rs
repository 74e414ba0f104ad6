use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::Millis;

/// Difficulty preset. Controls both the board size and how fast cells light up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Easy, Mode::Normal, Mode::Hard];

    /// Cells per row (and per column) of the square board.
    pub const fn side(self) -> usize {
        use Mode::*;
        match self {
            Easy => 5,
            Normal => 7,
            Hard => 10,
        }
    }

    pub const fn grid_size(self) -> usize {
        self.side() * self.side()
    }

    pub const fn reveal_interval_ms(self) -> Millis {
        use Mode::*;
        match self {
            Easy => 1000,
            Normal => 750,
            Hard => 500,
        }
    }

    pub const fn name(self) -> &'static str {
        use Mode::*;
        match self {
            Easy => "easy",
            Normal => "normal",
            Hard => "hard",
        }
    }

    pub const fn label(self) -> &'static str {
        use Mode::*;
        match self {
            Easy => "Easy",
            Normal => "Normal",
            Hard => "Hard",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode {0:?}, expected one of easy, normal, hard")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_board_and_speed() {
        let presets: Vec<_> = Mode::ALL
            .into_iter()
            .map(|mode| (mode.grid_size(), mode.reveal_interval_ms()))
            .collect();

        assert_eq!(presets, vec![(25, 1000), (49, 750), (100, 500)]);
    }

    #[test]
    fn default_mode_is_easy() {
        assert_eq!(Mode::default(), Mode::Easy);
    }

    #[test]
    fn parses_selector_values() {
        assert_eq!("easy".parse::<Mode>().unwrap(), Mode::Easy);
        assert_eq!("Normal".parse::<Mode>().unwrap(), Mode::Normal);
        assert_eq!(" hard ".parse::<Mode>().unwrap(), Mode::Hard);
        assert!("nightmare".parse::<Mode>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&Mode::Normal).unwrap(), "\"normal\"");
        assert_eq!(
            serde_json::from_str::<Mode>("\"hard\"").unwrap(),
            Mode::Hard
        );
        assert_eq!(Mode::Hard.to_string(), "hard");
    }
}
