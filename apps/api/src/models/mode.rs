use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Presentation style for replies. Also partitions the session namespace:
/// the same session id under two modes names two independent sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Chatty,
    Compact,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Chatty => "chatty",
            Mode::Compact => "compact",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chatty" => Ok(Mode::Chatty),
            "compact" => Ok(Mode::Compact),
            other => Err(format!(
                "unknown mode '{other}' (expected 'chatty' or 'compact')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default_is_chatty() {
        assert_eq!(Mode::default(), Mode::Chatty);
    }

    #[test]
    fn test_mode_parses_case_insensitively() {
        assert_eq!("Compact".parse::<Mode>().unwrap(), Mode::Compact);
        assert_eq!(" chatty ".parse::<Mode>().unwrap(), Mode::Chatty);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "verbose".parse::<Mode>().unwrap_err();
        assert!(err.contains("verbose"));
    }

    #[test]
    fn test_mode_serde_snake_case() {
        let json = serde_json::to_string(&Mode::Compact).unwrap();
        assert_eq!(json, r#""compact""#);
    }
}
