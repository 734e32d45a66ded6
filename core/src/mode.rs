//! Presence policies for a synchronized query parameter
//!
//! | Mode       | Parameter absent on mount          | Value returns to default        |
//! |------------|------------------------------------|---------------------------------|
//! | `simple`   | left absent, in-memory default     | left in the URL                 |
//! | `required` | inserted with the default value    | left in the URL                 |
//! | `suppress` | left absent, in-memory default     | removed if it was present       |

use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a binding treats the parameter's presence in the query string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Mirror the value; never add or remove the key on its own
    Simple,
    /// Always keep the key in the URL, inserting the default if missing
    Required,
    /// Keep the URL clean: drop the key whenever it equals the default
    #[default]
    Suppress,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Required => "required",
            Mode::Suppress => "suppress",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Mode::Simple),
            "required" => Ok(Mode::Required),
            "suppress" => Ok(Mode::Suppress),
            _ => Err(SyncError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_suppress() {
        assert_eq!(Mode::default(), Mode::Suppress);
    }

    #[test]
    fn test_parse() {
        assert_eq!("simple".parse::<Mode>().unwrap(), Mode::Simple);
        assert_eq!("Required".parse::<Mode>().unwrap(), Mode::Required);
        assert_eq!(" SUPPRESS ".parse::<Mode>().unwrap(), Mode::Suppress);
        assert_eq!(
            "sometimes".parse::<Mode>(),
            Err(SyncError::InvalidMode("sometimes".to_string()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for mode in [Mode::Simple, Mode::Required, Mode::Suppress] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Required).unwrap(), "\"required\"");
        let mode: Mode = serde_json::from_str("\"simple\"").unwrap();
        assert_eq!(mode, Mode::Simple);
    }
}
