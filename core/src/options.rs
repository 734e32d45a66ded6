//! Binding configuration

use crate::error::Result;
use crate::mode::Mode;
use serde::{Deserialize, Serialize};

/// Construction options for a [`QueryParam`](crate::QueryParam)
///
/// Deserializes from camelCase JSON so browser callers can pass
/// `{"name": "page", "defaultValue": "1", "mode": "required"}`.
/// `defaultValue` falls back to `""` and `mode` to `suppress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamOptions {
    pub name: String,

    #[serde(default)]
    pub default_value: String,

    #[serde(default)]
    pub mode: Mode,
}

impl ParamOptions {
    /// Options with an empty default in `suppress` mode
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: String::new(),
            mode: Mode::default(),
        }
    }

    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Decode options from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
