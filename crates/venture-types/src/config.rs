//! Global configuration types for Venture.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls
//! the model, token limits, and artifact output directory.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the simulator.
///
/// Loaded from `~/.venture/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum output tokens per completion call.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Number of exchanges in each agent dialogue after the opening
    /// message.
    #[serde(default = "default_dialogue_turns")]
    pub dialogue_turns: usize,

    /// Directory for chart artifacts. Relative paths resolve against the
    /// current working directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_dialogue_turns() -> usize {
    3
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            dialogue_turns: default_dialogue_turns(),
            output_dir: default_output_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.max_tokens, 1000);
        assert_eq!(config.dialogue_turns, 3);
        assert_eq!(config.output_dir, ".");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GlobalConfig = toml::from_str("max_tokens = 2000").unwrap();
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.model, default_model());
    }
}
