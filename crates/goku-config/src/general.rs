//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default tracing filter when neither `GOKU_LOG` nor a CLI flag sets one.
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// `tracing` env-filter directive, e.g. `info` or `goku_parser=debug`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(GeneralConfig::default().log_level, "warn");
    }
}
