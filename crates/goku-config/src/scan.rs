//! Which files of a directory are read as sources.

use serde::{Deserialize, Serialize};

fn default_extension() -> String {
    "go".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Read `*_test.go` files too.
    #[serde(default)]
    pub include_test_files: bool,

    /// Source file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_test_files: false,
            extension: default_extension(),
        }
    }
}

impl ScanConfig {
    /// Whether a file named `file_name` should be ingested.
    #[must_use]
    pub fn accepts(&self, file_name: &str) -> bool {
        let Some(stem) = file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
        else {
            return false;
        };
        !stem.is_empty() && (self.include_test_files || !stem.ends_with("_test"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sources_and_skips_tests() {
        let config = ScanConfig::default();
        assert!(config.accepts("store.go"));
        assert!(!config.accepts("store_test.go"));
        assert!(!config.accepts("store.gox"));
        assert!(!config.accepts("README.md"));
        assert!(!config.accepts(".go"));
    }

    #[test]
    fn test_files_can_be_included() {
        let config = ScanConfig {
            include_test_files: true,
            ..ScanConfig::default()
        };
        assert!(config.accepts("store_test.go"));
    }
}
