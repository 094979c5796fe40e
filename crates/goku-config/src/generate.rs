//! Defaults for the `iface` command.

use serde::{Deserialize, Serialize};

fn default_interface_suffix() -> String {
    "Interface".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerateConfig {
    /// Mock type name. Empty means no mock is generated.
    #[serde(default)]
    pub mock_name: String,

    /// Also generate methods whose name starts with a lowercase letter.
    #[serde(default)]
    pub include_private: bool,

    /// Package name for the output file. Empty keeps the source package.
    #[serde(default)]
    pub package_override: String,

    /// Appended to the struct name when no interface name is given.
    #[serde(default = "default_interface_suffix")]
    pub interface_suffix: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            mock_name: String::new(),
            include_private: false,
            package_override: String::new(),
            interface_suffix: default_interface_suffix(),
        }
    }
}

impl GenerateConfig {
    /// Default interface name for `struct_name`.
    #[must_use]
    pub fn interface_name(&self, struct_name: &str) -> String {
        format!("{struct_name}{}", self.interface_suffix)
    }
}
