use anyhow::Context;
use goku_config::GokuConfig;

/// Load layered configuration; CLI flags are applied later by each command.
pub fn load_config() -> anyhow::Result<GokuConfig> {
    GokuConfig::load().context("failed to load goku configuration")
}
