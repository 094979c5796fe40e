//! Directory scanning: which files of a package are ingested.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use goku_config::ScanConfig;

/// One source file read from disk.
#[derive(Debug)]
pub struct SourceText {
    pub path: PathBuf,
    pub text: String,
}

/// Read every accepted file directly under `dir`, sorted by path.
///
/// Subdirectories are separate Go packages and are not descended into.
pub fn read_sources(dir: &Path, config: &ScanConfig) -> anyhow::Result<Vec<SourceText>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let accepted = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| config.accepts(name));
        if accepted {
            paths.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping file");
        }
    }
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(SourceText { path, text })
        })
        .collect()
}
