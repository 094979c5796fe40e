use serde::{Deserialize, Serialize};

/// An import path referenced by the rendered signatures.
///
/// `alias` is empty unless the source file declared one explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportRef {
    #[serde(default)]
    pub alias: String,
    pub path: String,
}

impl ImportRef {
    #[must_use]
    pub fn new(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            path: path.into(),
        }
    }

    /// Last `/`-separated segment of the path.
    #[must_use]
    pub fn basename(&self) -> &str {
        basename(&self.path)
    }

    /// The identifier Go code uses to reach this import: the alias when one
    /// was declared, the basename otherwise.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        if self.alias.is_empty() {
            self.basename()
        } else {
            &self.alias
        }
    }
}

/// Last `/`-separated segment of an import path.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_prefers_alias() {
        let aliased = ImportRef::new("otelCodes", "go.opentelemetry.io/otel/codes");
        assert_eq!(aliased.qualifier(), "otelCodes");
        assert_eq!(aliased.basename(), "codes");
    }

    #[test]
    fn qualifier_falls_back_to_basename() {
        assert_eq!(ImportRef::new("", "text/template").qualifier(), "template");
        assert_eq!(ImportRef::new("", "context").qualifier(), "context");
    }
}
