//! Source aggregation: one compilation unit built from several Go files.

use goku_core::StructContract;

use crate::error::ParserError;
use crate::parser::{AstTree, first_syntax_issue, package_name, parse_go};

/// One parsed file of the unit.
pub struct SourceFile {
    pub label: String,
    pub tree: AstTree,
}

/// Parsed files that all declare the same package.
///
/// The first successful ingest fixes the package name. A later file with a
/// different package is rejected without touching the files already held.
#[derive(Default)]
pub struct SourceUnit {
    package: Option<String>,
    files: Vec<SourceFile>,
}

impl SourceUnit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` and add it to the unit under a generated label.
    ///
    /// # Errors
    /// [`ParserError::ParseFailed`] for invalid Go or a missing package
    /// clause, [`ParserError::PackageMismatch`] when the package differs
    /// from the unit's.
    pub fn ingest(&mut self, source: &str) -> Result<(), ParserError> {
        let label = format!("<source {}>", self.files.len() + 1);
        self.ingest_named(label, source)
    }

    /// Parse `source` and add it to the unit, reporting errors against `label`.
    ///
    /// # Errors
    /// Same as [`SourceUnit::ingest`].
    pub fn ingest_named(
        &mut self,
        label: impl Into<String>,
        source: &str,
    ) -> Result<(), ParserError> {
        let label = label.into();
        let tree = parse_go(source);

        if let Some(issue) = first_syntax_issue(&tree, source) {
            return Err(ParserError::ParseFailed {
                file: label,
                line: issue.line,
                column: issue.column,
                message: issue.message,
            });
        }

        let Some(found) = package_name(&tree) else {
            return Err(ParserError::ParseFailed {
                file: label,
                line: 1,
                column: 1,
                message: "expected package clause".to_string(),
            });
        };

        match &self.package {
            Some(expected) if *expected != found => {
                return Err(ParserError::PackageMismatch {
                    expected: expected.clone(),
                    found,
                });
            }
            Some(_) => {}
            None => self.package = Some(found),
        }

        tracing::debug!(file = %label, package = ?self.package, "ingested go source");
        self.files.push(SourceFile { label, tree });
        Ok(())
    }

    /// Package name shared by every ingested file.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    #[must_use]
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Extract the contract of `target` from the ingested files.
    ///
    /// # Errors
    /// See [`crate::extractor::extract`].
    pub fn extract(&self, target: &str) -> Result<StructContract, ParserError> {
        crate::extractor::extract(self, target)
    }
}

impl std::fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceUnit")
            .field("package", &self.package)
            .field(
                "files",
                &self.files.iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
