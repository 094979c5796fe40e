//! Parser error types for goku-parser.

/// Errors raised while aggregating sources or extracting a struct contract.
///
/// Every variant aborts the whole extraction; no partially populated
/// contract is ever returned alongside one of these.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// Extraction was requested before any source was ingested.
    #[error("no source provided: ingest at least one Go file before extracting")]
    NoSource,

    /// A supplied text is not syntactically valid Go.
    #[error("parse failed for {file} at {line}:{column}: {message}")]
    ParseFailed {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// A file declares a different package than the ones ingested before it.
    #[error("mismatched package name: wanted {expected}, got {found}")]
    PackageMismatch { expected: String, found: String },

    /// A qualifier used in a rendered type has no matching import.
    #[error(
        "failed resolving package '{qualifier}': this package name is used in your source code but it doesn't match any import alias or basename in your import paths. This means that the basename of the import doesn't match the package name (e.g. you're importing 'github.com/user/imported' but when you go to the actual source code for that module, the package name isn't 'package imported' but rather something else like 'package imprted'). An easy fix for this is to give this import in the source code an alias, and code generation will work again"
    )]
    ImportResolution { qualifier: String },
}
