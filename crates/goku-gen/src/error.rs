//! Generator error types for goku-gen.

/// Errors raised by a single render call.
///
/// A failed render leaves the contract untouched; it can be rendered again
/// with different options.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// The assembled output is not valid Go.
    #[error("generated source is malformed at {line}:{column}: {message}")]
    Formatting {
        line: usize,
        column: usize,
        message: String,
    },

    /// No template is registered under the requested name.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// A template failed while assembling text.
    #[error("template error: {0}")]
    Template(String),

    /// Writing the output failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for GenError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Template(e.to_string())
    }
}
