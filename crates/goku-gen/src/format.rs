//! Source-formatting collaborator applied to assembled output.

use goku_parser::parser::{first_syntax_issue, parse_go};

use crate::error::GenError;

/// Validates and normalizes generated source text.
pub trait SourceFormatter {
    /// # Errors
    /// [`GenError::Formatting`] when `source` is not valid Go.
    fn format(&self, source: &str) -> Result<String, GenError>;
}

/// Re-parses the text as Go and normalizes whitespace.
///
/// Trailing whitespace is stripped, runs of blank lines collapse to one, and
/// the file ends with exactly one newline. Indentation and token spacing are
/// left as the template produced them.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoFormatter;

impl SourceFormatter for GoFormatter {
    fn format(&self, source: &str) -> Result<String, GenError> {
        let tree = parse_go(source);
        if let Some(issue) = first_syntax_issue(&tree, source) {
            return Err(GenError::Formatting {
                line: issue.line,
                column: issue.column,
                message: issue.message,
            });
        }

        let mut out = String::with_capacity(source.len());
        let mut blank_run = false;
        for line in source.trim_start_matches('\n').lines() {
            let line = line.trim_end();
            if line.is_empty() {
                if blank_run {
                    continue;
                }
                blank_run = true;
            } else {
                blank_run = false;
            }
            out.push_str(line);
            out.push('\n');
        }

        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        out.push('\n');
        Ok(out)
    }
}
