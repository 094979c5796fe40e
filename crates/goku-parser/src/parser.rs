//! ast-grep wrapper for Go sources: parsing, syntax checking, package clause.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

/// The concrete AST tree type returned by [`parse_go`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// First syntax problem found in a tree, with 1-based coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Parse Go source into an ast-grep tree.
///
/// tree-sitter is error tolerant, so this never fails; use
/// [`first_syntax_issue`] to decide whether the text was valid.
#[must_use]
pub fn parse_go(source: &str) -> AstTree {
    SupportLang::Go.ast_grep(source)
}

/// Walk the tree in source order and report the first `ERROR` or missing node.
#[must_use]
pub fn first_syntax_issue(tree: &AstTree, source: &str) -> Option<SyntaxIssue> {
    let node = tree
        .root()
        .dfs()
        .find(|n| n.is_error() || n.is_missing())?;

    let (line, column) = line_col(source, node.range().start);
    let message = if node.is_missing() {
        format!("expected {}", node.kind())
    } else {
        format!("unexpected `{}`", snippet(&node.text()))
    };

    Some(SyntaxIssue {
        line,
        column,
        message,
    })
}

/// Name declared by the file's `package` clause.
#[must_use]
pub fn package_name(tree: &AstTree) -> Option<String> {
    let clause = tree
        .root()
        .children()
        .find(|c| c.kind().as_ref() == "package_clause")?;
    clause
        .children()
        .find(|c| c.kind().as_ref() == "package_identifier")
        .map(|n| n.text().to_string())
}

/// 1-based line and column (in chars) of a byte offset.
pub(crate) fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// First line of an offending node, clipped for error messages.
fn snippet(text: &str) -> String {
    let first = text.lines().next().unwrap_or_default().trim();
    if first.chars().count() > 24 {
        let clipped: String = first.chars().take(24).collect();
        format!("{clipped}…")
    } else {
        first.to_string()
    }
}
