//! Import lookup table and qualifier resolution.

use std::collections::HashMap;

use ast_grep_core::Node;
use goku_core::{ImportRef, basename};

use crate::error::ParserError;

/// `qualifier -> import` for every import declared in the unit.
///
/// The qualifier is the explicit alias when present, the last path segment
/// otherwise. A later declaration of the same qualifier replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    by_qualifier: HashMap<String, ImportRef>,
}

impl ImportTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one import. `alias` is empty when none was declared.
    pub fn insert(&mut self, alias: &str, path: &str) {
        let qualifier = if alias.is_empty() {
            basename(path)
        } else {
            alias
        };
        self.by_qualifier
            .insert(qualifier.to_string(), ImportRef::new(alias, path));
    }

    /// Register every `import_spec` under a Go `source_file` node.
    pub fn collect<D: ast_grep_core::Doc>(&mut self, root: &Node<D>) {
        for decl in root
            .children()
            .filter(|c| c.kind().as_ref() == "import_declaration")
        {
            for child in decl.children() {
                match child.kind().as_ref() {
                    "import_spec" => self.insert_spec(&child),
                    "import_spec_list" => {
                        for spec in child
                            .children()
                            .filter(|c| c.kind().as_ref() == "import_spec")
                        {
                            self.insert_spec(&spec);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn insert_spec<D: ast_grep_core::Doc>(&mut self, spec: &Node<D>) {
        let Some(path) = spec.field("path") else {
            return;
        };
        let path = unquote(&path.text());
        let alias = spec
            .field("name")
            .map(|n| n.text().to_string())
            .unwrap_or_default();
        self.insert(&alias, &path);
    }

    #[must_use]
    pub fn get(&self, qualifier: &str) -> Option<&ImportRef> {
        self.by_qualifier.get(qualifier)
    }

    /// Resolve touched qualifiers, one import per qualifier in `touched`
    /// order.
    ///
    /// # Errors
    /// Returns [`ParserError::ImportResolution`] for the first qualifier with
    /// no matching import.
    pub fn resolve_each(&self, touched: &[String]) -> Result<Vec<ImportRef>, ParserError> {
        touched
            .iter()
            .map(|qualifier| {
                self.get(qualifier)
                    .cloned()
                    .ok_or_else(|| ParserError::ImportResolution {
                        qualifier: qualifier.clone(),
                    })
            })
            .collect()
    }

    /// Resolve touched qualifiers into the final import list.
    ///
    /// Output follows `touched` order and is deduplicated by path.
    ///
    /// # Errors
    /// Same as [`ImportTable::resolve_each`].
    pub fn resolve(&self, touched: &[String]) -> Result<Vec<ImportRef>, ParserError> {
        Ok(dedup_by_path(self.resolve_each(touched)?))
    }
}

/// Keep the first import of every path.
#[must_use]
pub(crate) fn dedup_by_path(resolved: Vec<ImportRef>) -> Vec<ImportRef> {
    let mut imports: Vec<ImportRef> = Vec::with_capacity(resolved.len());
    for import in resolved {
        if !imports.iter().any(|i| i.path == import.path) {
            imports.push(import);
        }
    }
    imports
}

/// Strip the quotes of an interpreted (`"..."`) or raw (`` `...` ``) literal.
fn unquote(literal: &str) -> String {
    literal.trim().trim_matches(|c| c == '"' || c == '`').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_go;
    use pretty_assertions::assert_eq;

    fn table(src: &str) -> ImportTable {
        let tree = parse_go(src);
        let mut table = ImportTable::new();
        table.collect(&tree.root());
        table
    }

    #[test]
    fn unaliased_import_resolves_by_basename() {
        let t = table("package x\nimport \"text/template\"\n");
        assert_eq!(
            t.get("template"),
            Some(&ImportRef::new("", "text/template"))
        );
    }

    #[test]
    fn aliased_import_resolves_by_alias_only() {
        let t = table("package x\nimport otelCodes \"go.opentelemetry.io/otel/codes\"\n");
        assert_eq!(
            t.get("otelCodes"),
            Some(&ImportRef::new("otelCodes", "go.opentelemetry.io/otel/codes"))
        );
        assert!(t.get("codes").is_none());
    }

    #[test]
    fn grouped_and_raw_string_imports_are_collected() {
        let t = table(
            "package x\nimport (\n\t\"context\"\n\tpb `example.com/gen/pb`\n\t\"log/slog\"\n)\n",
        );
        assert!(t.get("context").is_some());
        assert_eq!(t.get("pb").map(|i| i.path.as_str()), Some("example.com/gen/pb"));
        assert!(t.get("slog").is_some());
    }

    #[test]
    fn last_writer_wins_for_duplicate_qualifiers() {
        let mut t = ImportTable::new();
        t.insert("", "example.com/a/util");
        t.insert("", "example.com/b/util");
        assert_eq!(t.get("util").map(|i| i.path.as_str()), Some("example.com/b/util"));
    }

    #[test]
    fn resolve_keeps_touch_order_and_dedups_by_path() {
        let mut t = ImportTable::new();
        t.insert("", "context");
        t.insert("", "time");
        t.insert("tm", "time");
        let touched = vec!["time".to_string(), "context".to_string(), "tm".to_string()];
        let imports = t.resolve(&touched).expect("all qualifiers resolve");
        assert_eq!(
            imports,
            vec![ImportRef::new("", "time"), ImportRef::new("", "context")]
        );
    }

    #[test]
    fn resolve_each_keeps_every_qualifier_of_a_path() {
        let mut t = ImportTable::new();
        t.insert("", "time");
        t.insert("tm", "time");
        let touched = vec!["tm".to_string(), "time".to_string()];
        assert_eq!(
            t.resolve_each(&touched).expect("all qualifiers resolve"),
            vec![ImportRef::new("tm", "time"), ImportRef::new("", "time")]
        );
        assert_eq!(
            t.resolve(&touched).expect("all qualifiers resolve"),
            vec![ImportRef::new("tm", "time")]
        );
    }

    #[test]
    fn resolve_fails_on_unknown_qualifier() {
        let t = table("package x\nimport \"invalid/pkgname\"\n");
        let err = t
            .resolve(&["different".to_string()])
            .expect_err("qualifier should not resolve");
        assert!(matches!(
            &err,
            ParserError::ImportResolution { qualifier } if qualifier == "different"
        ));
        let message = err.to_string();
        assert!(message.starts_with("failed resolving package 'different'"));
        assert!(message.contains("give this import in the source code an alias"));
    }
}
