//! Closed tagged-variant model of Go type expressions.
//!
//! The extractor lowers tree-sitter type nodes into [`TypeExpr`] once, and
//! [`crate::render`] turns a `TypeExpr` back into canonical text. Keeping the
//! variant set closed means adding a new node kind is a compile error in the
//! renderer until it is handled.

use ast_grep_core::Node;

/// A Go type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `int`, `T`, `error`
    Name(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `[N]T`, length kept verbatim
    Array { len: String, elem: Box<TypeExpr> },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `chan T`, `chan<- T`, `<-chan T`
    Chan { dir: ChanDir, elem: Box<TypeExpr> },
    /// `pkg.Name`
    Qualified { package: String, name: String },
    /// Any function type. Parameter and result detail is erased.
    Func,
    /// `Base[A, B]`
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },
    /// `...T`
    Variadic(Box<TypeExpr>),
    /// Constraint union `A | B`
    Union(Vec<TypeExpr>),
    /// Constraint approximation `~T`
    Approx(Box<TypeExpr>),
    /// `interface{}`
    EmptyInterface,
    /// `struct{}`
    EmptyStruct,
    /// A node kind the renderer does not model, kept by kind name.
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

impl TypeExpr {
    /// Lower a tree-sitter Go type node.
    pub fn from_node<D: ast_grep_core::Doc>(node: &Node<D>) -> Self {
        let kind = node.kind();
        match kind.as_ref() {
            "type_identifier" | "identifier" | "package_identifier" => {
                Self::Name(node.text().to_string())
            }
            "pointer_type" => first_type_child(node).map_or_else(
                || Self::Unknown(kind.to_string()),
                |inner| Self::Pointer(Box::new(inner)),
            ),
            "slice_type" => match node.field("element") {
                Some(elem) => Self::Slice(Box::new(Self::from_node(&elem))),
                None => Self::Unknown(kind.to_string()),
            },
            "array_type" => match (node.field("length"), node.field("element")) {
                (Some(len), Some(elem)) => Self::Array {
                    len: collapse_whitespace(&len.text()),
                    elem: Box::new(Self::from_node(&elem)),
                },
                _ => Self::Unknown(kind.to_string()),
            },
            "map_type" => match (node.field("key"), node.field("value")) {
                (Some(key), Some(value)) => Self::Map {
                    key: Box::new(Self::from_node(&key)),
                    value: Box::new(Self::from_node(&value)),
                },
                _ => Self::Unknown(kind.to_string()),
            },
            "channel_type" => lower_channel(node),
            "qualified_type" => match (node.field("package"), node.field("name")) {
                (Some(package), Some(name)) => Self::Qualified {
                    package: package.text().to_string(),
                    name: name.text().to_string(),
                },
                _ => Self::Unknown(kind.to_string()),
            },
            "function_type" => Self::Func,
            "generic_type" => lower_generic(node),
            "parenthesized_type" => {
                first_type_child(node).unwrap_or_else(|| Self::Unknown(kind.to_string()))
            }
            "negated_type" | "constraint_term" if node.text().trim_start().starts_with('~') => {
                first_type_child(node).map_or_else(
                    || Self::Unknown(kind.to_string()),
                    |inner| Self::Approx(Box::new(inner)),
                )
            }
            "type_elem" | "type_constraint" | "constraint_elem" | "constraint_term" => {
                let mut terms = type_children(node);
                match terms.len() {
                    0 => Self::Unknown(kind.to_string()),
                    1 => terms.remove(0),
                    _ => Self::Union(terms),
                }
            }
            "interface_type" if !has_named_children(node) => Self::EmptyInterface,
            "struct_type" if is_empty_struct(node) => Self::EmptyStruct,
            other => {
                tracing::warn!(kind = other, text = %node.text(), "unsupported type node");
                Self::Unknown(other.to_string())
            }
        }
    }
}

impl TypeExpr {
    /// Replace every bare [`TypeExpr::Name`] found in `renames` (`from, to`).
    ///
    /// Applied in one pass, so swapped names (`A -> B`, `B -> A`) do not chain.
    pub fn rename(&mut self, renames: &[(String, String)]) {
        match self {
            Self::Name(name) => {
                if let Some((_, to)) = renames.iter().find(|(from, _)| from == name) {
                    name.clone_from(to);
                }
            }
            Self::Pointer(inner)
            | Self::Slice(inner)
            | Self::Variadic(inner)
            | Self::Approx(inner)
            | Self::Array { elem: inner, .. }
            | Self::Chan { elem: inner, .. } => inner.rename(renames),
            Self::Map { key, value } => {
                key.rename(renames);
                value.rename(renames);
            }
            Self::Generic { base, args } => {
                base.rename(renames);
                for arg in args {
                    arg.rename(renames);
                }
            }
            Self::Union(terms) => {
                for term in terms {
                    term.rename(renames);
                }
            }
            Self::Qualified { .. }
            | Self::Func
            | Self::EmptyInterface
            | Self::EmptyStruct
            | Self::Unknown(_) => {}
        }
    }
}

fn lower_channel<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeExpr {
    let Some(value) = node.field("value") else {
        return TypeExpr::Unknown("channel_type".to_string());
    };
    let text = node.text();
    let trimmed = text.trim_start();
    let dir = if trimmed.starts_with("<-") {
        ChanDir::Recv
    } else if trimmed
        .strip_prefix("chan")
        .is_some_and(|rest| rest.trim_start().starts_with("<-"))
    {
        ChanDir::Send
    } else {
        ChanDir::Both
    };
    TypeExpr::Chan {
        dir,
        elem: Box::new(TypeExpr::from_node(&value)),
    }
}

fn lower_generic<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeExpr {
    let Some(base) = node.field("type") else {
        return TypeExpr::Unknown("generic_type".to_string());
    };
    let args = node
        .field("type_arguments")
        .map(|list| type_children(&list))
        .unwrap_or_default();
    TypeExpr::Generic {
        base: Box::new(TypeExpr::from_node(&base)),
        args,
    }
}

/// Lowered named children, skipping comments.
fn type_children<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<TypeExpr> {
    node.children()
        .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
        .map(|c| TypeExpr::from_node(&c))
        .collect()
}

fn first_type_child<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<TypeExpr> {
    type_children(node).into_iter().next()
}

fn has_named_children<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.children()
        .any(|c| c.is_named() && c.kind().as_ref() != "comment")
}

fn is_empty_struct<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.children()
        .filter(|c| c.kind().as_ref() == "field_declaration_list")
        .all(|list| !has_named_children(&list))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
