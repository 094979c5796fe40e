use ast_grep_core::Node;

use crate::type_expr::TypeExpr;

/// A method receiver reduced to what matching needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Receiver {
    /// Struct name with pointer marker and instantiation brackets stripped.
    pub base: String,
    pub pointer: bool,
    /// Instantiation arguments, `X[A, B]` → `A`, `B`.
    pub type_args: Vec<TypeExpr>,
}

/// One declared parameter (or result) before rendering.
pub(super) struct ParamDecl<'r, D: ast_grep_core::Doc> {
    pub name: Option<String>,
    pub ty: Node<'r, D>,
    pub variadic: bool,
}

/// Read the receiver of a `method_declaration`.
pub(super) fn extract_receiver<D: ast_grep_core::Doc>(method: &Node<D>) -> Option<Receiver> {
    let list = method.field("receiver")?;
    let param = list
        .children()
        .find(|c| c.kind().as_ref() == "parameter_declaration")?;
    let ty = param.field("type")?;
    receiver_from_type(&ty, false)
}

fn receiver_from_type<D: ast_grep_core::Doc>(ty: &Node<D>, pointer: bool) -> Option<Receiver> {
    match ty.kind().as_ref() {
        "type_identifier" => Some(Receiver {
            base: ty.text().to_string(),
            pointer,
            type_args: Vec::new(),
        }),
        "pointer_type" | "parenthesized_type" => {
            let is_pointer = pointer || ty.kind().as_ref() == "pointer_type";
            let inner = ty.children().find(|c| c.is_named())?;
            receiver_from_type(&inner, is_pointer)
        }
        "generic_type" => {
            let base = ty.field("type")?;
            let type_args = ty
                .field("type_arguments")
                .map(|args| {
                    args.children()
                        .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
                        .map(|c| TypeExpr::from_node(&c))
                        .collect()
                })
                .unwrap_or_default();
            Some(Receiver {
                base: base.text().to_string(),
                pointer,
                type_args,
            })
        }
        _ => None,
    }
}

/// Expand a `parameter_list` into one entry per declared name.
///
/// `x, y int` yields two entries sharing the same type node; an unnamed
/// `int` yields one entry with no name.
pub(super) fn expand_parameter_list<'r, D: ast_grep_core::Doc>(
    list: &Node<'r, D>,
) -> Vec<ParamDecl<'r, D>> {
    let mut out = Vec::new();
    for decl in list.children() {
        match decl.kind().as_ref() {
            "parameter_declaration" => {
                let Some(ty) = decl.field("type") else {
                    continue;
                };
                let names = identifier_children(&decl);
                if names.is_empty() {
                    out.push(ParamDecl {
                        name: None,
                        ty,
                        variadic: false,
                    });
                } else {
                    for name in names {
                        out.push(ParamDecl {
                            name: Some(name),
                            ty: ty.clone(),
                            variadic: false,
                        });
                    }
                }
            }
            "variadic_parameter_declaration" => {
                let Some(ty) = decl.field("type") else {
                    continue;
                };
                out.push(ParamDecl {
                    name: decl.field("name").map(|n| n.text().to_string()),
                    ty,
                    variadic: true,
                });
            }
            _ => {}
        }
    }
    out
}

/// Names of a `type_parameter_list`, each paired with its constraint node.
pub(super) fn expand_type_parameters<'r, D: ast_grep_core::Doc>(
    list: &Node<'r, D>,
) -> Vec<(String, Option<Node<'r, D>>)> {
    let mut out = Vec::new();
    for decl in list.children() {
        let kind = decl.kind();
        if kind.as_ref() != "type_parameter_declaration" && kind.as_ref() != "parameter_declaration"
        {
            continue;
        }
        let constraint = decl.field("type");
        for name in identifier_children(&decl) {
            out.push((name, constraint.clone()));
        }
    }
    out
}

/// Direct `identifier` children, i.e. the names of a declaration.
fn identifier_children<D: ast_grep_core::Doc>(decl: &Node<D>) -> Vec<String> {
    decl.children()
        .filter(|c| matches!(c.kind().as_ref(), "identifier" | "blank_identifier"))
        .map(|c| c.text().to_string())
        .collect()
}

/// Name of a `type_spec` node.
pub(super) fn type_spec_name<D: ast_grep_core::Doc>(spec: &Node<D>) -> Option<String> {
    spec.field("name").map(|n| n.text().to_string())
}

/// Every `type_spec` of a `type_declaration`, grouped or not.
pub(super) fn type_specs<'r, D: ast_grep_core::Doc>(decl: &Node<'r, D>) -> Vec<Node<'r, D>> {
    decl.children()
        .filter(|c| c.kind().as_ref() == "type_spec")
        .collect()
}
