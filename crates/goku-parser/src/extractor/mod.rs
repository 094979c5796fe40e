//! Metadata extraction: struct generic parameters and bound methods.
//!
//! Walks the top-level declarations of every file in a [`SourceUnit`]:
//! - `type_declaration` whose `type_spec` names the target contributes the
//!   struct's generic parameters and their constraints (default `any`)
//! - `method_declaration` whose receiver, stripped of `*` and `[...]`, names
//!   the target contributes a [`MethodInfo`] in source order
//!
//! Struct declarations are read before any method, so constraint qualifiers
//! are touched first. A method whose receiver renames the struct's type
//! parameters (`func (x X[P]) ...` for `type X[A any]`) has its signature
//! rewritten to the declared names.
//!
//! Every qualified identifier rendered along the way is checked against the
//! unit's imports before the contract is returned.

use ast_grep_core::Node;
use goku_core::{MethodInfo, ReceiverKind, StructContract, TypeInfo};

use crate::error::ParserError;
use crate::imports::{ImportTable, dedup_by_path};
use crate::render::render;
use crate::source::SourceUnit;
use crate::type_expr::TypeExpr;

mod helpers;

use helpers::{
    ParamDecl, expand_parameter_list, expand_type_parameters, extract_receiver, type_spec_name,
    type_specs,
};

/// Constraint recorded for a type parameter declared without one.
pub const UNCONSTRAINED: &str = "any";

/// Extract the contract of `target` from the ingested files.
///
/// # Errors
/// - [`ParserError::NoSource`] when nothing was ingested
/// - [`ParserError::ImportResolution`] when a rendered qualifier matches no import
pub fn extract(unit: &SourceUnit, target: &str) -> Result<StructContract, ParserError> {
    let Some(package_name) = unit.package() else {
        return Err(ParserError::NoSource);
    };

    let mut imports = ImportTable::new();
    let mut walk = Walk::default();
    let mut struct_generic_params = Vec::new();
    let mut generic_qualifiers = Vec::new();
    let mut declared = false;

    for file in unit.files() {
        let root = file.tree.root();
        imports.collect(&root);

        for decl in root
            .children()
            .filter(|d| d.kind().as_ref() == "type_declaration")
        {
            for spec in type_specs(&decl) {
                if type_spec_name(&spec).as_deref() != Some(target) {
                    continue;
                }
                declared = true;
                let mut scope = Vec::new();
                struct_generic_params.extend(walk.type_parameters(&spec, &mut scope));
                merge(&mut generic_qualifiers, &scope);
            }
        }
    }

    if !declared {
        tracing::warn!(
            struct_name = target,
            package = package_name,
            "target type is not declared in the package"
        );
    }

    walk.declared_params = struct_generic_params
        .iter()
        .filter_map(|p| p.name.clone())
        .collect();

    let mut methods = Vec::new();
    for file in unit.files() {
        let root = file.tree.root();
        for decl in root
            .children()
            .filter(|d| d.kind().as_ref() == "method_declaration")
        {
            if let Some(method) = walk.method(&decl, target) {
                tracing::debug!(
                    file = %file.label,
                    method = %method.name,
                    receiver = %method.receiver,
                    "extracted method"
                );
                methods.push(method);
            }
        }
    }

    let qualified_imports = imports.resolve_each(&walk.touched)?;
    let imports = dedup_by_path(qualified_imports.clone());

    Ok(StructContract {
        package_name: package_name.to_string(),
        imports,
        qualified_imports,
        struct_name: target.to_string(),
        struct_generic_params,
        generic_qualifiers,
        methods,
    })
}

/// Rendering state shared across one extraction run.
#[derive(Default)]
struct Walk {
    /// Every qualifier touched so far, first-touch order.
    touched: Vec<String>,
    /// Type parameter names declared on the target struct.
    declared_params: Vec<String>,
    /// Receiver parameter name to declared name, for the current method.
    renames: Vec<(String, String)>,
}

impl Walk {
    /// Render a type node, recording its qualifiers globally and in `scope`.
    fn render_node<D: ast_grep_core::Doc>(
        &mut self,
        node: &Node<D>,
        variadic: bool,
        scope: &mut Vec<String>,
    ) -> String {
        let mut expr = TypeExpr::from_node(node);
        if !self.renames.is_empty() {
            expr.rename(&self.renames);
        }
        if variadic {
            expr = TypeExpr::Variadic(Box::new(expr));
        }
        let rendered = render(&expr);
        merge(&mut self.touched, &rendered.qualifiers);
        merge(scope, &rendered.qualifiers);
        rendered.text
    }

    fn type_parameters<D: ast_grep_core::Doc>(
        &mut self,
        spec: &Node<D>,
        scope: &mut Vec<String>,
    ) -> Vec<TypeInfo> {
        let Some(list) = spec.field("type_parameters") else {
            return Vec::new();
        };
        expand_type_parameters(&list)
            .into_iter()
            .map(|(name, constraint)| {
                let rendered = constraint.map_or_else(
                    || UNCONSTRAINED.to_string(),
                    |c| self.render_node(&c, false, scope),
                );
                TypeInfo::named(name, rendered)
            })
            .collect()
    }

    fn method<D: ast_grep_core::Doc>(&mut self, decl: &Node<D>, target: &str) -> Option<MethodInfo> {
        let receiver = extract_receiver(decl)?;
        if receiver.base != target {
            return None;
        }
        let name = decl.field("name")?.text().to_string();

        let mut generic_params: Vec<String> = receiver
            .type_args
            .iter()
            .map(|arg| render(arg).text)
            .collect();
        if let Some(list) = decl.field("type_parameters") {
            generic_params.extend(expand_type_parameters(&list).into_iter().map(|(n, _)| n));
        }

        self.renames = receiver
            .type_args
            .iter()
            .zip(&self.declared_params)
            .filter_map(|(arg, declared)| match arg {
                TypeExpr::Name(used) if used != declared => Some((used.clone(), declared.clone())),
                _ => None,
            })
            .collect();
        if !self.renames.is_empty() {
            tracing::debug!(
                method = %name,
                renames = ?self.renames,
                "rewriting receiver type parameters to declared names"
            );
        }

        let mut scope = Vec::new();
        let arguments = decl
            .field("parameters")
            .map(|list| {
                expand_parameter_list(&list)
                    .into_iter()
                    .map(|param| self.argument(&param, &mut scope))
                    .collect()
            })
            .unwrap_or_default();
        let returns = decl
            .field("result")
            .map(|result| self.results(&result, &mut scope))
            .unwrap_or_default();
        self.renames.clear();

        Some(MethodInfo {
            name,
            receiver: if receiver.pointer {
                ReceiverKind::Pointer
            } else {
                ReceiverKind::Value
            },
            generic_params,
            arguments,
            returns,
            qualifiers: scope,
        })
    }

    fn argument<D: ast_grep_core::Doc>(
        &mut self,
        param: &ParamDecl<'_, D>,
        scope: &mut Vec<String>,
    ) -> TypeInfo {
        TypeInfo {
            name: param.name.clone(),
            rendered: self.render_node(&param.ty, param.variadic, scope),
        }
    }

    /// A result is either a `parameter_list` or a single bare type.
    fn results<D: ast_grep_core::Doc>(
        &mut self,
        result: &Node<D>,
        scope: &mut Vec<String>,
    ) -> Vec<String> {
        if result.kind().as_ref() == "parameter_list" {
            expand_parameter_list(result)
                .into_iter()
                .map(|param| self.render_node(&param.ty, param.variadic, scope))
                .collect()
        } else {
            vec![self.render_node(result, false, scope)]
        }
    }
}

fn merge(into: &mut Vec<String>, qualifiers: &[String]) {
    for qualifier in qualifiers {
        if !into.contains(qualifier) {
            into.push(qualifier.clone());
        }
    }
}

#[cfg(test)]
mod tests;
