//! Type-expression renderer.
//!
//! Pure and deterministic: the same [`TypeExpr`] always yields the same text
//! and the same qualifier list.

use crate::type_expr::{ChanDir, TypeExpr};

/// Canonical text of a type plus the package qualifiers it touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Deduplicated, in first-touch order.
    pub qualifiers: Vec<String>,
}

/// Render a type expression to Go source text.
#[must_use]
pub fn render(expr: &TypeExpr) -> Rendered {
    let mut out = Rendered::default();
    write_expr(expr, &mut out);
    out
}

fn write_expr(expr: &TypeExpr, out: &mut Rendered) {
    match expr {
        TypeExpr::Name(name) => out.text.push_str(name),
        TypeExpr::Pointer(inner) => {
            out.text.push('*');
            write_expr(inner, out);
        }
        TypeExpr::Slice(elem) => {
            out.text.push_str("[]");
            write_expr(elem, out);
        }
        TypeExpr::Array { len, elem } => {
            out.text.push('[');
            out.text.push_str(len);
            out.text.push(']');
            write_expr(elem, out);
        }
        TypeExpr::Map { key, value } => {
            out.text.push_str("map[");
            write_expr(key, out);
            out.text.push(']');
            write_expr(value, out);
        }
        TypeExpr::Chan { dir, elem } => {
            out.text.push_str(match dir {
                ChanDir::Both => "chan ",
                ChanDir::Send => "chan<- ",
                ChanDir::Recv => "<-chan ",
            });
            write_expr(elem, out);
        }
        TypeExpr::Qualified { package, name } => {
            touch(out, package);
            out.text.push_str(package);
            out.text.push('.');
            out.text.push_str(name);
        }
        TypeExpr::Func => out.text.push_str("func"),
        TypeExpr::Generic { base, args } => {
            write_expr(base, out);
            out.text.push('[');
            write_joined(args, ", ", out);
            out.text.push(']');
        }
        TypeExpr::Variadic(inner) => {
            out.text.push_str("...");
            write_expr(inner, out);
        }
        TypeExpr::Union(terms) => write_joined(terms, " | ", out),
        TypeExpr::Approx(inner) => {
            out.text.push('~');
            write_expr(inner, out);
        }
        TypeExpr::EmptyInterface => out.text.push_str("interface{}"),
        TypeExpr::EmptyStruct => out.text.push_str("struct{}"),
        TypeExpr::Unknown(kind) => {
            out.text.push('<');
            out.text.push_str(kind);
            out.text.push('>');
        }
    }
}

fn write_joined(exprs: &[TypeExpr], sep: &str, out: &mut Rendered) {
    for (idx, expr) in exprs.iter().enumerate() {
        if idx > 0 {
            out.text.push_str(sep);
        }
        write_expr(expr, out);
    }
}

fn touch(out: &mut Rendered, qualifier: &str) {
    if !out.qualifiers.iter().any(|q| q == qualifier) {
        out.qualifiers.push(qualifier.to_string());
    }
}
