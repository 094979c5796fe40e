//! Template-rendering collaborator.
//!
//! The generator hands a [`GeneratorView`] to a [`TemplateRenderer`] by
//! template name and gets text back. [`BuiltinTemplates`] is the registry
//! shipped with goku; tests or embedders can supply their own.

use std::fmt::Write;

use crate::error::GenError;
use crate::view::GeneratorView;

/// Name of the interface + mock template.
pub const IFACE_TEMPLATE: &str = "iface.go.tmpl";

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by goku. DO NOT EDIT.";

/// Turns a view into source text.
pub trait TemplateRenderer {
    /// Render the template registered as `name`.
    ///
    /// # Errors
    /// [`GenError::TemplateNotFound`] for an unknown name,
    /// [`GenError::Template`] when assembly fails.
    fn render(&self, name: &str, view: &GeneratorView) -> Result<String, GenError>;
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateRenderer for BuiltinTemplates {
    fn render(&self, name: &str, view: &GeneratorView) -> Result<String, GenError> {
        match name {
            IFACE_TEMPLATE => {
                let mut out = String::new();
                iface(&mut out, view)?;
                Ok(out)
            }
            other => Err(GenError::TemplateNotFound(other.to_string())),
        }
    }
}

fn iface(out: &mut String, view: &GeneratorView) -> std::fmt::Result {
    writeln!(out, "{GENERATED_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "package {}", view.package_name)?;

    if !view.imports.is_empty() {
        writeln!(out)?;
        writeln!(out, "import (")?;
        for import in &view.imports {
            if import.alias.is_empty() {
                writeln!(out, "\t\"{}\"", import.path)?;
            } else {
                writeln!(out, "\t{} \"{}\"", import.alias, import.path)?;
            }
        }
        writeln!(out, ")")?;
    }

    if view.assert_struct {
        writeln!(out)?;
        writeln!(out, "var _ {} = (*{})(nil)", view.name, view.original)?;
    }

    writeln!(out)?;
    writeln!(out, "type {}{} interface {{", view.name, view.type_params)?;
    for method in view.methods() {
        writeln!(out, "\t{method}")?;
    }
    writeln!(out, "}}")?;

    let Some(mock) = &view.mock_name else {
        return Ok(());
    };

    if view.assert_mock {
        writeln!(out)?;
        writeln!(out, "var _ {} = {mock}{{}}", view.name)?;
    }

    writeln!(out)?;
    writeln!(out, "type {mock}{} struct {{", view.type_params)?;
    for field in view.mock_fields() {
        writeln!(out, "\t{field}")?;
    }
    writeln!(out, "}}")?;

    for implementation in view.mock_implementations() {
        writeln!(out)?;
        writeln!(out, "{implementation}")?;
    }

    Ok(())
}
