//! # goku-gen
//!
//! Renders an interface, and optionally a mock implementation, from a
//! [`StructContract`].
//!
//! A render call derives a [`GeneratorView`] from the contract and the
//! [`GenOptions`], hands it to a [`TemplateRenderer`], then passes the text
//! through a [`SourceFormatter`] before writing it out. Both collaborators are
//! injected; [`Generator::new`] wires the built-in ones.
//!
//! ```ignore
//! let contract = unit.extract("Store")?;
//! let generator = Generator::new();
//! let text = generator.render_to_string(
//!     &contract,
//!     "StoreInterface",
//!     &GenOptions::new().with_mock("StoreMock"),
//! )?;
//! ```

pub mod error;
pub mod format;
pub mod options;
pub mod templates;
pub mod view;

use std::io;

use goku_core::StructContract;

pub use error::GenError;
pub use format::{GoFormatter, SourceFormatter};
pub use options::GenOptions;
pub use templates::{BuiltinTemplates, IFACE_TEMPLATE, TemplateRenderer};
pub use view::GeneratorView;

/// Interface and mock generator.
///
/// Holds no per-render state, so one generator can render any number of
/// contracts with any options.
#[derive(Debug, Clone, Default)]
pub struct Generator<T = BuiltinTemplates, F = GoFormatter> {
    templates: T,
    formatter: F,
}

impl Generator {
    /// Generator backed by the built-in templates and [`GoFormatter`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: TemplateRenderer, F: SourceFormatter> Generator<T, F> {
    #[must_use]
    pub const fn with_collaborators(templates: T, formatter: F) -> Self {
        Self {
            templates,
            formatter,
        }
    }

    /// Render `contract` as interface `interface_name` into `writer`.
    ///
    /// Nothing is written unless the whole render succeeds.
    ///
    /// # Errors
    /// Template, formatting or write failures; see [`GenError`].
    pub fn render<W: io::Write>(
        &self,
        writer: &mut W,
        contract: &StructContract,
        interface_name: &str,
        options: &GenOptions,
    ) -> Result<(), GenError> {
        let text = self.render_to_string(contract, interface_name, options)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Render `contract` as interface `interface_name` and return the text.
    ///
    /// # Errors
    /// Template or formatting failures; see [`GenError`].
    pub fn render_to_string(
        &self,
        contract: &StructContract,
        interface_name: &str,
        options: &GenOptions,
    ) -> Result<String, GenError> {
        let view = GeneratorView::build(contract, interface_name, options);
        tracing::debug!(
            interface = interface_name,
            package = %view.package_name,
            methods = view.public_methods.len() + view.private_methods.len(),
            mock = ?view.mock_name,
            imports = view.imports.len(),
            "rendering interface"
        );
        let raw = self.templates.render(IFACE_TEMPLATE, &view)?;
        self.formatter.format(&raw)
    }
}
