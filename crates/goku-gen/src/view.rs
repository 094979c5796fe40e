//! The data a template receives for one render call.

use goku_core::{ImportRef, MethodInfo, MethodVisibility, StructContract, TypeInfo};
use serde::Serialize;

use crate::options::GenOptions;

/// Receiver name of every generated mock method.
pub const MOCK_RECEIVER: &str = "mockImplementation";

/// Plain strings derived from a contract and one set of options.
///
/// Built fresh per render and never shared, so templates only ever see
/// finished text and know nothing about the signature model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratorView {
    pub package_name: String,
    pub imports: Vec<ImportRef>,
    /// Name of the struct the contract was extracted from.
    pub original: String,
    pub name: String,
    pub mock_name: Option<String>,
    /// `[X any, Y comparable]`, empty for non-generic structs.
    pub type_params: String,
    /// `[X, Y]`, empty for non-generic structs.
    pub type_aliases: String,
    /// Emit `var _ Iface = (*Struct)(nil)`.
    pub assert_struct: bool,
    /// Emit `var _ Iface = Mock{}`.
    pub assert_mock: bool,

    pub public_methods: Vec<String>,
    pub private_methods: Vec<String>,
    pub public_mock_fields: Vec<String>,
    pub private_mock_fields: Vec<String>,
    pub public_mock_implementations: Vec<String>,
    pub private_mock_implementations: Vec<String>,
}

impl GeneratorView {
    /// Derive the view of `contract` for the interface `name`.
    #[must_use]
    pub fn build(contract: &StructContract, name: &str, options: &GenOptions) -> Self {
        let mut view = Self {
            package_name: options
                .package_override()
                .unwrap_or(&contract.package_name)
                .to_string(),
            original: contract.struct_name.clone(),
            name: name.to_string(),
            mock_name: options.mock_name().map(ToString::to_string),
            ..Self::default()
        };

        if contract.is_generic() {
            view.type_params =
                bracketed(contract.struct_generic_params.iter().map(ToString::to_string));
            view.type_aliases = bracketed(
                contract
                    .struct_generic_params
                    .iter()
                    .map(|p| p.name.clone().unwrap_or_default()),
            );
        } else {
            view.assert_struct = options.package_override().is_none();
            view.assert_mock = view.mock_name.is_some();
        }

        let mut used: Vec<&str> = contract.generic_qualifiers.iter().map(String::as_str).collect();

        for method in &contract.methods {
            if method.name.is_empty() {
                continue;
            }
            let public = method.visibility() == MethodVisibility::Public;
            if !public && !options.include_private() {
                continue;
            }
            used.extend(method.qualifiers.iter().map(String::as_str));

            let shape = tuple(&method.arguments, &method.returns);
            let mock = view.mock_name.as_deref().map(|mock| {
                (
                    format!("{}Fn func{shape}", method.name),
                    mock_method(mock, &view.type_aliases, method),
                )
            });
            let signature = format!("{}{shape}", method.name);

            let (methods, fields, implementations) = if public {
                (
                    &mut view.public_methods,
                    &mut view.public_mock_fields,
                    &mut view.public_mock_implementations,
                )
            } else {
                (
                    &mut view.private_methods,
                    &mut view.private_mock_fields,
                    &mut view.private_mock_implementations,
                )
            };
            methods.push(signature);
            if let Some((field, implementation)) = mock {
                fields.push(field);
                implementations.push(implementation);
            }
        }

        for qualifier in used {
            let Some(import) = contract.import_for(qualifier) else {
                continue;
            };
            if !view.imports.contains(import) {
                view.imports.push(import.clone());
            }
        }

        view
    }

    /// Interface lines, public first.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.public_methods
            .iter()
            .chain(&self.private_methods)
            .map(String::as_str)
    }

    /// Mock struct fields, public first.
    pub fn mock_fields(&self) -> impl Iterator<Item = &str> {
        self.public_mock_fields
            .iter()
            .chain(&self.private_mock_fields)
            .map(String::as_str)
    }

    /// Mock method declarations, public first.
    pub fn mock_implementations(&self) -> impl Iterator<Item = &str> {
        self.public_mock_implementations
            .iter()
            .chain(&self.private_mock_implementations)
            .map(String::as_str)
    }
}

fn bracketed(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}

/// `(a int, b string) (int, error)`.
///
/// One result renders bare, several render parenthesized, none renders
/// nothing.
pub(crate) fn tuple(arguments: &[TypeInfo], returns: &[String]) -> String {
    let args = arguments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    match returns {
        [] => format!("({args})"),
        [single] => format!("({args}) {single}"),
        many => format!("({args}) ({})", many.join(", ")),
    }
}

/// A mock method forwarding every argument to its function field.
fn mock_method(mock: &str, type_aliases: &str, method: &MethodInfo) -> String {
    let forwardable = method
        .arguments
        .iter()
        .all(|arg| arg.forwardable_name().is_some());

    let arguments: Vec<TypeInfo> = if forwardable {
        method.arguments.clone()
    } else {
        method
            .arguments
            .iter()
            .enumerate()
            .map(|(idx, arg)| TypeInfo::named(format!("arg{idx}"), arg.rendered.clone()))
            .collect()
    };

    let mut call = arguments
        .iter()
        .filter_map(|arg| arg.name.as_deref())
        .collect::<Vec<_>>()
        .join(", ");
    if method.is_variadic() {
        call.push_str("...");
    }

    let keyword = if method.returns.is_empty() { "" } else { "return " };

    format!(
        "func ({MOCK_RECEIVER} {mock}{type_aliases}) {name}{tuple} {{\n\t{keyword}{MOCK_RECEIVER}.{name}Fn({call})\n}}",
        name = method.name,
        tuple = tuple(&arguments, &method.returns),
    )
}
