use serde::{Deserialize, Serialize};
use std::fmt;

/// A rendered type plus the name bound to it, if any.
///
/// For `func (x *X) Method(arg map[string]int)` the argument is
/// `TypeInfo { name: Some("arg"), rendered: "map[string]int" }`. For a
/// generic parameter `[T comparable]` the name is `T` and the rendered text
/// is the constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeInfo {
    pub name: Option<String>,
    pub rendered: String,
}

impl TypeInfo {
    #[must_use]
    pub fn named(name: impl Into<String>, rendered: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            rendered: rendered.into(),
        }
    }

    #[must_use]
    pub fn unnamed(rendered: impl Into<String>) -> Self {
        Self {
            name: None,
            rendered: rendered.into(),
        }
    }

    /// True for a trailing `...T` parameter.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.rendered.starts_with("...")
    }

    /// A binding that can be referenced from a function body.
    ///
    /// `_` and missing names cannot be forwarded.
    #[must_use]
    pub fn forwardable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| *name != "_")
    }
}

/// `name type`, or just `type` when unnamed.
impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} {}", self.rendered),
            None => f.write_str(&self.rendered),
        }
    }
}
