use serde::{Deserialize, Serialize};

use super::TypeInfo;
use crate::enums::{MethodVisibility, ReceiverKind};

/// A method whose receiver resolves to the target struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    pub receiver: ReceiverKind,
    /// Receiver instantiation names (`X[A, B]` → `A`, `B`) followed by any
    /// type parameters declared on the method itself.
    #[serde(default)]
    pub generic_params: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<TypeInfo>,
    #[serde(default)]
    pub returns: Vec<String>,
    /// Package qualifiers touched while rendering this signature, in
    /// first-touch order.
    #[serde(default)]
    pub qualifiers: Vec<String>,
}

impl MethodInfo {
    #[must_use]
    pub fn visibility(&self) -> MethodVisibility {
        MethodVisibility::of(&self.name)
    }

    /// True when the final argument is `...T`.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.arguments.last().is_some_and(TypeInfo::is_variadic)
    }
}
