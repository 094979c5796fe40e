use serde::{Deserialize, Serialize};

use super::{ImportRef, MethodInfo, TypeInfo};

/// Everything needed to emit an interface and mock for one struct.
///
/// Built once per extraction run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructContract {
    pub package_name: String,
    /// Imports referenced by any rendered type, deduplicated by path, in
    /// first-touch order.
    #[serde(default)]
    pub imports: Vec<ImportRef>,
    pub struct_name: String,
    /// `[Y any, Z comparable]` → `("Y", "any")`, `("Z", "comparable")`.
    #[serde(default)]
    pub struct_generic_params: Vec<TypeInfo>,
    /// One import per touched qualifier, in first-touch order. Unlike
    /// `imports`, a path reached under two qualifiers appears twice.
    #[serde(default)]
    pub qualified_imports: Vec<ImportRef>,
    /// Qualifiers touched while rendering the generic constraints.
    #[serde(default)]
    pub generic_qualifiers: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

impl StructContract {
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.struct_generic_params.is_empty()
    }

    /// Look up a method by name. Returns the first declaration if the
    /// source declares the same name more than once.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Find the import reached through `qualifier`.
    #[must_use]
    pub fn import_for(&self, qualifier: &str) -> Option<&ImportRef> {
        self.qualified_imports
            .iter()
            .find(|i| i.qualifier() == qualifier)
    }
}
