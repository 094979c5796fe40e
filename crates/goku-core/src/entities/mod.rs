//! Extraction output types.

mod contract;
mod import;
mod method;
mod type_info;

pub use contract::StructContract;
pub use import::{ImportRef, basename};
pub use method::MethodInfo;
pub use type_info::TypeInfo;
