//! Receiver and visibility enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ReceiverKind
// ---------------------------------------------------------------------------

/// How a method binds to its owning struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverKind {
    /// `func (x X) M()`
    Value,
    /// `func (x *X) M()`
    Pointer,
}

impl ReceiverKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Pointer => "pointer",
        }
    }
}

impl fmt::Display for ReceiverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MethodVisibility
// ---------------------------------------------------------------------------

/// Go export status of a method name.
///
/// A name is private only when its first character is a lowercase letter.
/// Anything else (uppercase, `_`, non-letter runes) counts as public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodVisibility {
    Public,
    Private,
}

impl MethodVisibility {
    /// Classify a method name by its first character.
    #[must_use]
    pub fn of(name: &str) -> Self {
        match name.chars().next() {
            Some(first) if first.is_lowercase() => Self::Private,
            _ => Self::Public,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for MethodVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
