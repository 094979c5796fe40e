//! Per-render generation options.

/// Options of one render call. Every field is independently optional.
///
/// Empty strings are treated as unset, so values coming straight from
/// configuration files or flags need no pre-filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenOptions {
    mock_name: Option<String>,
    include_private: bool,
    package_override: Option<String>,
}

impl GenOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a mock type named `name` alongside the interface.
    #[must_use]
    pub fn with_mock(mut self, name: impl Into<String>) -> Self {
        self.mock_name = non_empty(name.into());
        self
    }

    /// Also emit methods whose name starts with a lowercase letter.
    #[must_use]
    pub const fn with_private(mut self, include: bool) -> Self {
        self.include_private = include;
        self
    }

    /// Declare the output in `package` instead of the source package.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package_override = non_empty(package.into());
        self
    }

    #[must_use]
    pub fn mock_name(&self) -> Option<&str> {
        self.mock_name.as_deref()
    }

    #[must_use]
    pub const fn include_private(&self) -> bool {
        self.include_private
    }

    #[must_use]
    pub fn package_override(&self) -> Option<&str> {
        self.package_override.as_deref()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
