use crate::artifacts::version::{FULL_SEM_VER_FIELD, VERSION_KIND_ALIASES};

/// Which version-computation field a diagram annotation displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionKind(String);

impl VersionKind {
    /// Resolves a `ver` token. Known aliases are case-insensitive; anything
    /// else is taken verbatim as a field name.
    pub fn parse(token: &str) -> Self {
        let lowered = token.to_ascii_lowercase();
        let field = VERSION_KIND_ALIASES
            .get(lowered.as_str())
            .copied()
            .unwrap_or(token);

        Self(field.to_string())
    }

    pub fn field_name(&self) -> &str {
        &self.0
    }
}

impl Default for VersionKind {
    fn default() -> Self {
        Self(FULL_SEM_VER_FIELD.to_string())
    }
}

impl std::fmt::Display for VersionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
