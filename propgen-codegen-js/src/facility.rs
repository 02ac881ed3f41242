//! The schema facility imported by generated components.

/// Names used to import and reference the prop validation library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFacility {
    /// Default-import binding (e.g. `PropTypes`)
    pub binding: &'static str,
    /// Module the binding is imported from (e.g. `prop-types`)
    pub module: &'static str,
    /// Lint rule suppressed above object-of-any validators
    pub any_object_lint: &'static str,
}

impl SchemaFacility {
    /// The `prop-types` package, as used by React components.
    pub const PROP_TYPES: Self = Self {
        binding: "PropTypes",
        module: "prop-types",
        any_object_lint: "react/forbid-prop-types",
    };

    /// `binding.validator`, e.g. `PropTypes.string`.
    pub fn validator(&self, name: &str) -> String {
        format!("{}.{}", self.binding, name)
    }
}

impl Default for SchemaFacility {
    fn default() -> Self {
        Self::PROP_TYPES
    }
}
