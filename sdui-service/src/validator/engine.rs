//! Main validation engine
//!
//! Runs every applicable validator strategy against a descriptor and
//! flattens their error lists. There is no short-circuit: every
//! applicable validator always runs, so multiple unrelated defects on
//! one node are all reported, and the recursive child validator re-enters
//! the engine for arbitrary depth. Callers must not assume a bounded
//! result size.

use sdui_core::types::Descriptor;
use sdui_core::validation::ValidationResult;
use tracing::debug;

use super::validators::ValidatorRegistry;

/// Strategy-driven, accumulate-all descriptor validator
pub struct ValidationEngine {
    registry: ValidatorRegistry,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create an engine with the default validator set
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(ValidatorRegistry::new())
    }

    /// Create an engine with an explicit registry
    #[must_use]
    pub fn with_registry(registry: ValidatorRegistry) -> Self {
        Self { registry }
    }

    /// Validate a descriptor tree
    #[must_use]
    pub fn validate(&self, descriptor: &Descriptor) -> ValidationResult {
        let errors = self.collect_errors(descriptor);
        if !errors.is_empty() {
            debug!(
                component = descriptor.id(),
                count = errors.len(),
                "descriptor validation failed"
            );
        }
        ValidationResult::from_errors(errors)
    }

    /// Run every applicable strategy on one node, in registry order
    ///
    /// The recursive child validator calls back into this method for
    /// each child, which is how errors from arbitrary depth end up in a
    /// single flattened list.
    #[must_use]
    pub fn collect_errors(&self, descriptor: &Descriptor) -> Vec<String> {
        self.registry
            .validators()
            .iter()
            .filter(|validator| validator.applies(descriptor))
            .flat_map(|validator| validator.check(descriptor, self))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validators::ValidatorStrategy;
    use pretty_assertions::assert_eq;
    use sdui_core::types::{AtomicDescriptor, ComponentKind, Descriptor, LayoutDescriptor};

    #[test]
    fn valid_tree_passes() {
        let mut button = AtomicDescriptor::new("ok", ComponentKind::Button);
        button.text = Some("Go".to_string());
        let mut root = LayoutDescriptor::new("root", ComponentKind::Column);
        root.children.push(Descriptor::Atomic(button));

        let result = ValidationEngine::new().validate(&Descriptor::Layout(root));
        assert!(result.is_success());
    }

    #[test]
    fn all_applicable_validators_run() {
        // One node, two independent defects from two different
        // strategies: missing text (required) and zero font size
        // (bounds).
        let mut text = AtomicDescriptor::new("t", ComponentKind::Text);
        text.font_size = Some(0);

        let result = ValidationEngine::new().validate(&Descriptor::Atomic(text));
        assert_eq!(result.error_count(), 2);
    }

    #[test]
    fn custom_validators_extend_the_registry() {
        struct IdPrefixValidator;
        impl ValidatorStrategy for IdPrefixValidator {
            fn name(&self) -> &str {
                "id_prefix_validator"
            }
            fn applies(&self, _descriptor: &Descriptor) -> bool {
                true
            }
            fn check(&self, descriptor: &Descriptor, _engine: &ValidationEngine) -> Vec<String> {
                if descriptor.id().starts_with("app-") {
                    Vec::new()
                } else {
                    vec![format!("component '{}': id lacks app prefix", descriptor.id())]
                }
            }
        }

        let mut registry = ValidatorRegistry::new();
        registry.add_validator(Box::new(IdPrefixValidator));
        let engine = ValidationEngine::with_registry(registry);

        let mut button = AtomicDescriptor::new("go", ComponentKind::Button);
        button.text = Some("Go".to_string());
        let result = engine.validate(&Descriptor::Atomic(button));
        assert_eq!(result.error_count(), 1);
        assert!(result.errors()[0].contains("prefix"));
    }
}
