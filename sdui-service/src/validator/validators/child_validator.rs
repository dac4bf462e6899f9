//! Recursive child validation
//!
//! For layout nodes, re-invokes the whole validation engine on every
//! child and on the item template, appending their error lists. This is
//! the single recursion point through which validation reaches arbitrary
//! depth; no other part of the engine special-cases nesting.

use sdui_core::types::Descriptor;

use super::ValidatorStrategy;
use crate::validator::engine::ValidationEngine;

/// Validator that descends into layout children
pub struct ChildDescriptorValidator {
    name: String,
}

impl Default for ChildDescriptorValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChildDescriptorValidator {
    /// Create a new child validator
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "child_descriptor_validator".to_string(),
        }
    }
}

impl ValidatorStrategy for ChildDescriptorValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, descriptor: &Descriptor) -> bool {
        descriptor.is_layout()
    }

    fn check(&self, descriptor: &Descriptor, engine: &ValidationEngine) -> Vec<String> {
        let Some(layout) = descriptor.as_layout() else {
            return Vec::new();
        };

        let mut errors = Vec::new();
        for child in &layout.children {
            errors.extend(engine.collect_errors(child));
        }
        if let Some(template) = &layout.item_template {
            errors.extend(engine.collect_errors(template));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sdui_core::types::{AtomicDescriptor, ComponentKind, LayoutDescriptor};

    #[test]
    fn child_errors_surface_through_the_engine() {
        let mut root = LayoutDescriptor::new("root", ComponentKind::Column);
        // A text leaf with no text: exactly one defect below the root.
        root.children
            .push(Descriptor::Atomic(AtomicDescriptor::new(
                "broken-leaf",
                ComponentKind::Text,
            )));
        let engine = ValidationEngine::new();
        let errors =
            ChildDescriptorValidator::new().check(&Descriptor::Layout(root), &engine);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("broken-leaf"));
    }

    #[test]
    fn item_template_is_validated_too() {
        let mut list = LayoutDescriptor::new("l", ComponentKind::List);
        list.item_template = Some(Box::new(Descriptor::Atomic(AtomicDescriptor::new(
            "tpl",
            ComponentKind::Image,
        ))));
        let engine = ValidationEngine::new();
        let errors = ChildDescriptorValidator::new().check(&Descriptor::Layout(list), &engine);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("tpl"));
    }

    #[test]
    fn does_not_apply_to_leaves() {
        let node = Descriptor::Atomic(AtomicDescriptor::new("t", ComponentKind::Text));
        assert!(!ChildDescriptorValidator::new().applies(&node));
    }
}
