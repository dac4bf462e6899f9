//! Numeric-bound validation
//!
//! Integer presentation fields must be strictly positive when present:
//! a zero font size, line limit, or icon size is always a defect.

use sdui_core::types::Descriptor;

use super::ValidatorStrategy;
use crate::validator::engine::ValidationEngine;

/// Validator for strictly-positive integer fields
pub struct NumericBoundsValidator {
    name: String,
}

impl Default for NumericBoundsValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericBoundsValidator {
    /// Create a new numeric-bounds validator
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "numeric_bounds_validator".to_string(),
        }
    }
}

fn positive_fields(descriptor: &Descriptor) -> Vec<(&'static str, u32)> {
    let Some(atomic) = descriptor.as_atomic() else {
        return Vec::new();
    };
    [
        ("fontSize", atomic.font_size),
        ("maxLines", atomic.max_lines),
        ("iconSize", atomic.icon_size),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
}

impl ValidatorStrategy for NumericBoundsValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, descriptor: &Descriptor) -> bool {
        !positive_fields(descriptor).is_empty()
    }

    fn check(&self, descriptor: &Descriptor, _engine: &ValidationEngine) -> Vec<String> {
        let id = descriptor.id();
        positive_fields(descriptor)
            .into_iter()
            .filter(|(_, value)| *value == 0)
            .map(|(field, _)| format!("component '{id}': '{field}' must be strictly positive"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sdui_core::types::{AtomicDescriptor, ComponentKind};

    fn run(descriptor: &Descriptor) -> Vec<String> {
        NumericBoundsValidator::new().check(descriptor, &ValidationEngine::new())
    }

    #[test]
    fn zero_values_are_flagged_individually() {
        let mut text = AtomicDescriptor::new("t", ComponentKind::Text);
        text.text = Some("x".to_string());
        text.font_size = Some(0);
        text.max_lines = Some(0);
        let errors = run(&Descriptor::Atomic(text));
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("'fontSize'"));
        assert!(errors[1].contains("'maxLines'"));
    }

    #[test]
    fn positive_values_pass() {
        let mut icon = AtomicDescriptor::new("i", ComponentKind::Icon);
        icon.icon_size = Some(24);
        assert!(run(&Descriptor::Atomic(icon)).is_empty());
    }

    #[test]
    fn does_not_apply_without_sized_fields() {
        let node = Descriptor::Atomic(AtomicDescriptor::new("t", ComponentKind::Text));
        assert!(!NumericBoundsValidator::new().applies(&node));
    }
}
