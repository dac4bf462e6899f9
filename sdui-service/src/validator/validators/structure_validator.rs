//! Structural layout validation
//!
//! List and carousel kinds require a non-empty items collection, a
//! floating-action kind requires an icon reference, and an auto-playing
//! carousel requires an advance interval.

use sdui_core::types::{ComponentKind, Descriptor};

use super::ValidatorStrategy;
use crate::validator::engine::ValidationEngine;

/// Validator for kind-specific structural rules
pub struct LayoutStructureValidator {
    name: String,
}

impl Default for LayoutStructureValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStructureValidator {
    /// Create a new structural validator
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "layout_structure_validator".to_string(),
        }
    }
}

impl ValidatorStrategy for LayoutStructureValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, descriptor: &Descriptor) -> bool {
        matches!(
            descriptor.kind(),
            ComponentKind::List | ComponentKind::Carousel | ComponentKind::Fab
        )
    }

    fn check(&self, descriptor: &Descriptor, _engine: &ValidationEngine) -> Vec<String> {
        let mut errors = Vec::new();
        let id = descriptor.id();

        match descriptor {
            Descriptor::Layout(layout) => {
                if layout.items.is_empty() {
                    errors.push(format!(
                        "component '{id}': kind '{}' requires a non-empty 'items' collection",
                        layout.kind
                    ));
                }
                if layout.kind == ComponentKind::Carousel
                    && layout.auto_play == Some(true)
                    && layout.auto_play_interval_ms.is_none()
                {
                    errors.push(format!(
                        "component '{id}': auto-playing carousel requires 'autoPlayIntervalMs'"
                    ));
                }
            }
            Descriptor::Atomic(atomic) => {
                if atomic.kind == ComponentKind::Fab && atomic.icon.is_none() {
                    errors.push(format!(
                        "component '{id}': kind 'fab' requires an 'icon' reference"
                    ));
                }
            }
        }

        errors
    }
}
