//! Required-field validation
//!
//! Every node needs a non-empty id. Per atomic kind, certain fields must
//! be present: display text for text and button kinds, a URL for the
//! image kind, an option list for the select kind, and a min/max pair
//! with `min < max` for the slider kind.

use sdui_core::types::{AtomicDescriptor, ComponentKind, Descriptor};

use super::ValidatorStrategy;
use crate::validator::engine::ValidationEngine;

/// Validator for structurally required descriptor fields
pub struct RequiredFieldValidator {
    name: String,
}

impl Default for RequiredFieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RequiredFieldValidator {
    /// Create a new required-field validator
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "required_field_validator".to_string(),
        }
    }

    fn check_atomic(&self, atomic: &AtomicDescriptor, errors: &mut Vec<String>) {
        let id = &atomic.id;
        match atomic.kind {
            ComponentKind::Text if atomic.text.is_none() => {
                errors.push(format!("component '{id}': kind 'text' requires 'text'"));
            }
            ComponentKind::Button if atomic.text.is_none() => {
                errors.push(format!(
                    "component '{id}': kind 'button' requires a 'text' label"
                ));
            }
            ComponentKind::Image if atomic.url.is_none() => {
                errors.push(format!("component '{id}': kind 'image' requires 'url'"));
            }
            ComponentKind::Select => {
                match &atomic.options {
                    None => errors.push(format!(
                        "component '{id}': kind 'select' requires an 'options' list"
                    )),
                    Some(options) if options.is_empty() => errors.push(format!(
                        "component '{id}': kind 'select' requires at least one option"
                    )),
                    Some(_) => {}
                }
            }
            ComponentKind::Slider => {
                if atomic.min_value.is_none() {
                    errors.push(format!(
                        "component '{id}': kind 'slider' requires 'minValue'"
                    ));
                }
                if atomic.max_value.is_none() {
                    errors.push(format!(
                        "component '{id}': kind 'slider' requires 'maxValue'"
                    ));
                }
                if let (Some(min), Some(max)) = (atomic.min_value, atomic.max_value)
                    && min >= max
                {
                    errors.push(format!(
                        "component '{id}': 'minValue' ({min}) must be less than 'maxValue' ({max})"
                    ));
                }
            }
            _ => {}
        }
    }
}

impl ValidatorStrategy for RequiredFieldValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, _descriptor: &Descriptor) -> bool {
        // The id rule holds for every node.
        true
    }

    fn check(&self, descriptor: &Descriptor, _engine: &ValidationEngine) -> Vec<String> {
        let mut errors = Vec::new();

        if descriptor.id().trim().is_empty() {
            errors.push(format!(
                "component of kind '{}' has an empty id",
                descriptor.kind()
            ));
        }

        if let Some(atomic) = descriptor.as_atomic() {
            self.check_atomic(atomic, &mut errors);
        }

        errors
    }
}
