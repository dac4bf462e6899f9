//! Color-format validation
//!
//! A color field, if present, must be a `#`-marked 6- or 8-hex-digit
//! string. The shape is all this core checks; converting colors to paint
//! units is a separate collaborator's concern.

use once_cell::sync::Lazy;
use regex::Regex;
use sdui_core::types::Descriptor;

use super::ValidatorStrategy;
use crate::validator::engine::ValidationEngine;

static COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").expect("color pattern is valid")
});

/// Validator for hex color strings
pub struct ColorFormatValidator {
    name: String,
}

impl Default for ColorFormatValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorFormatValidator {
    /// Create a new color-format validator
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "color_format_validator".to_string(),
        }
    }
}

impl ValidatorStrategy for ColorFormatValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, descriptor: &Descriptor) -> bool {
        descriptor
            .style()
            .is_some_and(|style| style.background_color.is_some())
    }

    fn check(&self, descriptor: &Descriptor, _engine: &ValidationEngine) -> Vec<String> {
        let Some(color) = descriptor
            .style()
            .and_then(|style| style.background_color.as_deref())
        else {
            return Vec::new();
        };

        if COLOR_PATTERN.is_match(color) {
            Vec::new()
        } else {
            vec![format!(
                "component '{}': 'backgroundColor' value '{color}' is not a #RRGGBB or #AARRGGBB color",
                descriptor.id()
            )]
        }
    }
}
