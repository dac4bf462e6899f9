//! Enum-membership validation
//!
//! String-valued style/behavior fields must belong to a fixed whitelist
//! per field. Absent fields are never checked; presence is what makes a
//! descriptor applicable here.

use sdui_core::types::Descriptor;

use super::ValidatorStrategy;
use crate::validator::engine::ValidationEngine;

const EMPHASIS: &[&str] = &["none", "bold", "italic", "underline"];
const INPUT_VARIANTS: &[&str] = &["text", "password", "email", "number", "phone"];
const CONTENT_FIT: &[&str] = &["fill", "contain", "cover", "fitWidth", "fitHeight", "none"];
const ARRANGEMENTS: &[&str] = &[
    "start",
    "center",
    "end",
    "spaceBetween",
    "spaceAround",
    "spaceEvenly",
];
const ALIGNMENTS: &[&str] = &["start", "center", "end", "stretch"];
const SCROLL_DIRECTIONS: &[&str] = &["vertical", "horizontal"];

/// Validator for whitelisted string fields
pub struct EnumMembershipValidator {
    name: String,
}

impl Default for EnumMembershipValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumMembershipValidator {
    /// Create a new enum-membership validator
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "enum_membership_validator".to_string(),
        }
    }
}

/// The whitelisted fields present on a descriptor, as (field, value, whitelist)
fn enum_fields(descriptor: &Descriptor) -> Vec<(&'static str, &str, &'static [&'static str])> {
    let mut fields = Vec::new();
    match descriptor {
        Descriptor::Layout(layout) => {
            if let Some(value) = &layout.arrangement {
                fields.push(("arrangement", value.as_str(), ARRANGEMENTS));
            }
            if let Some(value) = &layout.alignment {
                fields.push(("alignment", value.as_str(), ALIGNMENTS));
            }
            if let Some(value) = &layout.scroll_direction {
                fields.push(("scrollDirection", value.as_str(), SCROLL_DIRECTIONS));
            }
        }
        Descriptor::Atomic(atomic) => {
            if let Some(value) = &atomic.emphasis {
                fields.push(("emphasis", value.as_str(), EMPHASIS));
            }
            if let Some(value) = &atomic.input_variant {
                fields.push(("inputVariant", value.as_str(), INPUT_VARIANTS));
            }
            if let Some(value) = &atomic.content_fit {
                fields.push(("contentFit", value.as_str(), CONTENT_FIT));
            }
        }
    }
    fields
}

impl ValidatorStrategy for EnumMembershipValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, descriptor: &Descriptor) -> bool {
        !enum_fields(descriptor).is_empty()
    }

    fn check(&self, descriptor: &Descriptor, _engine: &ValidationEngine) -> Vec<String> {
        let id = descriptor.id();
        enum_fields(descriptor)
            .into_iter()
            .filter(|(_, value, whitelist)| !whitelist.contains(value))
            .map(|(field, value, whitelist)| {
                format!(
                    "component '{id}': '{field}' value '{value}' is not one of [{}]",
                    whitelist.join(", ")
                )
            })
            .collect()
    }
}
