//! Validation engine for descriptor trees
//!
//! This module implements a recursive, multi-strategy validation engine
//! over parsed descriptors. It supports:
//!
//! - Required-field checks per atomic kind
//! - Enum-membership checks for whitelisted string fields
//! - Strictly-positive numeric bounds
//! - Hex color format checks
//! - Structural layout rules (items, icons, auto-play intervals)
//! - Recursive descent through children and item templates
//!
//! Validation is fail-soft: every applicable strategy runs and every
//! failure is collected, in contrast to parsing's fail-fast policy.

pub mod engine;
pub mod validators;

pub use engine::ValidationEngine;
pub use validators::{ValidatorRegistry, ValidatorStrategy};

use sdui_core::types::Descriptor;
use sdui_core::validation::ValidationResult;

/// Validate a descriptor tree with the default strategy set
#[must_use]
pub fn validate(descriptor: &Descriptor) -> ValidationResult {
    ValidationEngine::new().validate(descriptor)
}
