//! Validator strategies for descriptor trees
//!
//! Each strategy declares which descriptors it applies to and returns the
//! error messages for one node. Strategies are independent; the engine
//! runs every applicable one and concatenates their messages, so multiple
//! unrelated defects on a single node are all reported.

use sdui_core::types::Descriptor;

use crate::validator::engine::ValidationEngine;

pub mod bounds_validator;
pub mod child_validator;
pub mod color_validator;
pub mod enum_validator;
pub mod required_validator;
pub mod structure_validator;

pub use bounds_validator::NumericBoundsValidator;
pub use child_validator::ChildDescriptorValidator;
pub use color_validator::ColorFormatValidator;
pub use enum_validator::EnumMembershipValidator;
pub use required_validator::RequiredFieldValidator;
pub use structure_validator::LayoutStructureValidator;

/// Trait for all validator strategies
pub trait ValidatorStrategy: Send + Sync {
    /// Get the strategy name
    fn name(&self) -> &str;

    /// Whether this strategy has checks for the given descriptor
    fn applies(&self, descriptor: &Descriptor) -> bool;

    /// Check one descriptor, returning every violated rule as a message
    ///
    /// The engine is passed through so the recursive child validator can
    /// re-enter the whole engine rather than itself; other strategies
    /// ignore it.
    fn check(&self, descriptor: &Descriptor, engine: &ValidationEngine) -> Vec<String>;
}

/// Registry of validator strategies, run in insertion order
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn ValidatorStrategy>>,
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorRegistry {
    /// Create a registry with the default fixed strategy set
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: vec![
                Box::new(RequiredFieldValidator::new()),
                Box::new(EnumMembershipValidator::new()),
                Box::new(NumericBoundsValidator::new()),
                Box::new(ColorFormatValidator::new()),
                Box::new(LayoutStructureValidator::new()),
                Box::new(ChildDescriptorValidator::new()),
            ],
        }
    }

    /// Create an empty registry
    #[must_use]
    pub fn empty() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Add a custom validator after the default set
    pub fn add_validator(&mut self, validator: Box<dyn ValidatorStrategy>) {
        self.validators.push(validator);
    }

    /// All registered validators, in execution order
    #[must_use]
    pub fn validators(&self) -> &[Box<dyn ValidatorStrategy>] {
        &self.validators
    }
}
