//! # SDUI Core
//!
//! Core types for server-driven UI descriptor compilation in Rust.
//!
//! This crate provides the fundamental building blocks shared by the
//! parser, the validation engine, and the descriptor cache: the typed
//! descriptor tree, the closed component-kind set, the parse-error
//! taxonomy, the validation result type, and configuration.
//!
//! ## Design Principles
//!
//! - **Closed variants**: the component set is a fixed enumeration, and
//!   every kind maps totally to either a layout or an atomic descriptor
//! - **Immutable trees**: descriptors are created once by the parser and
//!   read-only afterward, so cached trees can be shared without copying
//! - **Fail-fast parsing, fail-soft validation**: parsing stops at the
//!   first error; validation accumulates every applicable error

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types for descriptor parsing
pub mod error;

/// Type definitions for the descriptor tree
pub mod types;

/// Validation result type
pub mod validation;

/// Configuration types
pub mod config;

// Re-export commonly used types
pub use config::{CacheConfig, ParserConfig, SduiConfig};
pub use error::{ParseError, Result};
pub use serde_json::Value;
pub use types::{
    AtomicDescriptor, ComponentKind, Descriptor, InputConstraints, LayoutDescriptor,
    StyleProperties,
};
pub use validation::ValidationResult;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::{ParseError, Result};
    pub use crate::types::*;
    pub use crate::validation::ValidationResult;
}
