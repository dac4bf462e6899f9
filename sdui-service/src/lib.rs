//! # SDUI Service
//!
//! Server-driven UI descriptor compilation for Rust.
//!
//! This crate compiles a JSON document describing a UI tree into a
//! typed, validated, in-memory descriptor tree, and memoizes that
//! compilation so repeated requests for byte-identical JSON avoid
//! re-parsing.
//!
//! ## Overview
//!
//! - **Parsing**: a recursive, strategy-dispatched parser turns untyped
//!   JSON nodes into a closed set of typed tree nodes, failing fast with
//!   a small closed error taxonomy
//! - **Validation**: a recursive, multi-strategy engine accumulates
//!   structural and semantic errors across an entire tree
//! - **Memoization**: a content-addressed, capacity-bounded, LRU-evicting
//!   cache keyed by a 128-bit hash of the raw input text
//!
//! ## Quick Start
//!
//! ```rust
//! use sdui_service::create_sdui_service;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = create_sdui_service();
//!
//! let tree = service.parse_or_fetch(
//!     r#"{"id":"root","type":"column","children":[
//!         {"id":"title","type":"text","text":"Hello"}
//!     ]}"#,
//! )?;
//! assert_eq!(tree.id(), "root");
//!
//! let result = service.validate(&tree);
//! assert!(result.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! Parsing is CPU-bound and synchronous; callers typically run it off
//! the interactive thread and marshal only the final result back. The
//! cache is the only mutable shared state and is safe to use from
//! multiple threads.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Bounded LRU cache for parsed descriptor trees
pub mod cache;

/// Factory functions for wiring the descriptor service
pub mod factory;

/// Descriptor parsing
pub mod parser;

/// Parse-with-memoization facade
pub mod service;

/// Validation engine for descriptor trees
pub mod validator;

// Re-export commonly used types
pub use cache::{CacheKey, CacheStats, DescriptorCache};
pub use factory::{create_sdui_service, create_sdui_service_with_config};
pub use parser::ParseOrchestrator;
pub use service::{SduiService, ServiceStats};
pub use validator::{ValidationEngine, ValidatorRegistry, ValidatorStrategy};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cache::{CacheKey, DescriptorCache};
    pub use crate::factory::{create_sdui_service, create_sdui_service_with_config};
    pub use crate::parser::ParseOrchestrator;
    pub use crate::service::SduiService;
    pub use crate::validator::{ValidationEngine, ValidatorRegistry, ValidatorStrategy};
    pub use sdui_core::prelude::*;
}
