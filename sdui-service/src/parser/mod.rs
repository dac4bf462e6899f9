//! Descriptor parsing
//!
//! Turns raw JSON text into a typed descriptor tree. The orchestrator
//! decodes the text into a generic JSON value, resolves the root's type
//! tag, selects the single strategy that handles the resolved kind, and
//! drives recursion through a closure that re-enters the same algorithm
//! for nested objects. Parsing is all-or-nothing: any failure aborts the
//! whole call with a single [`ParseError`]; there is no partial tree.

pub mod resolver;
pub mod strategies;

pub use resolver::{resolve, resolve_lenient};
pub use strategies::{AtomicParseStrategy, LayoutParseStrategy, ParseStrategy, RecurseFn};

use sdui_core::config::ParserConfig;
use sdui_core::error::{ParseError, Result};
use sdui_core::types::Descriptor;
use serde_json::Value;
use tracing::trace;

/// Recursive, strategy-dispatched descriptor parser
///
/// The strategy list is an immutable value injected at construction; the
/// default set is the layout/atomic pair, which partitions the kind set
/// exhaustively and disjointly so exactly one strategy matches any
/// resolved kind.
pub struct ParseOrchestrator {
    strategies: Vec<Box<dyn ParseStrategy>>,
    config: ParserConfig,
}

impl Default for ParseOrchestrator {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl ParseOrchestrator {
    /// Create an orchestrator with the default strategy pair
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self::with_strategies(
            vec![Box::new(LayoutParseStrategy), Box::new(AtomicParseStrategy)],
            config,
        )
    }

    /// Create an orchestrator with an explicit strategy list
    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn ParseStrategy>>, config: ParserConfig) -> Self {
        Self { strategies, config }
    }

    /// Parse raw JSON text into a descriptor tree
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] for malformed JSON,
    /// [`ParseError::MissingProperty`] when `type` or `id` is absent,
    /// [`ParseError::UnknownKind`] for a tag outside the closed set, and
    /// [`ParseError::DepthExceeded`] past the configured nesting limit.
    pub fn parse_str(&self, text: &str) -> Result<Descriptor> {
        let value: Value = serde_json::from_str(text)?;
        self.parse_value(&value, 0)
    }

    /// Parse one JSON node at the given nesting depth
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ParseOrchestrator::parse_str`].
    pub fn parse_value(&self, value: &Value, depth: usize) -> Result<Descriptor> {
        if depth > self.config.max_depth {
            return Err(ParseError::depth_exceeded(self.config.max_depth));
        }

        let obj = value
            .as_object()
            .ok_or_else(|| ParseError::missing_property("type"))?;
        let tag = obj
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ParseError::missing_property("type"))?;

        let kind = if self.config.lenient_kinds {
            resolver::resolve_lenient(tag)?
        } else {
            resolver::resolve(tag)?
        };
        trace!(%kind, depth, "parsing descriptor node");

        // The layout/atomic partition is exhaustive, so a miss here means
        // the injected strategy list does not cover the closed set.
        let strategy = self
            .strategies
            .iter()
            .find(|strategy| strategy.can_handle(kind))
            .ok_or_else(|| ParseError::unknown_kind(tag))?;

        let recurse = |child: &Value, child_depth: usize| self.parse_value(child, child_depth);
        strategy.parse(obj, kind, depth, &recurse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sdui_core::types::ComponentKind;

    fn orchestrator() -> ParseOrchestrator {
        ParseOrchestrator::default()
    }

    #[test]
    fn parses_an_atomic_root() {
        let tree = orchestrator()
            .parse_str(r#"{"id":"b","type":"button","text":"Go"}"#)
            .expect("parses");
        assert_eq!(tree.id(), "b");
        assert_eq!(tree.kind(), ComponentKind::Button);
        assert!(tree.as_atomic().is_some());
    }

    #[test]
    fn malformed_json_is_a_syntax_error() {
        let err = orchestrator().parse_str("{not json").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { location: Some(_), .. }));
    }

    #[test]
    fn missing_type_tag_is_reported() {
        let err = orchestrator()
            .parse_str(r#"{"id":"b","text":"Go"}"#)
            .unwrap_err();
        assert_eq!(err, ParseError::missing_property("type"));
    }

    #[test]
    fn non_object_root_is_missing_its_type() {
        let err = orchestrator().parse_str("[1,2,3]").unwrap_err();
        assert_eq!(err, ParseError::missing_property("type"));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = orchestrator()
            .parse_str(r#"{"id":"x","type":"hologram"}"#)
            .unwrap_err();
        assert_eq!(err, ParseError::unknown_kind("hologram"));
    }

    #[test]
    fn child_failure_aborts_the_whole_parse() {
        let err = orchestrator()
            .parse_str(r#"{"id":"root","type":"column","children":[{"type":"text"}]}"#)
            .unwrap_err();
        assert_eq!(err, ParseError::missing_property_in("id", "text"));
    }

    #[test]
    fn nesting_past_the_limit_fails_fast() {
        let config = ParserConfig {
            max_depth: 3,
            ..Default::default()
        };
        let mut text = r#"{"id":"leaf","type":"text","text":"deep"}"#.to_string();
        for level in 0..6 {
            text = format!(r#"{{"id":"n{level}","type":"box","children":[{text}]}}"#);
        }
        let err = ParseOrchestrator::new(config).parse_str(&text).unwrap_err();
        assert_eq!(err, ParseError::depth_exceeded(3));
    }

    #[test]
    fn lenient_config_accepts_cased_tags() {
        let config = ParserConfig {
            lenient_kinds: true,
            ..Default::default()
        };
        let tree = ParseOrchestrator::new(config)
            .parse_str(r#"{"id":"b","type":"Button","text":"Go"}"#)
            .expect("lenient parse");
        assert_eq!(tree.kind(), ComponentKind::Button);
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = r#"{"id":"root","type":"row","children":[
            {"id":"t","type":"text","text":"hello","fontSize":12},
            {"id":"i","type":"image","url":"https://x/y.png"}
        ]}"#;
        let first = orchestrator().parse_str(text).expect("parses");
        let second = orchestrator().parse_str(text).expect("parses");
        assert_eq!(first, second);
    }
}
