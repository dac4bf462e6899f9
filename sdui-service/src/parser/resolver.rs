//! Type tag resolution
//!
//! Maps JSON `type` tags to the closed [`ComponentKind`] set. The
//! case-sensitive [`resolve`] is primary; [`resolve_lenient`] exists for
//! callers that accept differently-cased tags. Both are stateless.

use once_cell::sync::Lazy;
use sdui_core::error::{ParseError, Result};
use sdui_core::types::ComponentKind;
use std::collections::HashMap;

static KIND_TABLE: Lazy<HashMap<&'static str, ComponentKind>> = Lazy::new(|| {
    ComponentKind::ALL
        .iter()
        .map(|kind| (kind.tag(), *kind))
        .collect()
});

/// Resolve a type tag to a component kind, case-sensitively
///
/// # Errors
///
/// Returns [`ParseError::UnknownKind`] if the tag is not in the closed set.
pub fn resolve(tag: &str) -> Result<ComponentKind> {
    KIND_TABLE
        .get(tag)
        .copied()
        .ok_or_else(|| ParseError::unknown_kind(tag))
}

/// Resolve a type tag to a component kind, ignoring ASCII case
///
/// # Errors
///
/// Returns [`ParseError::UnknownKind`] if no tag matches under any casing.
pub fn resolve_lenient(tag: &str) -> Result<ComponentKind> {
    KIND_TABLE
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(tag))
        .map(|(_, kind)| *kind)
        .ok_or_else(|| ParseError::unknown_kind(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_every_canonical_tag() {
        for kind in ComponentKind::ALL {
            assert_eq!(resolve(kind.tag()).expect("canonical tag"), kind);
        }
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = resolve("blink").unwrap_err();
        assert!(matches!(err, ParseError::UnknownKind { tag } if tag == "blink"));
    }

    #[test]
    fn strict_resolution_is_case_sensitive() {
        assert!(resolve("Button").is_err());
        assert!(resolve("textfield").is_err());
    }

    #[test]
    fn lenient_resolution_ignores_case() {
        assert_eq!(
            resolve_lenient("BUTTON").expect("lenient"),
            ComponentKind::Button
        );
        assert_eq!(
            resolve_lenient("textfield").expect("lenient"),
            ComponentKind::TextField
        );
        assert!(resolve_lenient("blink").is_err());
    }
}
