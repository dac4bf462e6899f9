//! Parse strategies for the two descriptor shapes
//!
//! Each strategy turns one JSON object, given its resolved kind, into the
//! corresponding descriptor node. The layout strategy recurses into
//! children and the item template through a callback supplied by the
//! orchestrator. Together the two strategies partition the kind set
//! exhaustively and disjointly.
//!
//! Field extraction is best-effort: a present optional field of the wrong
//! JSON type reads as absent, never as an error. Only `id` (and the
//! orchestrator-level `type` tag) are structurally required.

use sdui_core::error::{ParseError, Result};
use sdui_core::types::{
    AtomicDescriptor, ComponentKind, Descriptor, InputConstraints, LayoutDescriptor,
    StyleProperties,
};
use serde_json::{Map, Value};

/// Recursive parse callback threaded through layout strategies
///
/// Re-enters the orchestrator's node parser at the given depth.
pub type RecurseFn<'a> = dyn Fn(&Value, usize) -> Result<Descriptor> + 'a;

/// A strategy that knows how to parse one partition of the kind set
pub trait ParseStrategy: Send + Sync {
    /// Whether this strategy parses descriptors of the given kind
    fn can_handle(&self, kind: ComponentKind) -> bool;

    /// Parse one JSON object into a descriptor node
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if a structurally required field is
    /// absent or a recursive child parse fails.
    fn parse(
        &self,
        obj: &Map<String, Value>,
        kind: ComponentKind,
        depth: usize,
        recurse: &RecurseFn<'_>,
    ) -> Result<Descriptor>;
}

/// Strategy for layout kinds: containers that may hold children
pub struct LayoutParseStrategy;

impl ParseStrategy for LayoutParseStrategy {
    fn can_handle(&self, kind: ComponentKind) -> bool {
        kind.is_layout()
    }

    fn parse(
        &self,
        obj: &Map<String, Value>,
        kind: ComponentKind,
        depth: usize,
        recurse: &RecurseFn<'_>,
    ) -> Result<Descriptor> {
        let mut node = LayoutDescriptor::new(require_id(obj, kind)?, kind);
        node.style = extract_style(obj);
        node.arrangement = opt_string(obj, "arrangement");
        node.alignment = opt_string(obj, "alignment");
        node.scroll_direction = opt_string(obj, "scrollDirection");
        node.auto_play = opt_bool(obj, "autoPlay");
        node.auto_play_interval_ms = opt_u64(obj, "autoPlayIntervalMs");

        if let Some(items) = obj.get("items").and_then(Value::as_array) {
            node.items = items.clone();
        }

        if let Some(children) = obj.get("children").and_then(Value::as_array) {
            for child in children {
                node.children.push(recurse(child, depth + 1)?);
            }
        }

        // A non-object template reads as absent, like any other
        // wrong-typed optional field.
        if let Some(template) = obj.get("itemTemplate").filter(|value| value.is_object()) {
            node.item_template = Some(Box::new(recurse(template, depth + 1)?));
        }

        Ok(Descriptor::Layout(node))
    }
}

/// Strategy for atomic kinds: leaf components
pub struct AtomicParseStrategy;

impl ParseStrategy for AtomicParseStrategy {
    fn can_handle(&self, kind: ComponentKind) -> bool {
        kind.is_atomic()
    }

    fn parse(
        &self,
        obj: &Map<String, Value>,
        kind: ComponentKind,
        _depth: usize,
        _recurse: &RecurseFn<'_>,
    ) -> Result<Descriptor> {
        let mut node = AtomicDescriptor::new(require_id(obj, kind)?, kind);
        node.style = extract_style(obj);
        node.text = opt_string(obj, "text");
        node.placeholder = opt_string(obj, "placeholder");
        node.value = obj.get("value").filter(|value| !value.is_null()).cloned();
        node.url = opt_string(obj, "url");
        node.content_fit = opt_string(obj, "contentFit");
        node.emphasis = opt_string(obj, "emphasis");
        node.input_variant = opt_string(obj, "inputVariant");
        node.options = opt_string_vec(obj, "options");
        node.min_value = opt_f64(obj, "minValue");
        node.max_value = opt_f64(obj, "maxValue");
        node.step = opt_f64(obj, "step");
        node.icon = opt_string(obj, "icon");
        node.icon_size = opt_u32(obj, "iconSize");
        node.font_size = opt_u32(obj, "fontSize");
        node.max_lines = opt_u32(obj, "maxLines");
        node.action_id = opt_string(obj, "actionId");
        node.validation = extract_constraints(obj);

        Ok(Descriptor::Atomic(node))
    }
}

fn require_id(obj: &Map<String, Value>, kind: ComponentKind) -> Result<String> {
    obj.get("id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ParseError::missing_property_in("id", kind.tag()))
}

fn opt_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn opt_bool(obj: &Map<String, Value>, key: &str) -> Option<bool> {
    obj.get(key).and_then(Value::as_bool)
}

fn opt_f64(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

#[allow(clippy::cast_possible_truncation)]
fn opt_f32(obj: &Map<String, Value>, key: &str) -> Option<f32> {
    opt_f64(obj, key).map(|value| value as f32)
}

fn opt_u64(obj: &Map<String, Value>, key: &str) -> Option<u64> {
    obj.get(key).and_then(Value::as_u64)
}

fn opt_u32(obj: &Map<String, Value>, key: &str) -> Option<u32> {
    opt_u64(obj, key).and_then(|value| u32::try_from(value).ok())
}

/// Extract a string array; non-string elements are skipped
fn opt_string_vec(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    obj.get(key).and_then(Value::as_array).map(|values| {
        values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect()
    })
}

fn extract_style(obj: &Map<String, Value>) -> Option<StyleProperties> {
    let style = obj.get("style")?.as_object()?;
    Some(StyleProperties {
        padding: opt_f32(style, "padding"),
        margin: opt_f32(style, "margin"),
        background_color: opt_string(style, "backgroundColor"),
        corner_radius: opt_f32(style, "cornerRadius"),
        elevation: opt_f32(style, "elevation"),
        width: opt_string(style, "width"),
        height: opt_string(style, "height"),
    })
}

fn extract_constraints(obj: &Map<String, Value>) -> Option<InputConstraints> {
    let rules = obj.get("validation")?.as_object()?;
    Some(InputConstraints {
        required: opt_bool(rules, "required"),
        min_length: opt_u32(rules, "minLength"),
        max_length: opt_u32(rules, "maxLength"),
        pattern: opt_string(rules, "pattern"),
    })
}
