//! Type definitions for the descriptor tree
//!
//! The descriptor tree is the typed, immutable output of parsing a UI
//! document. Every node is either a layout node (may contain children) or
//! an atomic node (leaf); which of the two it is follows from its
//! [`ComponentKind`] and is fixed at construction.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Closed set of component kinds
///
/// The set is partitioned into layout kinds and atomic kinds. The
/// partition is a static property of the kind, not of any instance:
/// layout kinds always parse to [`LayoutDescriptor`], atomic kinds always
/// to [`AtomicDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    /// Vertical layout container
    Column,
    /// Horizontal layout container
    Row,
    /// Stacking layout container
    Box,
    /// Elevated surface container
    Card,
    /// Scrolling item list
    List,
    /// Paged item slider
    Carousel,
    /// Static text
    Text,
    /// Tappable button
    Button,
    /// Remote image
    Image,
    /// Single-line text input
    TextField,
    /// Checkbox toggle
    Checkbox,
    /// Switch toggle
    Switch,
    /// Option picker
    Select,
    /// Numeric range slider
    Slider,
    /// Vector icon
    Icon,
    /// Floating action button
    Fab,
}

impl ComponentKind {
    /// All kinds in the closed set, layout kinds first
    pub const ALL: [ComponentKind; 16] = [
        ComponentKind::Column,
        ComponentKind::Row,
        ComponentKind::Box,
        ComponentKind::Card,
        ComponentKind::List,
        ComponentKind::Carousel,
        ComponentKind::Text,
        ComponentKind::Button,
        ComponentKind::Image,
        ComponentKind::TextField,
        ComponentKind::Checkbox,
        ComponentKind::Switch,
        ComponentKind::Select,
        ComponentKind::Slider,
        ComponentKind::Icon,
        ComponentKind::Fab,
    ];

    /// Whether this kind may contain children
    #[must_use]
    pub const fn is_layout(self) -> bool {
        matches!(
            self,
            ComponentKind::Column
                | ComponentKind::Row
                | ComponentKind::Box
                | ComponentKind::Card
                | ComponentKind::List
                | ComponentKind::Carousel
        )
    }

    /// Whether this kind is a leaf
    #[must_use]
    pub const fn is_atomic(self) -> bool {
        !self.is_layout()
    }

    /// Canonical JSON type tag for this kind
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            ComponentKind::Column => "column",
            ComponentKind::Row => "row",
            ComponentKind::Box => "box",
            ComponentKind::Card => "card",
            ComponentKind::List => "list",
            ComponentKind::Carousel => "carousel",
            ComponentKind::Text => "text",
            ComponentKind::Button => "button",
            ComponentKind::Image => "image",
            ComponentKind::TextField => "textField",
            ComponentKind::Checkbox => "checkbox",
            ComponentKind::Switch => "switch",
            ComponentKind::Select => "select",
            ComponentKind::Slider => "slider",
            ComponentKind::Icon => "icon",
            ComponentKind::Fab => "fab",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Optional box/paint attributes shared by all descriptors
///
/// Color and dimension strings are passed through opaquely; a separate
/// style-resolution collaborator converts them to paint/layout units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleProperties {
    /// Inner spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Outer spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    /// Background color string, e.g. `#RRGGBB` or `#AARRGGBB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Corner rounding radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    /// Shadow elevation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f32>,
    /// Width token, e.g. `"fill"`, `"wrap"`, `"120"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Height token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl StyleProperties {
    /// Whether no attribute is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Input validation rules attached to an atomic descriptor
///
/// Opaque to the parser; the rendering layer interprets them when wiring
/// input widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputConstraints {
    /// Whether a value must be supplied before submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Minimum accepted input length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    /// Maximum accepted input length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Regex pattern the input must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// A layout node: a component that may contain children
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDescriptor {
    /// Caller-supplied identifier, non-empty but not guaranteed unique
    pub id: String,
    /// Component kind, always a layout kind
    pub kind: ComponentKind,
    /// Optional box/paint attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleProperties>,
    /// Ordered child descriptors, may be empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Descriptor>,
    /// Main-axis arrangement token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrangement: Option<String>,
    /// Cross-axis alignment token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    /// Scroll direction token for scrolling kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_direction: Option<String>,
    /// Data items stamped through `item_template` for list/carousel kinds
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Value>,
    /// Single template descriptor used as a stamp for repeated items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_template: Option<Box<Descriptor>>,
    /// Whether a carousel advances automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,
    /// Advance interval in milliseconds for auto-playing carousels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_play_interval_ms: Option<u64>,
}

impl LayoutDescriptor {
    /// Create an empty layout descriptor of the given kind
    ///
    /// `kind` must be a layout kind; the parser's strategy dispatch
    /// guarantees this by construction.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        debug_assert!(kind.is_layout(), "layout descriptor built with atomic kind");
        Self {
            id: id.into(),
            kind,
            style: None,
            children: Vec::new(),
            arrangement: None,
            alignment: None,
            scroll_direction: None,
            items: Vec::new(),
            item_template: None,
            auto_play: None,
            auto_play_interval_ms: None,
        }
    }
}

/// An atomic node: a leaf component
///
/// Which of the optional fields are meaningful depends on the kind; the
/// parser extracts every kind-appropriate field by best-effort coercion
/// and the validator enforces per-kind presence rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicDescriptor {
    /// Caller-supplied identifier, non-empty but not guaranteed unique
    pub id: String,
    /// Component kind, always an atomic kind
    pub kind: ComponentKind,
    /// Optional box/paint attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleProperties>,
    /// Display text (text, button kinds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Placeholder text (input kinds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Initial value, opaque JSON (toggle, input, slider kinds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Source URL (image kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Content-fit mode token (image kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_fit: Option<String>,
    /// Text emphasis token (text kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<String>,
    /// Input variant token (text-field kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_variant: Option<String>,
    /// Selectable options (select kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Lower bound (slider kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    /// Upper bound (slider kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Step increment (slider kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Icon reference (icon, fab kinds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon size in density-independent units, strictly positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<u32>,
    /// Font size, strictly positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    /// Line limit, strictly positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    /// Action identifier threaded through to the event sink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    /// Input validation rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<InputConstraints>,
}

impl AtomicDescriptor {
    /// Create an empty atomic descriptor of the given kind
    ///
    /// `kind` must be an atomic kind; the parser's strategy dispatch
    /// guarantees this by construction.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        debug_assert!(kind.is_atomic(), "atomic descriptor built with layout kind");
        Self {
            id: id.into(),
            kind,
            style: None,
            text: None,
            placeholder: None,
            value: None,
            url: None,
            content_fit: None,
            emphasis: None,
            input_variant: None,
            options: None,
            min_value: None,
            max_value: None,
            step: None,
            icon: None,
            icon_size: None,
            font_size: None,
            max_lines: None,
            action_id: None,
            validation: None,
        }
    }
}

/// A node of the descriptor tree
///
/// Exactly one of the two variants exists per node; the variant is fixed
/// at construction and immutable thereafter. Trees are acyclic and
/// finite, and no node is shared by reference across two parents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Descriptor {
    /// A node that may contain children
    Layout(LayoutDescriptor),
    /// A leaf node
    Atomic(AtomicDescriptor),
}

impl Descriptor {
    /// Identifier of this node
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Descriptor::Layout(layout) => &layout.id,
            Descriptor::Atomic(atomic) => &atomic.id,
        }
    }

    /// Kind of this node
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Descriptor::Layout(layout) => layout.kind,
            Descriptor::Atomic(atomic) => atomic.kind,
        }
    }

    /// Style attributes of this node, if any
    #[must_use]
    pub fn style(&self) -> Option<&StyleProperties> {
        match self {
            Descriptor::Layout(layout) => layout.style.as_ref(),
            Descriptor::Atomic(atomic) => atomic.style.as_ref(),
        }
    }

    /// Children of this node; empty for atomic nodes
    #[must_use]
    pub fn children(&self) -> &[Descriptor] {
        match self {
            Descriptor::Layout(layout) => &layout.children,
            Descriptor::Atomic(_) => &[],
        }
    }

    /// This node as a layout descriptor, if it is one
    #[must_use]
    pub fn as_layout(&self) -> Option<&LayoutDescriptor> {
        match self {
            Descriptor::Layout(layout) => Some(layout),
            Descriptor::Atomic(_) => None,
        }
    }

    /// This node as an atomic descriptor, if it is one
    #[must_use]
    pub fn as_atomic(&self) -> Option<&AtomicDescriptor> {
        match self {
            Descriptor::Layout(_) => None,
            Descriptor::Atomic(atomic) => Some(atomic),
        }
    }

    /// Whether this node may contain children
    #[must_use]
    pub fn is_layout(&self) -> bool {
        matches!(self, Descriptor::Layout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_partition_is_total_and_disjoint() {
        for kind in ComponentKind::ALL {
            assert_ne!(kind.is_layout(), kind.is_atomic(), "{kind} in both halves");
        }
    }

    #[test]
    fn tags_are_unique() {
        let mut tags: Vec<&str> = ComponentKind::ALL.iter().map(|k| k.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), ComponentKind::ALL.len());
    }

    #[test]
    fn descriptor_accessors() {
        let mut layout = LayoutDescriptor::new("root", ComponentKind::Column);
        layout
            .children
            .push(Descriptor::Atomic(AtomicDescriptor::new(
                "label",
                ComponentKind::Text,
            )));
        let node = Descriptor::Layout(layout);

        assert_eq!(node.id(), "root");
        assert_eq!(node.kind(), ComponentKind::Column);
        assert_eq!(node.children().len(), 1);
        assert!(node.as_layout().is_some());
        assert!(node.as_atomic().is_none());
        assert_eq!(node.children()[0].id(), "label");
    }

    #[test]
    fn style_is_empty_default() {
        assert!(StyleProperties::default().is_empty());
        let style = StyleProperties {
            padding: Some(8.0),
            ..Default::default()
        };
        assert!(!style.is_empty());
    }
}
