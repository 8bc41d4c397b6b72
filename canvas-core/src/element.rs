//! Element trees - the recursive building blocks of legacy pages and layouts.
//!
//! An [`Element`] owns its children outright; the tree has no back
//! references. The `type` tag is an open, case-insensitive string that
//! [`ElementType::parse`] classifies into the known layout and content
//! kinds, keeping anything else as [`ElementType::Unknown`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient::{self, scalar_to_string};

/// Placeholder image used when an image element carries no source.
pub const PLACEHOLDER_IMAGE_SRC: &str = "https://placehold.co/400";

/// Content fields probed, in order, for an element's text.
pub const TEXT_FIELDS: [&str; 4] = ["text", "label", "title", "value"];

/// Pure-layout element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Horizontal flex row.
    Row,
    /// Vertical flex column.
    Column,
    /// Vertical stack (same as column).
    Stack,
    /// Column grid.
    Grid,
    /// Wrapping flex container.
    Flex,
    /// Flexible empty space.
    Spacer,
    /// Horizontal rule.
    Divider,
}

/// Content element kinds with their own visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ContentKind {
    Header,
    Text,
    Button,
    Form,
    Input,
    Textarea,
    Select,
    Link,
    Icon,
    Image,
    Avatar,
    Badge,
    Card,
    Nav,
    Footer,
    List,
    Table,
    Tabs,
    Alert,
    EmptyState,
    Skeleton,
    Progress,
    Section,
    Container,
}

impl LayoutKind {
    /// Lowercase tag name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::Stack => "stack",
            Self::Grid => "grid",
            Self::Flex => "flex",
            Self::Spacer => "spacer",
            Self::Divider => "divider",
        }
    }
}

impl ContentKind {
    /// Lowercase tag name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Text => "text",
            Self::Button => "button",
            Self::Form => "form",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Link => "link",
            Self::Icon => "icon",
            Self::Image => "image",
            Self::Avatar => "avatar",
            Self::Badge => "badge",
            Self::Card => "card",
            Self::Nav => "nav",
            Self::Footer => "footer",
            Self::List => "list",
            Self::Table => "table",
            Self::Tabs => "tabs",
            Self::Alert => "alert",
            Self::EmptyState => "emptystate",
            Self::Skeleton => "skeleton",
            Self::Progress => "progress",
            Self::Section => "section",
            Self::Container => "container",
        }
    }
}

/// Classified element type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Structure-only layout node.
    Layout(LayoutKind),
    /// Known content node.
    Content(ContentKind),
    /// Unrecognized tag, lowercased.
    Unknown(String),
}

impl ElementType {
    /// Classify a raw type tag. Matching is case-insensitive.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase();
        let layout = match normalized.as_str() {
            "row" => Some(LayoutKind::Row),
            "column" => Some(LayoutKind::Column),
            "stack" => Some(LayoutKind::Stack),
            "grid" => Some(LayoutKind::Grid),
            "flex" => Some(LayoutKind::Flex),
            "spacer" => Some(LayoutKind::Spacer),
            "divider" => Some(LayoutKind::Divider),
            _ => None,
        };
        if let Some(kind) = layout {
            return Self::Layout(kind);
        }

        let content = match normalized.as_str() {
            "header" => ContentKind::Header,
            "text" => ContentKind::Text,
            "button" => ContentKind::Button,
            "form" => ContentKind::Form,
            "input" => ContentKind::Input,
            "textarea" => ContentKind::Textarea,
            "select" => ContentKind::Select,
            "link" => ContentKind::Link,
            "icon" => ContentKind::Icon,
            "image" => ContentKind::Image,
            "avatar" => ContentKind::Avatar,
            "badge" => ContentKind::Badge,
            "card" => ContentKind::Card,
            "nav" => ContentKind::Nav,
            "footer" => ContentKind::Footer,
            "list" => ContentKind::List,
            "table" => ContentKind::Table,
            "tabs" => ContentKind::Tabs,
            "alert" => ContentKind::Alert,
            "emptystate" => ContentKind::EmptyState,
            "skeleton" => ContentKind::Skeleton,
            "progress" => ContentKind::Progress,
            "section" => ContentKind::Section,
            "container" => ContentKind::Container,
            _ => return Self::Unknown(normalized),
        };
        Self::Content(content)
    }
}

/// Structural style hints carried by an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementStyles {
    /// Padding as a CSS length.
    #[serde(default, deserialize_with = "lenient::opt_css_length")]
    pub padding: Option<String>,
    /// Margin as a CSS length.
    #[serde(default, deserialize_with = "lenient::opt_css_length")]
    pub margin: Option<String>,
    /// Gap between children as a CSS length.
    #[serde(default, deserialize_with = "lenient::opt_css_length")]
    pub gap: Option<String>,
    /// Border shorthand.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub border: Option<String>,
    /// Corner radius as a CSS length.
    #[serde(
        default,
        alias = "borderRadius",
        alias = "border_radius",
        deserialize_with = "lenient::opt_css_length"
    )]
    pub radius: Option<String>,
    /// Background color or image.
    #[serde(
        default,
        alias = "backgroundColor",
        alias = "bg",
        deserialize_with = "lenient::opt_string"
    )]
    pub background: Option<String>,
    /// Text color.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub color: Option<String>,
    /// Column count for grid layouts.
    #[serde(default, alias = "cols", deserialize_with = "lenient::opt_count")]
    pub columns: Option<u32>,
    /// Free-form utility-class string. Presentation only.
    #[serde(default, alias = "class", deserialize_with = "lenient::opt_string")]
    pub tw: Option<String>,
}

/// HTML-ish attributes carried by an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementAttributes {
    /// Element id; icon elements may also carry their icon name here.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    /// Explicit class name.
    #[serde(
        default,
        rename = "className",
        alias = "class",
        alias = "class_name",
        deserialize_with = "lenient::opt_string"
    )]
    pub class_name: Option<String>,
    /// Link target.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub href: Option<String>,
    /// Media source.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub src: Option<String>,
    /// Media alternative text.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub alt: Option<String>,
    /// Input or button type.
    #[serde(default, rename = "type", deserialize_with = "lenient::opt_string")]
    pub input_type: Option<String>,
    /// Input placeholder.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub placeholder: Option<String>,
    /// Accessibility label.
    #[serde(
        default,
        rename = "aria-label",
        alias = "ariaLabel",
        alias = "aria_label",
        deserialize_with = "lenient::opt_string"
    )]
    pub aria_label: Option<String>,
}

/// Resolved media reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    /// Source URL.
    pub src: String,
    /// Alternative text.
    pub alt: String,
}

/// A node of an element tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Raw type tag.
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub type_tag: String,
    /// Text or media content: a string or an object of content fields.
    #[serde(default)]
    pub content: Value,
    /// Style hints.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub styles: ElementStyles,
    /// Attributes.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub attributes: ElementAttributes,
    /// Owned children, in render order.
    #[serde(default, alias = "children", deserialize_with = "lenient::seq")]
    pub elements: Vec<Element>,
}

impl Element {
    /// Create an element with the given type tag.
    #[must_use]
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            ..Self::default()
        }
    }

    /// Set the content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<Value>) -> Self {
        self.content = content.into();
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.elements.push(child);
        self
    }

    /// Classify this element's type tag.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        ElementType::parse(&self.type_tag)
    }

    /// Look up a field of object content.
    #[must_use]
    pub fn content_field(&self, key: &str) -> Option<&Value> {
        self.content.as_object().and_then(|map| map.get(key))
    }

    /// Extract the element's text.
    ///
    /// Scalar content wins; object content is probed through [`TEXT_FIELDS`].
    #[must_use]
    pub fn text(&self) -> Option<String> {
        if let Some(text) = scalar_to_string(&self.content) {
            return Some(text).filter(|t| !t.is_empty());
        }
        TEXT_FIELDS
            .iter()
            .filter_map(|key| self.content_field(key))
            .filter_map(scalar_to_string)
            .find(|text| !text.is_empty())
    }

    /// Resolve the element's media, falling back to a placeholder image.
    #[must_use]
    pub fn media(&self) -> Media {
        let media = self.content_field("media");
        let media_field = |key: &str| {
            media
                .and_then(|m| m.get(key))
                .and_then(scalar_to_string)
                .filter(|s| !s.is_empty())
        };

        let src = self
            .attributes
            .src
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| media_field("src"))
            .or_else(|| {
                self.content_field("src")
                    .and_then(scalar_to_string)
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_SRC.to_string());

        let alt = self
            .attributes
            .alt
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| media_field("alt"))
            .unwrap_or_else(|| "Image".to_string());

        Media { src, alt }
    }

    /// Collect list-like content: an array, or an `items` array, of strings
    /// or objects with a text field.
    #[must_use]
    pub fn content_items(&self) -> Vec<String> {
        let items = match &self.content {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("items") {
                Some(Value::Array(items)) => items,
                _ => return Vec::new(),
            },
            _ => return Vec::new(),
        };

        items
            .iter()
            .filter_map(|item| match item {
                Value::Object(map) => TEXT_FIELDS
                    .iter()
                    .filter_map(|key| map.get(*key))
                    .find_map(scalar_to_string),
                other => scalar_to_string(other),
            })
            .collect()
    }

    /// Count of nodes in this subtree, including this one.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.elements.iter().map(Element::node_count).sum::<usize>()
    }
}
