//! Page sections - named, kind-typed regions of a page.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::lenient::{self, scalar_to_string};

/// The closed set of section kinds, plus an explicit unknown variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Navigation bar.
    Nav,
    /// Hero banner.
    Hero,
    /// Responsive grid of items.
    Grid,
    /// Single card.
    Card,
    /// Vertical list.
    List,
    /// Form with field descriptors.
    Form,
    /// Data table with column descriptors.
    Table,
    /// Page footer.
    Footer,
    /// Modal dialog.
    Modal,
    /// Any other tag, kept verbatim.
    Unknown(String),
}

impl SectionKind {
    /// Every known kind, in declaration order.
    pub const KNOWN: [SectionKind; 9] = [
        SectionKind::Nav,
        SectionKind::Hero,
        SectionKind::Grid,
        SectionKind::Card,
        SectionKind::List,
        SectionKind::Form,
        SectionKind::Table,
        SectionKind::Footer,
        SectionKind::Modal,
    ];

    /// Classify a raw kind tag. Matching is exact.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "nav" => Self::Nav,
            "hero" => Self::Hero,
            "grid" => Self::Grid,
            "card" => Self::Card,
            "list" => Self::List,
            "form" => Self::Form,
            "table" => Self::Table,
            "footer" => Self::Footer,
            "modal" => Self::Modal,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The tag string for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Nav => "nav",
            Self::Hero => "hero",
            Self::Grid => "grid",
            Self::Card => "card",
            Self::List => "list",
            Self::Form => "form",
            Self::Table => "table",
            Self::Footer => "footer",
            Self::Modal => "modal",
            Self::Unknown(tag) => tag,
        }
    }

    /// Whether this kind is outside the closed set.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl Default for SectionKind {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SectionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(scalar_to_string(&value).map_or_else(Self::default, |tag| Self::parse(&tag)))
    }
}

/// Largest column count a grid accepts at any breakpoint.
pub const MAX_GRID_COLUMNS: u32 = 12;

/// Grid column counts per breakpoint, plus gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Base column count.
    #[serde(deserialize_with = "count_or_three")]
    pub cols: u32,
    /// Gap in pixels.
    #[serde(deserialize_with = "gap_or_default")]
    pub gap: u32,
    /// Columns on small screens.
    #[serde(deserialize_with = "count_or_one")]
    pub sm_cols: u32,
    /// Columns on medium screens.
    #[serde(deserialize_with = "count_or_two")]
    pub md_cols: u32,
    /// Columns on large screens.
    #[serde(deserialize_with = "count_or_three")]
    pub lg_cols: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 3,
            gap: 24,
            sm_cols: 1,
            md_cols: 2,
            lg_cols: 3,
        }
    }
}

impl GridConfig {
    /// Every column count forced into `1..=MAX_GRID_COLUMNS`.
    #[must_use]
    pub fn bounded(self) -> Self {
        let bound = |n: u32| n.clamp(1, MAX_GRID_COLUMNS);
        Self {
            cols: bound(self.cols),
            sm_cols: bound(self.sm_cols),
            md_cols: bound(self.md_cols),
            lg_cols: bound(self.lg_cols),
            ..self
        }
    }
}

fn count_or<'de, D: Deserializer<'de>>(deserializer: D, fallback: u32) -> Result<u32, D::Error> {
    Ok(lenient::opt_count(deserializer)?.map_or(fallback, |n| n.min(MAX_GRID_COLUMNS)))
}

fn count_or_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    count_or(deserializer, 1)
}

fn count_or_two<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    count_or(deserializer, 2)
}

fn count_or_three<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    count_or(deserializer, 3)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn gap_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(lenient::opt_number(deserializer)?
        .filter(|n| *n >= 0.0)
        .map_or(24, |n| n.round().min(f64::from(u32::MAX)) as u32))
}

/// A form field descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name.
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Visible label.
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
    /// Input type (`text`, `email`, `textarea`, `select`, ...).
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub field_type: String,
    /// Placeholder text.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub placeholder: Option<String>,
    /// Whether the field is required.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub required: bool,
    /// Validation hint.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub validation: Option<String>,
    /// Helper text below the control.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub helper_text: Option<String>,
}

/// A table column descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Row key for this column.
    #[serde(default, deserialize_with = "lenient::string")]
    pub key: String,
    /// Header label.
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
    /// Data type hint.
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub column_type: String,
    /// Whether the column is sortable.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub sortable: bool,
    /// CSS width.
    #[serde(default, deserialize_with = "lenient::opt_css_length")]
    pub width: Option<String>,
}

/// Which auxiliary states the section declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SectionStates {
    /// Has an empty state.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub has_empty: bool,
    /// Has a loading state.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub has_loading: bool,
    /// Has an error state.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub has_error: bool,
}

/// A page section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier.
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    /// Section kind.
    #[serde(default)]
    pub kind: SectionKind,
    /// Optional title.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    /// Optional description.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Free-form content map.
    #[serde(default, deserialize_with = "lenient::object")]
    pub content: Map<String, Value>,
    /// Grid configuration, for grid sections.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub grid: Option<GridConfig>,
    /// Form fields, for form sections.
    #[serde(default, deserialize_with = "lenient::seq")]
    pub fields: Vec<FormField>,
    /// Table columns, for table sections.
    #[serde(default, deserialize_with = "lenient::seq")]
    pub columns: Vec<TableColumn>,
    /// Declared auxiliary states.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub states: Option<SectionStates>,
}

impl Section {
    /// Create a section of the given kind.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a content entry.
    #[must_use]
    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.content.insert(key.into(), value.into());
        self
    }

    /// Content string at `key`, if present and non-empty.
    #[must_use]
    pub fn content_str(&self, key: &str) -> Option<String> {
        self.content
            .get(key)
            .and_then(scalar_to_string)
            .filter(|s| !s.is_empty())
    }

    /// First non-empty content string among `keys`.
    #[must_use]
    pub fn content_str_any(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.content_str(key))
    }

    /// Content list at `key`; non-arrays yield an empty slice.
    #[must_use]
    pub fn content_list(&self, key: &str) -> &[Value] {
        match self.content.get(key) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    /// Grid configuration, defaulted and bounded.
    #[must_use]
    pub fn grid_config(&self) -> GridConfig {
        self.grid.unwrap_or_default().bounded()
    }
}
