//! The generated UI document: metadata, raw theme, and pages.
//!
//! Loading is deliberately forgiving. Generated documents arrive with
//! missing fields, stringly-typed numbers and stray list entries; every
//! field defaults instead of failing, and the only hard errors are
//! invalid JSON or a root that is not an object.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::element::Element;
use crate::error::{CanvasError, CanvasResult};
use crate::lenient::{self, scalar_to_string};
use crate::section::Section;
use crate::theme::Theme;

/// Target platform of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Desktop web.
    #[default]
    Web,
    /// Mobile device.
    Mobile,
}

impl Platform {
    /// Parse a platform tag; anything other than `mobile` is web.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("mobile") {
            Self::Mobile
        } else {
            Self::Web
        }
    }

    /// Tag string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(scalar_to_string(&value).map_or_else(Self::default, |tag| Self::parse(&tag)))
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Application title.
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// Application description.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Application category.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub app_type: Option<String>,
    /// Explicit platform tag.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub platform: Option<String>,
    /// Legacy multi-platform list; only the first entry is used.
    #[serde(default, deserialize_with = "lenient::string_seq", skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    /// Free-text viewport, e.g. `"390x844 (iPhone 14)"`.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub viewport: Option<String>,
}

impl DocumentMeta {
    /// Resolved platform: `platform`, then `platforms[0]`, then web.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
            .as_deref()
            .or_else(|| self.platforms.first().map(String::as_str))
            .filter(|tag| !tag.trim().is_empty())
            .map_or_else(Platform::default, Platform::parse)
    }
}

/// Page-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page title.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    /// Page description.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Page icon name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub icon: Option<String>,
}

/// A page of the document.
///
/// Pages carry `sections`; the legacy shape carries a flat `elements`
/// list instead, used only when no sections are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Route path.
    #[serde(default, deserialize_with = "lenient::string")]
    pub route: String,
    /// Page metadata.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meta: PageMeta,
    /// Legacy page name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    /// Legacy page purpose.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub purpose: Option<String>,
    /// Sections in order.
    #[serde(default, deserialize_with = "lenient::seq")]
    pub sections: Vec<Section>,
    /// Legacy flat element list.
    #[serde(default, deserialize_with = "lenient::seq")]
    pub elements: Vec<Element>,
}

impl Page {
    /// Create an empty page at `route`.
    #[must_use]
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            ..Self::default()
        }
    }

    /// Set the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    /// Append a section.
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a legacy element.
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Display title: `meta.title`, then the legacy `name`.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        [self.meta.title.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }

    /// Description: `meta.description`, then the legacy `purpose`.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        [self.meta.description.as_deref(), self.purpose.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }

    /// Whether the page has nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.elements.is_empty()
    }
}

/// A complete generated document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Schema version string.
    #[serde(default, deserialize_with = "lenient::string")]
    pub version: String,
    /// Document metadata.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meta: DocumentMeta,
    /// Raw theme, normalized on demand.
    #[serde(default)]
    pub theme: Value,
    /// Pages in order.
    #[serde(default, deserialize_with = "lenient::seq")]
    pub pages: Vec<Page>,
    /// Free-form application states.
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Map::is_empty")]
    pub states: Map<String, Value>,
}

impl Document {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or the root is not
    /// an object.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Build a document from a JSON value.
    ///
    /// Accepts either a bare document or a generation response wrapping
    /// it under `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidDocument`] if the root (or `spec`)
    /// is not an object.
    pub fn from_value(value: &Value) -> CanvasResult<Self> {
        let root = match value {
            Value::Object(map) => match map.get("spec") {
                Some(spec @ Value::Object(_)) => {
                    tracing::debug!("Unwrapping generation response");
                    spec
                }
                Some(other) if !other.is_null() => {
                    return Err(CanvasError::InvalidDocument(
                        "`spec` must be an object".to_string(),
                    ));
                }
                _ => value,
            },
            _ => {
                return Err(CanvasError::InvalidDocument(
                    "document root must be an object".to_string(),
                ));
            }
        };

        let document: Self = serde_json::from_value(root.clone())?;
        tracing::debug!(
            pages = document.pages.len(),
            platform = %document.platform(),
            "Loaded document"
        );
        Ok(document)
    }

    /// Serialize to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Resolved platform.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.meta.platform()
    }

    /// Normalized theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::normalize(Some(&self.theme))
    }

    /// Append a page.
    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Set the platform tag.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.meta.platform = Some(platform.as_str().to_string());
        self
    }
}
