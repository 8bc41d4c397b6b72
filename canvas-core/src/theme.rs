//! Theme model and normalization.
//!
//! Generated themes are frequently partial or wrongly typed. [`Theme::normalize`]
//! turns any input into a complete theme: every field is coerced on its own and
//! falls back to its default when coercion fails, so a bad field never takes
//! its neighbours down with it.
//!
//! Normalization is total and idempotent: normalizing the serialized form of a
//! normalized theme yields the same theme.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient::coerce_number;

/// Default palette/type-scale/spacing-scale identifier.
pub const DEFAULT_SCALE_NAME: &str = "default";

/// The seven named theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Primary brand color.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
    /// Accent color.
    pub accent: String,
    /// Page background.
    pub background: String,
    /// Default text color.
    pub foreground: String,
    /// Muted text and placeholder fill.
    pub muted: String,
    /// Border color.
    pub border: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#1d4ed8".to_string(),
            secondary: "#2563eb".to_string(),
            accent: "#60a5fa".to_string(),
            background: "#ffffff".to_string(),
            foreground: "#111827".to_string(),
            muted: "#e5e7eb".to_string(),
            border: "#d1d5db".to_string(),
        }
    }
}

/// Typographic scale in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Base font size.
    pub base_size: f64,
    /// Ratio between successive heading levels.
    pub scale_ratio: f64,
    /// Level 1 heading size.
    pub h1: f64,
    /// Level 2 heading size.
    pub h2: f64,
    /// Level 3 heading size.
    pub h3: f64,
    /// Body text size.
    pub body: f64,
    /// Small text size.
    pub small: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            base_size: 16.0,
            scale_ratio: 1.25,
            h1: 48.0,
            h2: 36.0,
            h3: 28.0,
            body: 16.0,
            small: 14.0,
        }
    }
}

/// Named typography levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeLevel {
    /// Level 1 heading.
    H1,
    /// Level 2 heading.
    H2,
    /// Level 3 heading.
    H3,
    /// Body text.
    Body,
    /// Small text.
    Small,
}

/// Spacing scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Ordered, non-empty list of non-negative spacing steps.
    pub scale: Vec<f64>,
    /// Base spacing unit.
    pub unit: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            scale: vec![4.0, 8.0, 16.0, 24.0, 32.0, 48.0],
            unit: 4.0,
        }
    }
}

/// A fully resolved theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Palette identifier.
    pub palette_name: String,
    /// Type scale identifier.
    pub type_scale_name: String,
    /// Spacing scale identifier.
    pub spacing_scale_name: String,
    /// Named colors.
    pub colors: ThemeColors,
    /// Typography sizes.
    pub typography: Typography,
    /// Spacing scale.
    pub spacing: Spacing,
    /// Corner radius in pixels.
    pub radius: f64,
    /// Shadow intensity.
    pub shadows: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette_name: DEFAULT_SCALE_NAME.to_string(),
            type_scale_name: DEFAULT_SCALE_NAME.to_string(),
            spacing_scale_name: DEFAULT_SCALE_NAME.to_string(),
            colors: ThemeColors::default(),
            typography: Typography::default(),
            spacing: Spacing::default(),
            radius: 8.0,
            shadows: 1.0,
        }
    }
}

impl Theme {
    /// Coerce an arbitrary, possibly missing theme value into a complete theme.
    ///
    /// Never fails. Non-object input yields [`Theme::default`].
    #[must_use]
    pub fn normalize(raw: Option<&Value>) -> Self {
        let Some(Value::Object(source)) = raw else {
            if raw.is_some_and(|v| !v.is_null()) {
                tracing::debug!("Theme is not an object, using defaults");
            }
            return Self::default();
        };

        let defaults = Self::default();
        let empty = Map::new();

        Self {
            palette_name: identifier(source, "palette_name", &defaults.palette_name),
            type_scale_name: identifier(source, "type_scale_name", &defaults.type_scale_name),
            spacing_scale_name: identifier(
                source,
                "spacing_scale_name",
                &defaults.spacing_scale_name,
            ),
            colors: normalize_colors(section(source, "colors").unwrap_or(&empty)),
            typography: normalize_typography(section(source, "typography").unwrap_or(&empty)),
            spacing: normalize_spacing(section(source, "spacing").unwrap_or(&empty)),
            radius: number(source, "radius", defaults.radius),
            shadows: number(source, "shadows", defaults.shadows),
        }
    }

    /// Font size in pixels for a typography level.
    #[must_use]
    pub fn font_size(&self, level: TypeLevel) -> f64 {
        let t = &self.typography;
        match level {
            TypeLevel::H1 => t.h1,
            TypeLevel::H2 => t.h2,
            TypeLevel::H3 => t.h3,
            TypeLevel::Body => t.body,
            TypeLevel::Small => t.small,
        }
    }

    /// Spacing step at `index`, falling back to the first step.
    #[must_use]
    pub fn spacing_at(&self, index: usize) -> f64 {
        self.spacing
            .scale
            .get(index)
            .or_else(|| self.spacing.scale.first())
            .copied()
            .unwrap_or(0.0)
    }

    /// Theme colors as CSS custom properties.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        let c = &self.colors;
        vec![
            ("--color-primary", c.primary.clone()),
            ("--color-secondary", c.secondary.clone()),
            ("--color-accent", c.accent.clone()),
            ("--color-background", c.background.clone()),
            ("--color-foreground", c.foreground.clone()),
            ("--color-muted", c.muted.clone()),
            ("--color-border", c.border.clone()),
        ]
    }
}

fn section<'a>(source: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    match source.get(key) {
        Some(Value::Object(map)) => Some(map),
        Some(other) if !other.is_null() => {
            tracing::debug!("Theme field '{key}' is not an object, using defaults");
            None
        }
        _ => None,
    }
}

fn identifier(source: &Map<String, Value>, key: &str, default: &str) -> String {
    match source.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

fn color(source: &Map<String, Value>, key: &str, default: &str) -> String {
    match source.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(other) => {
            tracing::debug!("Theme color '{key}' is unusable ({other}), using {default}");
            default.to_string()
        }
        None => default.to_string(),
    }
}

fn number(source: &Map<String, Value>, key: &str, default: f64) -> f64 {
    match source.get(key) {
        Some(value) => coerce_number(value).unwrap_or_else(|| {
            tracing::debug!("Theme value '{key}' is unusable ({value}), using {default}");
            default
        }),
        None => default,
    }
}

fn normalize_colors(source: &Map<String, Value>) -> ThemeColors {
    let d = ThemeColors::default();
    ThemeColors {
        primary: color(source, "primary", &d.primary),
        secondary: color(source, "secondary", &d.secondary),
        accent: color(source, "accent", &d.accent),
        background: color(source, "background", &d.background),
        foreground: color(source, "foreground", &d.foreground),
        muted: color(source, "muted", &d.muted),
        border: color(source, "border", &d.border),
    }
}

fn normalize_typography(source: &Map<String, Value>) -> Typography {
    let d = Typography::default();
    Typography {
        base_size: number(source, "base_size", d.base_size),
        scale_ratio: number(source, "scale_ratio", d.scale_ratio),
        h1: number(source, "h1", d.h1),
        h2: number(source, "h2", d.h2),
        h3: number(source, "h3", d.h3),
        body: number(source, "body", d.body),
        small: number(source, "small", d.small),
    }
}

fn normalize_spacing(source: &Map<String, Value>) -> Spacing {
    let d = Spacing::default();

    let scale = match source.get("scale") {
        Some(Value::Array(items)) => {
            let steps: Vec<f64> = items
                .iter()
                .filter_map(coerce_number)
                .filter(|step| *step >= 0.0)
                .collect();
            if steps.is_empty() {
                tracing::debug!("Spacing scale has no usable steps, using defaults");
                d.scale
            } else {
                steps
            }
        }
        _ => d.scale,
    };

    Spacing {
        scale,
        unit: number(source, "unit", d.unit),
    }
}
