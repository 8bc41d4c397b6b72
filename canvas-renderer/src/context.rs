//! Render context: the theme and platform every renderer reads, plus the
//! warnings collected during one render pass.

use canvas_core::{Platform, Theme, TypeLevel};

use crate::icons::{self, ResolvedIcon};
use crate::node::RenderNode;

/// Output of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// The rendered tree.
    pub node: RenderNode,
    /// Non-fatal problems noticed while rendering.
    pub warnings: Vec<String>,
}

/// State for one render pass.
///
/// The theme is borrowed for the whole pass, so every renderer reads the
/// same resolved tokens.
#[derive(Debug)]
pub struct RenderContext<'a> {
    theme: &'a Theme,
    platform: Platform,
    warnings: Vec<String>,
}

impl<'a> RenderContext<'a> {
    /// Start a render pass.
    #[must_use]
    pub fn new(theme: &'a Theme, platform: Platform) -> Self {
        Self {
            theme,
            platform,
            warnings: Vec::new(),
        }
    }

    /// The theme.
    #[must_use]
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// The target platform.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Warnings so far.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Record a visible-but-recoverable problem.
    pub fn warn(&mut self, message: String) {
        tracing::warn!("{message}");
        self.warnings.push(message);
    }

    /// Finish the pass.
    #[must_use]
    pub fn finish(self, node: RenderNode) -> RenderOutput {
        RenderOutput {
            node,
            warnings: self.warnings,
        }
    }

    /// Font size for a level, as CSS.
    #[must_use]
    pub fn font_size(&self, level: TypeLevel) -> String {
        px(self.theme.font_size(level))
    }

    /// Body size plus `extra` pixels, as CSS.
    #[must_use]
    pub fn body_plus(&self, extra: f64) -> String {
        px(self.theme.typography.body + extra)
    }

    /// Corner radius, as CSS.
    #[must_use]
    pub fn radius(&self) -> String {
        px(self.theme.radius)
    }

    /// Resolve an icon, warning on fallback.
    pub fn icon(&mut self, name: &str) -> ResolvedIcon {
        let icon = icons::resolve(name);
        if icon.is_fallback {
            self.warn(format!(
                "Unknown icon '{name}', using '{}'",
                icons::FALLBACK_ICON
            ));
        }
        icon
    }
}

/// Format a pixel length.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
