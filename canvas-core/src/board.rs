//! Page board layout: one canvas rectangle per page, tiled two per row.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::{Document, Page, Platform};
use crate::element::Element;
use crate::section::Section;

/// Boards per row on the workspace.
pub const BOARD_COLUMNS: usize = 2;

/// Nominal device size a design was authored for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extract `WIDTHxHEIGHT` from free text.
    ///
    /// Takes the first pair of 2-4 digit groups separated by `x`, `X` or
    /// `×`. Zero-sized matches are rejected.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let captures = viewport_pattern().captures(text)?;
        let width: f64 = captures.get(1)?.as_str().parse().ok()?;
        let height: f64 = captures.get(2)?.as_str().parse().ok()?;
        (width > 0.0 && height > 0.0).then_some(Self { width, height })
    }
}

fn viewport_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:^|\D)(\d{2,4})\s*[xX×]\s*(\d{2,4})(?:\D|$)")
            .unwrap_or_else(|e| unreachable!("viewport pattern is valid: {e}"))
    })
}

/// Board sizing and spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayoutConfig {
    /// Board width for web documents.
    pub web_canvas_width: f64,
    /// Board width for mobile documents.
    pub mobile_canvas_width: f64,
    /// Minimum board height.
    pub min_board_height: f64,
    /// Horizontal space between boards.
    pub horizontal_gutter: f64,
    /// Vertical space between boards.
    pub vertical_gutter: f64,
    /// Viewport assumed for web documents that give none.
    pub web_viewport: Viewport,
    /// Viewport assumed for mobile documents that give none.
    pub mobile_viewport: Viewport,
}

impl Default for BoardLayoutConfig {
    fn default() -> Self {
        Self {
            web_canvas_width: 1200.0,
            mobile_canvas_width: 375.0,
            min_board_height: 800.0,
            horizontal_gutter: 120.0,
            vertical_gutter: 160.0,
            web_viewport: Viewport::new(1440.0, 1024.0),
            mobile_viewport: Viewport::new(390.0, 844.0),
        }
    }
}

impl BoardLayoutConfig {
    /// Board width for a platform.
    #[must_use]
    pub fn canvas_width(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Web => self.web_canvas_width,
            Platform::Mobile => self.mobile_canvas_width,
        }
    }

    /// Default viewport for a platform.
    #[must_use]
    pub fn default_viewport(&self, platform: Platform) -> Viewport {
        match platform {
            Platform::Web => self.web_viewport,
            Platform::Mobile => self.mobile_viewport,
        }
    }

    /// Resolve the viewport from optional free text.
    #[must_use]
    pub fn resolve_viewport(&self, text: Option<&str>, platform: Platform) -> Viewport {
        match text.map(|t| (t, Viewport::parse(t))) {
            Some((_, Some(viewport))) => viewport,
            Some((raw, None)) => {
                tracing::debug!("Unparseable viewport {raw:?}, using {platform} default");
                self.default_viewport(platform)
            }
            None => self.default_viewport(platform),
        }
    }

    /// Board size preserving the viewport aspect ratio, floored at the
    /// minimum height.
    #[must_use]
    pub fn board_size(&self, platform: Platform, viewport: Viewport) -> (f64, f64) {
        let width = self.canvas_width(platform);
        let height = (width * viewport.height / viewport.width).round();
        (width, height.max(self.min_board_height))
    }

    /// Origin of the board at `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn board_origin(&self, index: usize, width: f64, height: f64) -> (f64, f64) {
        let column = (index % BOARD_COLUMNS) as f64;
        let row = (index / BOARD_COLUMNS) as f64;
        (
            column * (width + self.horizontal_gutter),
            row * (height + self.vertical_gutter),
        )
    }
}

/// What a board renders inside its rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum PageBody {
    /// Section-based page.
    Sections(Vec<Section>),
    /// Legacy flat element list.
    Elements(Vec<Element>),
    /// Nothing to render.
    Empty,
}

impl PageBody {
    /// Sections win; elements are the fallback.
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        if !page.sections.is_empty() {
            Self::Sections(page.sections.clone())
        } else if !page.elements.is_empty() {
            Self::Elements(page.elements.clone())
        } else {
            Self::Empty
        }
    }
}

/// A page positioned on the workspace canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspacePage {
    /// Board identifier, `page-<index>`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Route of the source page.
    pub route: String,
    /// Platform.
    pub platform: Platform,
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Width in canvas pixels.
    pub w: f64,
    /// Height in canvas pixels.
    pub h: f64,
    /// Content.
    pub body: PageBody,
}

/// Lay out every page as a board.
#[must_use]
pub fn layout_pages(
    pages: &[Page],
    platform: Platform,
    viewport: Viewport,
    config: &BoardLayoutConfig,
) -> Vec<WorkspacePage> {
    let (w, h) = config.board_size(platform, viewport);
    pages
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let (x, y) = config.board_origin(index, w, h);
            tracing::trace!(index, x, y, w, h, "Placed board");
            WorkspacePage {
                id: format!("page-{index}"),
                name: page
                    .title()
                    .map_or_else(|| format!("Page {}", index + 1), str::to_string),
                description: page.description().unwrap_or_default().to_string(),
                route: page.route.clone(),
                platform,
                x,
                y,
                w,
                h,
                body: PageBody::from_page(page),
            }
        })
        .collect()
}

/// Lay out a whole document, resolving its platform and viewport.
#[must_use]
pub fn layout_document(document: &Document, config: &BoardLayoutConfig) -> Vec<WorkspacePage> {
    let platform = document.platform();
    let viewport = config.resolve_viewport(document.meta.viewport.as_deref(), platform);
    layout_pages(&document.pages, platform, viewport, config)
}
