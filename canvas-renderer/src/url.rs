//! URL filtering for links and media taken from generated documents.
//!
//! Rendered markup is mounted with `innerHTML`, so only relative URLs and
//! a short list of schemes make it into `href` and `src`.

use canvas_core::element::PLACEHOLDER_IMAGE_SRC;

/// Schemes allowed in rendered URLs.
pub const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Fallback for rejected link targets.
pub const FALLBACK_HREF: &str = "#";

/// Whether `url` is relative or uses an allowed scheme.
#[must_use]
pub fn is_safe(url: &str) -> bool {
    // Browsers drop whitespace and control characters while reading a scheme.
    let compact: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let scheme_end = compact.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(index) if compact[index..].starts_with(':') => {
            let scheme = compact[..index].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

/// A link target, or `#` if the URL is rejected.
#[must_use]
pub fn sanitize_href(url: &str) -> String {
    sanitize(url, FALLBACK_HREF)
}

/// An image source, or the placeholder image if the URL is rejected.
#[must_use]
pub fn sanitize_src(url: &str) -> String {
    sanitize(url, PLACEHOLDER_IMAGE_SRC)
}

fn sanitize(url: &str, fallback: &str) -> String {
    if is_safe(url) {
        url.to_string()
    } else {
        tracing::debug!("Rejected URL '{url}', using '{fallback}'");
        fallback.to_string()
    }
}
