//! Icon registry.
//!
//! Names are matched after normalization (case and separators ignored),
//! so `ShoppingCart`, `shopping-cart` and `shopping_cart` resolve alike.
//! Unknown names resolve to the [`FALLBACK_ICON`] glyph.

/// Icon used when a name does not resolve.
pub const FALLBACK_ICON: &str = "circle";

/// Registered icons, sorted by normalized name.
const ICONS: &[(&str, &str)] = &[
    ("alertcircle", "⚠"),
    ("arrowleft", "←"),
    ("arrowright", "→"),
    ("bell", "🔔"),
    ("bookmark", "🔖"),
    ("calendar", "📅"),
    ("camera", "📷"),
    ("chart", "📊"),
    ("check", "✓"),
    ("chevrondown", "⌄"),
    ("chevronright", "›"),
    ("circle", "○"),
    ("clock", "🕒"),
    ("cog", "⚙"),
    ("download", "⤓"),
    ("edit", "✎"),
    ("explore", "🧭"),
    ("file", "📄"),
    ("filter", "⏷"),
    ("folder", "📁"),
    ("heart", "♥"),
    ("help", "?"),
    ("home", "⌂"),
    ("image", "🖼"),
    ("inbox", "📥"),
    ("info", "ℹ"),
    ("list", "☰"),
    ("lock", "🔒"),
    ("logout", "⎋"),
    ("mail", "✉"),
    ("map", "🗺"),
    ("menu", "☰"),
    ("message", "💬"),
    ("minus", "−"),
    ("phone", "☎"),
    ("plus", "+"),
    ("profile", "👤"),
    ("search", "⌕"),
    ("send", "➤"),
    ("settings", "⚙"),
    ("share", "⇪"),
    ("shoppingbag", "👜"),
    ("shoppingcart", "🛒"),
    ("star", "★"),
    ("trash", "🗑"),
    ("upload", "⤒"),
    ("user", "👤"),
    ("users", "👥"),
    ("x", "✕"),
];

/// Normalize an icon name for lookup.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Glyph for a registered icon name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static str> {
    let key = normalize_name(name);
    ICONS
        .binary_search_by(|(entry, _)| (*entry).cmp(key.as_str()))
        .ok()
        .map(|index| ICONS[index].1)
}

/// A resolved icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedIcon {
    /// Registry name that matched, or [`FALLBACK_ICON`].
    pub name: &'static str,
    /// Glyph to display.
    pub glyph: &'static str,
    /// Whether the fallback was used.
    pub is_fallback: bool,
}

/// Resolve a name, falling back to the default icon.
#[must_use]
pub fn resolve(name: &str) -> ResolvedIcon {
    let key = normalize_name(name);
    if let Ok(index) = ICONS.binary_search_by(|(entry, _)| (*entry).cmp(key.as_str())) {
        let (name, glyph) = ICONS[index];
        return ResolvedIcon {
            name,
            glyph,
            is_fallback: false,
        };
    }
    ResolvedIcon {
        name: FALLBACK_ICON,
        glyph: lookup(FALLBACK_ICON).unwrap_or("○"),
        is_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted() {
        for pair in ICONS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_lookup_ignores_case_and_separators() {
        assert_eq!(lookup("ShoppingCart"), Some("🛒"));
        assert_eq!(lookup("shopping-cart"), Some("🛒"));
        assert_eq!(lookup("shopping_cart"), Some("🛒"));
        assert_eq!(lookup("Home"), Some("⌂"));
        assert_eq!(lookup("nope"), None);
    }

    #[test]
    fn test_resolve_falls_back() {
        let icon = resolve("Dragon");
        assert!(icon.is_fallback);
        assert_eq!(icon.name, FALLBACK_ICON);
        assert_eq!(icon.glyph, "○");

        let home = resolve("home");
        assert!(!home.is_fallback);
        assert_eq!(home.name, "home");
    }
}
