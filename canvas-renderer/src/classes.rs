//! Utility-class list handling.
//!
//! Class strings are presentation only. They are merged and de-duplicated
//! here but never parsed for layout data.

use std::collections::HashSet;

/// Merge class strings, normalizing whitespace and dropping repeats.
///
/// The first occurrence of each class wins its position.
#[must_use]
pub fn merge<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for part in parts {
        for token in part.split_whitespace() {
            if seen.insert(token) {
                tokens.push(token);
            }
        }
    }
    tokens.join(" ")
}

/// Responsive grid classes for the given column counts.
#[must_use]
pub fn grid_columns(sm: u32, md: u32, lg: u32) -> String {
    format!("grid grid-cols-{sm} md:grid-cols-{md} lg:grid-cols-{lg}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge_dedupes_in_order() {
        assert_eq!(
            merge(["flex  flex-col", " gap-4 flex", "", "text-sm\tgap-4"]),
            "flex flex-col gap-4 text-sm"
        );
        assert_eq!(merge(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(
            grid_columns(1, 2, 4),
            "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4"
        );
    }

    proptest! {
        #[test]
        fn prop_merge_is_idempotent_and_unique(parts in proptest::collection::vec("[a-z: -]{0,12}", 0..6)) {
            let merged = merge(parts.iter().map(String::as_str));
            prop_assert_eq!(merge([merged.as_str()]), merged.clone());

            let tokens: Vec<&str> = merged.split(' ').filter(|t| !t.is_empty()).collect();
            let unique: HashSet<&str> = tokens.iter().copied().collect();
            prop_assert_eq!(unique.len(), tokens.len());
        }
    }
}
