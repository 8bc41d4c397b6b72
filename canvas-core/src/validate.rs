//! Structural checks for generated documents.
//!
//! Validation never blocks rendering. It reports the shape problems that
//! would make a board render as placeholders or error boxes, so a host can
//! surface them or ask for a regeneration.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use crate::board::Viewport;
use crate::document::Document;
use crate::section::SectionKind;

/// Theme groups a generated document must provide.
const THEME_GROUPS: [&str; 2] = ["colors", "typography"];

/// A structural problem in a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// The document carries no schema version.
    #[error("document has no version")]
    MissingVersion,
    /// The theme lacks one of its required groups.
    #[error("theme is missing {missing}")]
    IncompleteTheme {
        /// Missing groups, comma-separated.
        missing: String,
    },
    /// The document has no pages.
    #[error("document has no pages")]
    NoPages,
    /// A page has no route.
    #[error("page {page} has no route")]
    MissingRoute {
        /// Page index.
        page: usize,
    },
    /// A page has neither sections nor elements.
    #[error("page {page} has no sections or elements")]
    EmptyPage {
        /// Page index.
        page: usize,
    },
    /// A section kind is outside the known set.
    #[error("page {page}: section `{section}` has unknown kind `{kind}`")]
    UnknownSectionKind {
        /// Page index.
        page: usize,
        /// Section id.
        section: String,
        /// The offending kind.
        kind: String,
    },
    /// Two sections on one page share an id.
    #[error("page {page}: duplicate section id `{section}`")]
    DuplicateSectionId {
        /// Page index.
        page: usize,
        /// Section id.
        section: String,
    },
    /// A form section declares no fields.
    #[error("page {page}: form section `{section}` has no fields")]
    FormWithoutFields {
        /// Page index.
        page: usize,
        /// Section id.
        section: String,
    },
    /// A table section declares no columns.
    #[error("page {page}: table section `{section}` has no columns")]
    TableWithoutColumns {
        /// Page index.
        page: usize,
        /// Section id.
        section: String,
    },
    /// The viewport text has no `WIDTHxHEIGHT`.
    #[error("viewport `{0}` is not WIDTHxHEIGHT")]
    UnparseableViewport(String),
}

/// Issues found in a document, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Whether no issues were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// All issues.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    fn push(&mut self, issue: ValidationIssue) {
        tracing::debug!("Validation: {issue}");
        self.issues.push(issue);
    }
}

/// Check a document's structure.
#[must_use]
pub fn validate_document(document: &Document) -> ValidationReport {
    let mut report = ValidationReport::default();

    if document.version.trim().is_empty() {
        report.push(ValidationIssue::MissingVersion);
    }

    let missing: Vec<&str> = THEME_GROUPS
        .iter()
        .copied()
        .filter(|group| !document.theme.get(group).is_some_and(Value::is_object))
        .collect();
    if !missing.is_empty() {
        report.push(ValidationIssue::IncompleteTheme {
            missing: missing.join(", "),
        });
    }

    if let Some(viewport) = document.meta.viewport.as_deref() {
        if Viewport::parse(viewport).is_none() {
            report.push(ValidationIssue::UnparseableViewport(viewport.to_string()));
        }
    }

    if document.pages.is_empty() {
        report.push(ValidationIssue::NoPages);
    }

    for (page_index, page) in document.pages.iter().enumerate() {
        if page.route.trim().is_empty() {
            report.push(ValidationIssue::MissingRoute { page: page_index });
        }
        if page.is_empty() {
            report.push(ValidationIssue::EmptyPage { page: page_index });
        }

        let mut seen = HashSet::new();
        for section in &page.sections {
            if !seen.insert(section.id.as_str()) {
                report.push(ValidationIssue::DuplicateSectionId {
                    page: page_index,
                    section: section.id.clone(),
                });
            }
            match &section.kind {
                SectionKind::Unknown(kind) => report.push(ValidationIssue::UnknownSectionKind {
                    page: page_index,
                    section: section.id.clone(),
                    kind: kind.clone(),
                }),
                SectionKind::Form if section.fields.is_empty() => {
                    report.push(ValidationIssue::FormWithoutFields {
                        page: page_index,
                        section: section.id.clone(),
                    });
                }
                SectionKind::Table if section.columns.is_empty() => {
                    report.push(ValidationIssue::TableWithoutColumns {
                        page: page_index,
                        section: section.id.clone(),
                    });
                }
                _ => {}
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        Document::from_value(&value).expect("should parse")
    }

    #[test]
    fn test_clean_document() {
        let report = validate_document(&doc(json!({
            "version": "1.0",
            "meta": { "viewport": "1440x1024" },
            "theme": { "colors": {}, "typography": {} },
            "pages": [{
                "route": "/",
                "sections": [
                    { "id": "nav", "kind": "nav" },
                    { "id": "signup", "kind": "form", "fields": [{ "name": "email" }] }
                ]
            }]
        })));
        assert!(report.is_clean(), "unexpected issues: {:?}", report.issues());
    }

    #[test]
    fn test_no_pages() {
        let report = validate_document(&doc(json!({
            "version": "1.0",
            "theme": { "colors": {}, "typography": {} },
            "pages": []
        })));
        assert_eq!(report.issues(), &[ValidationIssue::NoPages]);
    }

    #[test]
    fn test_reports_section_problems() {
        let report = validate_document(&doc(json!({
            "meta": { "viewport": "fullscreen" },
            "pages": [
                {
                    "route": "",
                    "sections": [
                        { "id": "a", "kind": "carousel" },
                        { "id": "a", "kind": "table" },
                        { "id": "f", "kind": "form" }
                    ]
                },
                { "route": "/empty" }
            ]
        })));

        let issues = report.issues();
        assert!(issues.contains(&ValidationIssue::UnparseableViewport("fullscreen".to_string())));
        assert!(issues.contains(&ValidationIssue::MissingRoute { page: 0 }));
        assert!(issues.contains(&ValidationIssue::UnknownSectionKind {
            page: 0,
            section: "a".to_string(),
            kind: "carousel".to_string(),
        }));
        assert!(issues.contains(&ValidationIssue::DuplicateSectionId {
            page: 0,
            section: "a".to_string(),
        }));
        assert!(issues.contains(&ValidationIssue::TableWithoutColumns {
            page: 0,
            section: "a".to_string(),
        }));
        assert!(issues.contains(&ValidationIssue::FormWithoutFields {
            page: 0,
            section: "f".to_string(),
        }));
        assert!(issues.contains(&ValidationIssue::EmptyPage { page: 1 }));
    }

    #[test]
    fn test_version_and_theme_groups() {
        let report = validate_document(&doc(json!({
            "theme": { "colors": { "primary": "#000" }, "typography": "large" },
            "pages": [{ "route": "/", "sections": [{ "id": "h", "kind": "hero" }] }]
        })));
        assert_eq!(
            report.issues(),
            &[
                ValidationIssue::MissingVersion,
                ValidationIssue::IncompleteTheme {
                    missing: "typography".to_string()
                },
            ]
        );

        let report = validate_document(&doc(json!({
            "version": " ",
            "pages": [{ "route": "/", "sections": [{ "id": "h", "kind": "hero" }] }]
        })));
        let issues = report.issues();
        assert!(issues.contains(&ValidationIssue::MissingVersion));
        assert!(issues.contains(&ValidationIssue::IncompleteTheme {
            missing: "colors, typography".to_string()
        }));
        assert_eq!(
            issues[1].to_string(),
            "theme is missing colors, typography"
        );
    }

    #[test]
    fn test_issue_messages() {
        let issue = ValidationIssue::UnknownSectionKind {
            page: 2,
            section: "s".to_string(),
            kind: "x".to_string(),
        };
        assert_eq!(issue.to_string(), "page 2: section `s` has unknown kind `x`");
    }
}
