use super::{CatalogOverrides, Entry};
use crate::domain::model::CatalogVersion;
use crate::domain::model::ConformanceLevel::{A, AA, AAA};

/// Criteria removed in WCAG 2.2.
pub(super) const DEPRECATED: &[&str] = &["4.1.1"];

// TODO: interleave these with the inherited 2.1 criteria instead of appending them.
const ADDITIONS: &[Entry] = &[
    Entry::new(
        "2.4.11",
        AA,
        "Focus Not Obscured (Minimum)",
        "Focus niet bedekt (minimum)",
        "https://www.w3.org/TR/WCAG22/#focus-not-obscured-minimum",
    ),
    Entry::new(
        "2.4.12",
        AAA,
        "Focus Not Obscured (Enhanced)",
        "Focus niet bedekt (uitgebreid)",
        "https://www.w3.org/TR/WCAG22/#focus-not-obscured-enhanced",
    ),
    Entry::new(
        "2.4.13",
        AAA,
        "Focus Appearance",
        "Focusweergave",
        "https://www.w3.org/TR/WCAG22/#focus-appearance",
    ),
    Entry::new(
        "2.5.7",
        AA,
        "Dragging Movements",
        "Sleepbewegingen",
        "https://www.w3.org/TR/WCAG22/#dragging-movements",
    ),
    Entry::new(
        "2.5.8",
        AA,
        "Target Size (minimum)",
        "Grootte van het aanwijsgebied (minimum)",
        "https://www.w3.org/TR/WCAG22/#target-size-minimum",
    ),
    Entry::new(
        "3.2.6",
        A,
        "Consistent Help",
        "Consistente hulp",
        "https://www.w3.org/TR/WCAG22/#consistent-help",
    ),
    Entry::new(
        "3.3.7",
        A,
        "Redundant Entry",
        "Overbodige invoer",
        "https://www.w3.org/TR/WCAG22/#redundant-entry",
    ),
    Entry::new(
        "3.3.8",
        AA,
        "Accessible Authentication (Minimum)",
        "Toegankelijke authenticatie (minimum)",
        "https://www.w3.org/TR/WCAG22/#accessible-authentication-minimum",
    ),
    Entry::new(
        "3.3.9",
        AAA,
        "Accessible Authentication (Enhanced)",
        "Toegankelijke authenticatie (uitgebreid)",
        "https://www.w3.org/TR/WCAG22/#accessible-authentication-enhanced",
    ),
];

pub(super) fn overrides() -> CatalogOverrides {
    CatalogOverrides {
        url_rewrite: Some(("WCAG21".to_string(), "WCAG22".to_string())),
        additions: ADDITIONS
            .iter()
            .map(|e| e.descriptor(Some(CatalogVersion::Wcag22)))
            .collect(),
    }
}
