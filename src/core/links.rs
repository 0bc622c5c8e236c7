//! Download links in HTML, found through a parsed DOM and CSS selectors.

use crate::utils::error::{ReportError, Result};
use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;
use std::collections::HashMap;
use url::Url;

/// Anchor marked for download that points at a CSV file.
pub const CSV_DOWNLOAD_SELECTOR: &str = "a[href$='.csv'][download]";

/// Any anchor marked for download.
pub const DOWNLOAD_SELECTOR: &str = "a[download][href]";

/// Attribute carrying the human-readable file size of a download.
pub const SIZE_ATTRIBUTE: &str = "data-size";

pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

/// Hrefs of download links without a size label, in document order, without repeats.
pub fn unlabelled_download_hrefs(html: &str) -> Vec<String> {
    let document = parse_document(html);
    let mut hrefs: Vec<String> = Vec::new();

    if let Ok(anchors) = document.select(DOWNLOAD_SELECTOR) {
        for anchor in anchors {
            let attributes = anchor.attributes.borrow();
            if attributes.contains(SIZE_ATTRIBUTE) {
                continue;
            }
            if let Some(href) = attributes.get("href") {
                if !hrefs.iter().any(|seen| seen == href) {
                    hrefs.push(href.to_string());
                }
            }
        }
    }
    hrefs
}

/// Sets `data-size` on each unlabelled download link whose href has a label.
///
/// Returns the serialized document and the number of anchors changed.
pub fn apply_size_labels(html: &str, labels: &HashMap<String, String>) -> (String, usize) {
    let document = parse_document(html);
    let mut changed = 0;

    if let Ok(anchors) = document.select(DOWNLOAD_SELECTOR) {
        for anchor in anchors {
            let mut attributes = anchor.attributes.borrow_mut();
            if attributes.contains(SIZE_ATTRIBUTE) {
                continue;
            }
            let label = attributes
                .get("href")
                .and_then(|href| labels.get(href))
                .cloned();
            if let Some(label) = label {
                attributes.insert(SIZE_ATTRIBUTE, label);
                changed += 1;
            }
        }
    }

    (document.to_string(), changed)
}

/// Resolves the first `download` link to a `.csv` file on the page.
pub fn discover_csv_link(html: &str, page_url: &Url) -> Result<Url> {
    let not_found = || ReportError::CsvLinkNotFound {
        page: page_url.to_string(),
    };

    let document = parse_document(html);
    let anchor = document
        .select_first(CSV_DOWNLOAD_SELECTOR)
        .map_err(|_| not_found())?;
    let href = anchor
        .attributes
        .borrow()
        .get("href")
        .map(str::to_string)
        .ok_or_else(not_found)?;

    let resolved = page_url.join(&href)?;
    tracing::debug!("Discovered CSV download link {}", resolved);
    Ok(resolved)
}
