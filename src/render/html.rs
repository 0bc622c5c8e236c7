//! HTML rendering of an aggregated audit export.
//!
//! Produces one self-contained document: a summary table sorted by failure
//! count and one section per success criterion listing the failing audits.

use crate::catalog::Catalog;
use crate::domain::model::{AggregationResult, AuditRow, CriterionFailures};
use crate::render::format::{format_percentage, Locale};
use serde::{Deserialize, Serialize};
use url::Url;

pub const REGISTER_URL: &str = "https://www.toegankelijkheidsverklaring.nl/register/";
pub const NL_DESIGN_SYSTEM_WCAG_URL: &str = "https://nldesignsystem.nl/wcag/";

const NOT_APPLICABLE: &str = "n.v.t.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Add ids and `aria-labelledby` so every "Details" link has a unique name.
    pub rich_accessibility_markup: bool,
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rich_accessibility_markup: true,
            title: "Toegankelijkheidsproblemen per WCAG-succescriterium".to_string(),
        }
    }
}

/// Escape text for HTML content and attribute values.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn element_id(criterion: &str, part: &str) -> String {
    format!("sc-{}-{}", criterion.replace('.', "-"), part)
}

fn is_web_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Targets ordered by failure count, highest first; ties keep target order.
pub fn summary_order(aggregation: &AggregationResult) -> Vec<&CriterionFailures> {
    let mut ordered: Vec<&CriterionFailures> = aggregation.failures.iter().collect();
    ordered.sort_by(|a, b| b.rows.len().cmp(&a.rows.len()));
    ordered
}

fn title_nl<'a>(catalog: &'a Catalog, criterion: &str) -> Option<&'a str> {
    let title = catalog.get(criterion).map(|d| d.title_nl.as_str());
    if title.is_none() {
        tracing::warn!(
            "Success criterion {} is not in the {} catalog",
            criterion,
            catalog.version()
        );
    }
    title
}

fn rate_label(aggregation: &AggregationResult, criterion: &str, locale: Locale) -> String {
    aggregation
        .failure_rate(criterion)
        .map(|rate| format_percentage(rate, locale))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn render_summary_row(
    entry: &CriterionFailures,
    aggregation: &AggregationResult,
    catalog: &Catalog,
    options: &RenderOptions,
    locale: Locale,
) -> String {
    let sc = &entry.criterion;
    let title = title_nl(catalog, sc).unwrap_or_default();
    let rate = rate_label(aggregation, sc, locale);

    if options.rich_accessibility_markup {
        let label_id = element_id(sc, "label");
        let title_id = element_id(sc, "title");
        let link_id = element_id(sc, "details");
        format!(
            r##"<tr><th id="{label_id}"><span class="nlds-toc-label">{sc}</span></th><th id="{title_id}">{title}</th><td class="utrecht-number-data nlds-numeric-table-cell">{rate}</td><td><a id="{link_id}" href="#{sc}" aria-labelledby="{link_id} {title_id}">Details</a></td></tr>"##,
            sc = esc(sc),
            title = esc(title),
        )
    } else {
        format!(
            r##"<tr><th><span class="nlds-toc-label">{sc}</span></th><th>{title}</th><td class="utrecht-number-data nlds-numeric-table-cell">{rate}</td><td><a href="#{sc}">Details</a></td></tr>"##,
            sc = esc(sc),
            title = esc(title),
        )
    }
}

/// Summary table: one row per target criterion.
pub fn render_summary_table(
    aggregation: &AggregationResult,
    catalog: &Catalog,
    options: &RenderOptions,
    locale: Locale,
) -> String {
    let rows: Vec<String> = summary_order(aggregation)
        .into_iter()
        .map(|entry| render_summary_row(entry, aggregation, catalog, options, locale))
        .collect();

    format!(
        r#"<table>
<thead><tr><th colspan="2">Successcriterium</th><th class="nlds-numeric-table-header-cell">Websites met problemen</th><th>Link</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>"#,
        rows = rows.join("\n"),
    )
}

fn render_audit_item(row: &AuditRow) -> String {
    let audit_id = row.audit_id().unwrap_or_default();
    let organization = row.organization().unwrap_or_default();
    let site = row.site_url().unwrap_or_default();

    let site_markup = if is_web_url(site) {
        format!(
            r#"<a class="utrecht-url-data" href="{href}">{text}</a>"#,
            href = esc(site),
            text = esc(site),
        )
    } else {
        format!(r#"<span class="utrecht-url-data">{}</span>"#, esc(site))
    };

    format!(
        r#"<li><a href="{register}{id}">Verklaring van {org}</a> voor {site}</li>"#,
        register = REGISTER_URL,
        id = esc(audit_id),
        org = esc(organization),
        site = site_markup,
    )
}

fn render_section(
    entry: &CriterionFailures,
    aggregation: &AggregationResult,
    catalog: &Catalog,
    options: &RenderOptions,
    locale: Locale,
) -> String {
    let sc = &entry.criterion;
    let count = entry.rows.len();
    let total = aggregation.qualifying_rows.len();

    let heading = match title_nl(catalog, sc) {
        Some(title) => format!(
            r#"<span class="nlds-toc-label">{}</span> {}"#,
            esc(sc),
            esc(title)
        ),
        None => format!(r#"<span class="nlds-toc-label">{}</span>"#, esc(sc)),
    };

    let statement = match aggregation.failure_rate(sc) {
        Some(rate) => format!(
            "{} van de {} gemeten audits heeft een probleem gevonden voor WCAG {}. Dat is {}.",
            count,
            total,
            esc(sc),
            format_percentage(rate, locale)
        ),
        None => format!(
            "Er zijn geen gemeten audits, dus er is geen percentage te berekenen voor WCAG {}.",
            esc(sc)
        ),
    };

    let items: Vec<String> = entry.rows.iter().map(render_audit_item).collect();
    let heading_attrs = if options.rich_accessibility_markup {
        format!(r#" id="{}""#, element_id(sc, "heading"))
    } else {
        String::new()
    };
    let section_attrs = if options.rich_accessibility_markup {
        format!(r#" aria-labelledby="{}""#, element_id(sc, "heading"))
    } else {
        String::new()
    };

    format!(
        r#"<section id="{sc}"{section_attrs}>
<h3{heading_attrs}>{heading}</h3>
<p>{statement}</p>
<details><summary>Bekijk de {count} rapporten</summary>
<ol>
{items}
</ol>
</details>
<p><a href="{more}{sc}">Lees meer over WCAG {sc} bij NL Design System.</a></p>
</section>"#,
        sc = esc(sc),
        items = items.join("\n"),
        more = NL_DESIGN_SYSTEM_WCAG_URL,
    )
}

/// One section per target criterion, in target order.
pub fn render_sections(
    aggregation: &AggregationResult,
    catalog: &Catalog,
    options: &RenderOptions,
    locale: Locale,
) -> String {
    aggregation
        .failures
        .iter()
        .map(|entry| render_section(entry, aggregation, catalog, options, locale))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the full report document.
pub fn render_report(
    aggregation: &AggregationResult,
    catalog: &Catalog,
    options: &RenderOptions,
    locale: Locale,
    download_url: Option<&Url>,
) -> String {
    let download = download_url
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(|url| {
            format!(
                r#"<p><a href="{}" download>Download de gegevens (CSV)</a></p>"#,
                esc(url.as_str())
            )
        })
        .unwrap_or_default();

    let intro = if aggregation.qualifying_rows.is_empty() {
        "Er zijn geen audits gevonden om mee te tellen.".to_string()
    } else {
        format!(
            "Gebaseerd op {} gemeten audits, getoetst aan {}.",
            aggregation.qualifying_rows.len(),
            catalog.version()
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="nl">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<main>
<h1>{title}</h1>
<p>{intro}</p>
{download}
{table}
{sections}
</main>
</body>
</html>
"#,
        title = esc(&options.title),
        table = render_summary_table(aggregation, catalog, options, locale),
        sections = render_sections(aggregation, catalog, options, locale),
    )
}
