use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// WCAG conformance tier. Ordered so that `A < AA < AAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ConformanceLevel {
    A,
    AA,
    AAA,
}

impl fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConformanceLevel::A => "A",
            ConformanceLevel::AA => "AA",
            ConformanceLevel::AAA => "AAA",
        };
        f.write_str(label)
    }
}

impl FromStr for ConformanceLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(ConformanceLevel::A),
            "AA" => Ok(ConformanceLevel::AA),
            "AAA" => Ok(ConformanceLevel::AAA),
            other => Err(format!("unknown conformance level '{}' (expected A, AA or AAA)", other)),
        }
    }
}

/// Serialized as `"2.1"` / `"2.2"`; deserialized through [`FromStr`], so
/// configuration files accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum CatalogVersion {
    #[default]
    #[serde(rename = "2.1")]
    Wcag21,
    #[serde(rename = "2.2")]
    Wcag22,
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogVersion::Wcag21 => f.write_str("WCAG 2.1"),
            CatalogVersion::Wcag22 => f.write_str("WCAG 2.2"),
        }
    }
}

impl FromStr for CatalogVersion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(' ', "").as_str() {
            "2.1" | "21" | "wcag21" | "wcag2.1" => Ok(CatalogVersion::Wcag21),
            "2.2" | "22" | "wcag22" | "wcag2.2" => Ok(CatalogVersion::Wcag22),
            other => Err(format!("unknown WCAG version '{}' (expected 2.1 or 2.2)", other)),
        }
    }
}

impl TryFrom<String> for ConformanceLevel {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for CatalogVersion {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// One success criterion of a WCAG catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionDescriptor {
    pub id: String,
    pub title: String,
    pub title_nl: String,
    pub level: ConformanceLevel,
    pub url: String,
    /// Fragment of `url` without the leading `#`, filled in when a catalog is built.
    pub fragment: String,
    /// Version that introduced the criterion, when newer than the base catalog.
    pub since: Option<CatalogVersion>,
}

/// One data row of the audit export.
///
/// Positional columns are fixed by convention of the export, not by header name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRow(pub Vec<String>);

impl AuditRow {
    pub const AUDIT_ID: usize = 0;
    pub const ORGANIZATION: usize = 1;
    pub const ADEQUACY: usize = 6;
    pub const SITE_URL: usize = 11;

    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn audit_id(&self) -> Option<&str> {
        self.cell(Self::AUDIT_ID)
    }

    pub fn organization(&self) -> Option<&str> {
        self.cell(Self::ORGANIZATION)
    }

    pub fn adequacy(&self) -> Option<&str> {
        self.cell(Self::ADEQUACY)
    }

    pub fn site_url(&self) -> Option<&str> {
        self.cell(Self::SITE_URL)
    }
}

/// Failing rows for one target criterion, in source row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionFailures {
    pub criterion: String,
    pub rows: Vec<AuditRow>,
}

/// A target criterion that has no column in the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingColumnWarning {
    pub criterion: String,
}

impl fmt::Display for MissingColumnWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "success criterion {} has no column in the CSV file", self.criterion)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    pub qualifying_rows: Vec<AuditRow>,
    /// One entry per target criterion, in target order.
    pub failures: Vec<CriterionFailures>,
    pub warnings: Vec<MissingColumnWarning>,
}

impl AggregationResult {
    pub fn failures_for(&self, criterion: &str) -> Option<&[AuditRow]> {
        self.failures
            .iter()
            .find(|entry| entry.criterion == criterion)
            .map(|entry| entry.rows.as_slice())
    }

    pub fn failure_count(&self, criterion: &str) -> usize {
        self.failures_for(criterion).map_or(0, |rows| rows.len())
    }

    /// Share of qualifying rows failing `criterion`.
    ///
    /// Returns `None` when there are no qualifying rows, since the rate is undefined.
    pub fn failure_rate(&self, criterion: &str) -> Option<f64> {
        if self.qualifying_rows.is_empty() {
            return None;
        }
        Some(self.failure_count(criterion) as f64 / self.qualifying_rows.len() as f64)
    }

    pub fn total_failures(&self) -> usize {
        self.failures.iter().map(|entry| entry.rows.len()).sum()
    }

    pub fn is_missing_column(&self, criterion: &str) -> bool {
        self.warnings.iter().any(|w| w.criterion == criterion)
    }
}

/// Raw CSV text plus where it came from.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub csv: String,
    pub origin: String,
    /// Set when the CSV was fetched over http(s); the report links back to it.
    pub download_url: Option<Url>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriterionSummary {
    pub id: String,
    pub title_nl: Option<String>,
    pub level: Option<ConformanceLevel>,
    pub failures: usize,
    pub failure_rate: Option<f64>,
    pub missing_column: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub catalog_version: CatalogVersion,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub source: String,
    pub qualifying_rows: usize,
    pub adequacy_filter_applied: bool,
    pub criteria: Vec<CriterionSummary>,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub aggregation: AggregationResult,
    pub html: String,
    pub summary: ReportSummary,
}
