//! Reduction of the audit CSV export to per-criterion failure lists.

use crate::domain::model::{AggregationResult, AuditRow, CriterionFailures, MissingColumnWarning};
use crate::utils::error::{ReportError, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

pub const FIELD_DELIMITER: u8 = b';';

/// Adequacy column value of rows that count towards the totals.
pub const ADEQUATE_JUSTIFICATION: &str = "onderbouwing toereikend";

/// Cell value marking a failed success criterion.
pub const FAILURE_MARKER: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateOptions {
    /// Only count rows whose justification was judged adequate.
    pub apply_adequacy_filter: bool,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            apply_adequacy_filter: true,
        }
    }
}

/// Parses `;`-separated CSV into rows of cells. Rows must all have the same length.
pub fn parse_rows(csv_text: &str) -> Result<Vec<Vec<String>>> {
    // The csv reader closes an unterminated quoted field at EOF instead of failing.
    let quotes = csv_text.bytes().filter(|&b| b == b'"').count();
    if quotes % 2 != 0 {
        return Err(ReportError::UnbalancedQuotes { quotes });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(false)
        .from_reader(csv_text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Counts, per target criterion, the qualifying rows that fail it.
///
/// Row 0 is the header; criterion columns are found by exact name. Targets
/// without a column get an empty failure list and a [`MissingColumnWarning`].
pub fn aggregate(
    csv_text: &str,
    targets: &[String],
    options: &AggregateOptions,
) -> Result<AggregationResult> {
    let mut rows = parse_rows(csv_text)?.into_iter();
    let header = rows.next().unwrap_or_default();

    let mut columns = Vec::with_capacity(targets.len());
    let mut warnings = Vec::new();
    for criterion in targets {
        let column = header.iter().position(|name| name == criterion);
        if column.is_none() {
            warnings.push(MissingColumnWarning {
                criterion: criterion.clone(),
            });
        }
        columns.push(column);
    }

    if !warnings.is_empty() {
        let missing: Vec<&str> = warnings.iter().map(|w| w.criterion.as_str()).collect();
        tracing::warn!(
            "The following success criteria are not in the CSV file: {}",
            missing.join(" ")
        );
    }

    let qualifying_rows: Vec<AuditRow> = rows
        .map(AuditRow::new)
        .filter(|row| {
            !options.apply_adequacy_filter || row.adequacy() == Some(ADEQUATE_JUSTIFICATION)
        })
        .collect();

    let failures = targets
        .iter()
        .zip(&columns)
        .map(|(criterion, column)| {
            let rows = match column {
                Some(index) => qualifying_rows
                    .iter()
                    .filter(|row| row.cell(*index) == Some(FAILURE_MARKER))
                    .cloned()
                    .collect(),
                None => Vec::new(),
            };
            CriterionFailures {
                criterion: criterion.clone(),
                rows,
            }
        })
        .collect();

    tracing::debug!(
        "Aggregated {} qualifying rows over {} criteria",
        qualifying_rows.len(),
        targets.len()
    );

    Ok(AggregationResult {
        qualifying_rows,
        failures,
        warnings,
    })
}
