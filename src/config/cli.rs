use crate::core::aggregate::AggregateOptions;
use crate::core::{ConfigProvider, CsvSource};
use crate::domain::model::{CatalogVersion, ConformanceLevel};
use crate::render::{Locale, RenderOptions};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wcag-audit-stats")]
#[command(about = "Summarise a WCAG audit export into an HTML report")]
pub struct CliConfig {
    #[arg(long, help = "URL of the semicolon-separated CSV export")]
    pub csv_url: Option<String>,

    #[arg(long, help = "URL of a page with a download link to the CSV export")]
    pub page_url: Option<String>,

    #[arg(long, help = "Local CSV export")]
    pub csv_file: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long = "wcag", default_value = "2.1", help = "WCAG catalog version (2.1 or 2.2)")]
    pub catalog_version: CatalogVersion,

    #[arg(long, default_value = "AA", help = "Count every criterion up to this level")]
    pub level: ConformanceLevel,

    #[arg(long, value_delimiter = ',', help = "Explicit success criteria, overrides --level")]
    pub criteria: Vec<String>,

    #[arg(long, help = "Count every audit, not only those with an adequate justification")]
    pub no_adequacy_filter: bool,

    #[arg(long, help = "Leave out ids and aria-labelledby in the summary table")]
    pub plain_markup: bool,

    #[arg(long, default_value = "nl-NL")]
    pub locale: Locale,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Do not add file sizes to download links")]
    pub no_annotate: bool,

    #[arg(long, default_value = "10")]
    pub annotate_timeout_seconds: u64,

    #[arg(long, default_value = "5")]
    pub concurrent_requests: usize,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn source(&self) -> Option<CsvSource> {
        self.csv_url
            .clone()
            .map(CsvSource::Url)
            .or_else(|| self.page_url.clone().map(CsvSource::Page))
            .or_else(|| self.csv_file.clone().map(CsvSource::File))
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn catalog_version(&self) -> CatalogVersion {
        self.catalog_version
    }

    fn conformance_level(&self) -> ConformanceLevel {
        self.level
    }

    fn target_criteria(&self) -> Option<&[String]> {
        if self.criteria.is_empty() {
            None
        } else {
            Some(&self.criteria)
        }
    }

    fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            apply_adequacy_filter: !self.no_adequacy_filter,
        }
    }

    fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            rich_accessibility_markup: !self.plain_markup,
            title: self.title.clone().unwrap_or(defaults.title),
        }
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn annotate_downloads(&self) -> bool {
        !self.no_annotate
    }

    fn annotate_timeout(&self) -> Duration {
        Duration::from_secs(self.annotate_timeout_seconds)
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_single_source(&[
            ("--csv-url", self.csv_url.as_deref()),
            ("--page-url", self.page_url.as_deref()),
            ("--csv-file", self.csv_file.as_deref()),
        ])?;
        if let Some(url) = &self.csv_url {
            validation::validate_url("csv_url", url)?;
        }
        if let Some(url) = &self.page_url {
            validation::validate_url("page_url", url)?;
        }
        if let Some(file) = &self.csv_file {
            validation::validate_path("csv_file", file)?;
            validation::validate_file_extension("csv_file", file, &["csv"])?;
        }
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_criterion_ids("criteria", &self.criteria)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
        validation::validate_range(
            "annotate_timeout_seconds",
            self.annotate_timeout_seconds,
            1,
            600,
        )?;
        validation::validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        if let Some(title) = &self.title {
            validation::validate_non_empty_string("title", title)?;
        }
        Ok(())
    }
}
