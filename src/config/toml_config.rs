use crate::core::aggregate::AggregateOptions;
use crate::core::{ConfigProvider, CsvSource};
use crate::domain::model::{CatalogVersion, ConformanceLevel};
use crate::render::{Locale, RenderOptions};
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_ANNOTATE_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_CONCURRENT_REQUESTS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub aggregate: AggregateConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub annotate: AnnotateConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub csv_url: Option<String>,
    pub page_url: Option<String>,
    pub csv_file: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub version: Option<CatalogVersion>,
    pub level: Option<ConformanceLevel>,
    pub target_criteria: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateConfig {
    pub apply_adequacy_filter: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    pub rich_accessibility_markup: Option<bool>,
    pub locale: Option<Locale>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotateConfig {
    pub enabled: Option<bool>,
    pub concurrent_requests: Option<usize>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

impl ReportConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_single_source(&[
            ("source.csv_url", self.source.csv_url.as_deref()),
            ("source.page_url", self.source.page_url.as_deref()),
            ("source.csv_file", self.source.csv_file.as_deref()),
        ])?;
        if let Some(url) = &self.source.csv_url {
            validation::validate_url("source.csv_url", url)?;
        }
        if let Some(url) = &self.source.page_url {
            validation::validate_url("source.page_url", url)?;
        }
        if let Some(file) = &self.source.csv_file {
            validation::validate_path("source.csv_file", file)?;
            validation::validate_file_extension("source.csv_file", file, &["csv"])?;
        }
        if let Some(seconds) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", seconds, 1, 600)?;
        }
        if let Some(ids) = &self.catalog.target_criteria {
            validation::validate_criterion_ids("catalog.target_criteria", ids)?;
        }
        if let Some(seconds) = self.annotate.timeout_seconds {
            validation::validate_range("annotate.timeout_seconds", seconds, 1, 600)?;
        }
        if let Some(concurrent) = self.annotate.concurrent_requests {
            validation::validate_positive_number("annotate.concurrent_requests", concurrent, 1)?;
        }
        if let Some(title) = &self.render.title {
            validation::validate_non_empty_string("render.title", title)?;
        }
        validation::validate_path("load.output_path", &self.load.output_path)?;
        Ok(())
    }
}

impl ConfigProvider for ReportConfig {
    fn source(&self) -> Option<CsvSource> {
        self.source
            .csv_url
            .clone()
            .map(CsvSource::Url)
            .or_else(|| self.source.page_url.clone().map(CsvSource::Page))
            .or_else(|| self.source.csv_file.clone().map(CsvSource::File))
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn catalog_version(&self) -> CatalogVersion {
        self.catalog.version.unwrap_or_default()
    }

    fn conformance_level(&self) -> ConformanceLevel {
        self.catalog.level.unwrap_or(ConformanceLevel::AA)
    }

    fn target_criteria(&self) -> Option<&[String]> {
        self.catalog.target_criteria.as_deref()
    }

    fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            apply_adequacy_filter: self.aggregate.apply_adequacy_filter.unwrap_or(true),
        }
    }

    fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            rich_accessibility_markup: self
                .render
                .rich_accessibility_markup
                .unwrap_or(defaults.rich_accessibility_markup),
            title: self.render.title.clone().unwrap_or(defaults.title),
        }
    }

    fn locale(&self) -> Locale {
        self.render.locale.unwrap_or_default()
    }

    fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn annotate_downloads(&self) -> bool {
        self.annotate.enabled.unwrap_or(true)
    }

    fn annotate_timeout(&self) -> Duration {
        Duration::from_secs(
            self.annotate
                .timeout_seconds
                .unwrap_or(DEFAULT_ANNOTATE_TIMEOUT_SECONDS),
        )
    }

    fn concurrent_requests(&self) -> usize {
        self.annotate
            .concurrent_requests
            .unwrap_or(DEFAULT_CONCURRENT_REQUESTS)
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
