use crate::core::aggregate::AggregateOptions;
use crate::domain::model::{CatalogVersion, ConformanceLevel, Report, SourceDocument};
use crate::render::format::Locale;
use crate::render::html::RenderOptions;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for the generated report files.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the audit CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    /// Direct link to the CSV export.
    Url(String),
    /// Page carrying a `download` link to the CSV export.
    Page(String),
    /// CSV on the local filesystem.
    File(String),
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> Option<CsvSource>;
    fn output_path(&self) -> &str;
    fn catalog_version(&self) -> CatalogVersion;
    fn conformance_level(&self) -> ConformanceLevel;
    /// Explicit target criteria. `None` means: every criterion up to `conformance_level`.
    fn target_criteria(&self) -> Option<&[String]>;
    fn aggregate_options(&self) -> AggregateOptions;
    fn render_options(&self) -> RenderOptions;
    fn locale(&self) -> Locale;
    fn fetch_timeout(&self) -> Duration;
    fn annotate_downloads(&self) -> bool;
    fn annotate_timeout(&self) -> Duration;
    fn concurrent_requests(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceDocument>;
    async fn transform(&self, source: SourceDocument) -> Result<Report>;
    async fn load(&self, report: Report) -> Result<String>;
}
