use crate::catalog::Catalog;
use crate::core::aggregate::aggregate;
use crate::core::annotator::annotate_download_links;
use crate::core::fetch::HttpFetcher;
use crate::core::links::discover_csv_link;
use crate::core::{ConfigProvider, CsvSource, Pipeline, Storage};
use crate::domain::model::{
    AggregationResult, CriterionSummary, Report, ReportSummary, SourceDocument,
};
use crate::render::html::render_report;
use crate::utils::error::{ReportError, Result};
use url::Url;

pub const REPORT_FILE: &str = "report.html";
pub const SUMMARY_FILE: &str = "summary.json";

pub struct AuditReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    catalog: Catalog,
    fetcher: HttpFetcher,
}

impl<S: Storage, C: ConfigProvider> AuditReportPipeline<S, C> {
    /// Loads the configured catalog once; it is borrowed by every later stage.
    pub fn new(storage: S, config: C) -> Result<Self> {
        let catalog = Catalog::load(config.catalog_version())?;
        let fetcher = HttpFetcher::new(config.fetch_timeout());
        Ok(Self {
            storage,
            config,
            catalog,
            fetcher,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Explicit criteria from the configuration, else every criterion up to the level.
    /// Repeated ids are kept once, at their first position.
    pub fn target_criteria(&self) -> Vec<String> {
        match self.config.target_criteria() {
            Some(ids) if !ids.is_empty() => {
                let mut targets: Vec<String> = Vec::with_capacity(ids.len());
                for id in ids {
                    if targets.contains(id) {
                        tracing::warn!("Success criterion {} is listed more than once", id);
                    } else {
                        targets.push(id.clone());
                    }
                }
                targets
            }
            _ => self
                .catalog
                .conformance_targets(self.config.conformance_level()),
        }
    }

    fn summarize(&self, aggregation: &AggregationResult, origin: &str) -> ReportSummary {
        let criteria = aggregation
            .failures
            .iter()
            .map(|entry| {
                let descriptor = self.catalog.get(&entry.criterion);
                CriterionSummary {
                    id: entry.criterion.clone(),
                    title_nl: descriptor.map(|d| d.title_nl.clone()),
                    level: descriptor.map(|d| d.level),
                    failures: entry.rows.len(),
                    failure_rate: aggregation.failure_rate(&entry.criterion),
                    missing_column: aggregation.is_missing_column(&entry.criterion),
                }
            })
            .collect();

        ReportSummary {
            catalog_version: self.catalog.version(),
            generated_at: chrono::Utc::now(),
            source: origin.to_string(),
            qualifying_rows: aggregation.qualifying_rows.len(),
            adequacy_filter_applied: self.config.aggregate_options().apply_adequacy_filter,
            criteria,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AuditReportPipeline<S, C> {
    async fn extract(&self) -> Result<SourceDocument> {
        let source = self.config.source().ok_or_else(|| ReportError::ConfigError {
            message: "No CSV source configured".to_string(),
        })?;

        match source {
            CsvSource::File(path) => {
                tracing::debug!("Reading CSV from {}", path);
                let csv = tokio::fs::read_to_string(&path).await?;
                Ok(SourceDocument {
                    csv,
                    origin: path,
                    download_url: None,
                })
            }
            CsvSource::Url(url) => {
                let url = Url::parse(&url)?;
                let csv = self.fetcher.get_text(&url).await?;
                Ok(SourceDocument {
                    csv,
                    origin: url.to_string(),
                    download_url: Some(url),
                })
            }
            CsvSource::Page(page) => {
                let page = Url::parse(&page)?;
                let html = self.fetcher.get_text(&page).await?;
                let url = discover_csv_link(&html, &page)?;
                tracing::info!("Found CSV export at {}", url);
                let csv = self.fetcher.get_text(&url).await?;
                Ok(SourceDocument {
                    csv,
                    origin: url.to_string(),
                    download_url: Some(url),
                })
            }
        }
    }

    async fn transform(&self, source: SourceDocument) -> Result<Report> {
        let targets = self.target_criteria();
        let options = self.config.aggregate_options();
        let aggregation = aggregate(&source.csv, &targets, &options)?;

        tracing::info!(
            "{} qualifying audits, {} failures over {} criteria",
            aggregation.qualifying_rows.len(),
            aggregation.total_failures(),
            targets.len()
        );

        let locale = self.config.locale();
        let mut html = render_report(
            &aggregation,
            &self.catalog,
            &self.config.render_options(),
            locale,
            source.download_url.as_ref(),
        );

        if self.config.annotate_downloads() {
            let annotator = HttpFetcher::new(self.config.annotate_timeout());
            let annotated = annotate_download_links(
                &annotator,
                &html,
                source.download_url.as_ref(),
                locale,
                self.config.concurrent_requests(),
            )
            .await;
            if !annotated.failures.is_empty() {
                tracing::warn!(
                    "{} download links left without a size label",
                    annotated.failures.len()
                );
            }
            html = annotated.html;
        }

        let summary = self.summarize(&aggregation, &source.origin);
        Ok(Report {
            aggregation,
            html,
            summary,
        })
    }

    async fn load(&self, report: Report) -> Result<String> {
        let summary_json = serde_json::to_string_pretty(&report.summary)?;

        tracing::debug!("Writing {} ({} bytes)", REPORT_FILE, report.html.len());
        self.storage
            .write_file(REPORT_FILE, report.html.as_bytes())
            .await?;
        self.storage
            .write_file(SUMMARY_FILE, summary_json.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.config.output_path(), REPORT_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::AggregateOptions;
    use crate::domain::model::{CatalogVersion, ConformanceLevel};
    use crate::render::format::Locale;
    use crate::render::html::RenderOptions;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        source: CsvSource,
        targets: Option<Vec<String>>,
        version: CatalogVersion,
        annotate: bool,
    }

    impl MockConfig {
        fn new(source: CsvSource) -> Self {
            Self {
                source,
                targets: None,
                version: CatalogVersion::Wcag21,
                annotate: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn source(&self) -> Option<CsvSource> {
            Some(self.source.clone())
        }

        fn output_path(&self) -> &str {
            "test_output"
        }

        fn catalog_version(&self) -> CatalogVersion {
            self.version
        }

        fn conformance_level(&self) -> ConformanceLevel {
            ConformanceLevel::AA
        }

        fn target_criteria(&self) -> Option<&[String]> {
            self.targets.as_deref()
        }

        fn aggregate_options(&self) -> AggregateOptions {
            AggregateOptions::default()
        }

        fn render_options(&self) -> RenderOptions {
            RenderOptions::default()
        }

        fn locale(&self) -> Locale {
            Locale::Dutch
        }

        fn fetch_timeout(&self) -> Duration {
            Duration::from_secs(5)
        }

        fn annotate_downloads(&self) -> bool {
            self.annotate
        }

        fn annotate_timeout(&self) -> Duration {
            Duration::from_secs(5)
        }

        fn concurrent_requests(&self) -> usize {
            2
        }
    }

    const CSV: &str = "id;org;1.1.1;1.4.3;a;b;justif;c;d;e;f;url\n\
        A;Org A;0;1;;;onderbouwing toereikend;;;;;https://a.nl\n\
        B;Org B;1;0;;;onderbouwing toereikend;;;;;https://b.nl\n\
        C;Org C;0;0;;;geen onderbouwing;;;;;https://c.nl";

    #[tokio::test]
    async fn test_extract_from_csv_url() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/audits.csv");
            then.status(200).body(CSV);
        });

        let config = MockConfig::new(CsvSource::Url(server.url("/audits.csv")));
        let pipeline = AuditReportPipeline::new(MockStorage::new(), config).unwrap();

        let source = pipeline.extract().await.unwrap();

        mock.assert();
        assert_eq!(source.csv, CSV);
        assert!(source.download_url.is_some());
    }

    #[tokio::test]
    async fn test_extract_discovers_csv_on_page() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/statistieken");
            then.status(200)
                .body(r#"<html><a href="/export/audits.csv" download>Download</a></html>"#);
        });
        let csv_mock = server.mock(|when, then| {
            when.method(GET).path("/export/audits.csv");
            then.status(200).body(CSV);
        });

        let config = MockConfig::new(CsvSource::Page(server.url("/statistieken")));
        let pipeline = AuditReportPipeline::new(MockStorage::new(), config).unwrap();

        let source = pipeline.extract().await.unwrap();

        page_mock.assert();
        csv_mock.assert();
        assert!(source.origin.ends_with("/export/audits.csv"));
    }

    #[tokio::test]
    async fn test_transform_uses_explicit_targets() {
        let mut config = MockConfig::new(CsvSource::File("unused.csv".to_string()));
        config.targets = Some(vec!["1.1.1".to_string(), "1.4.3".to_string()]);
        let pipeline = AuditReportPipeline::new(MockStorage::new(), config).unwrap();

        let source = SourceDocument {
            csv: CSV.to_string(),
            origin: "inline".to_string(),
            download_url: None,
        };
        let report = pipeline.transform(source).await.unwrap();

        assert_eq!(report.aggregation.qualifying_rows.len(), 2);
        assert_eq!(report.aggregation.failure_count("1.1.1"), 1);
        assert_eq!(report.aggregation.failure_count("1.4.3"), 1);
        assert_eq!(report.summary.criteria.len(), 2);
        assert_eq!(report.summary.criteria[0].failure_rate, Some(0.5));
        assert!(report.html.contains("Dat is 50,0%."));
    }

    #[tokio::test]
    async fn test_extract_from_local_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("audits.csv");
        std::fs::write(&path, CSV).unwrap();

        let config = MockConfig::new(CsvSource::File(path.to_str().unwrap().to_string()));
        let pipeline = AuditReportPipeline::new(MockStorage::new(), config).unwrap();

        let source = pipeline.extract().await.unwrap();

        assert_eq!(source.csv, CSV);
        assert!(source.download_url.is_none());
        assert!(source.origin.ends_with("audits.csv"));
    }

    #[tokio::test]
    async fn test_repeated_targets_render_once() {
        let mut config = MockConfig::new(CsvSource::File("unused.csv".to_string()));
        config.targets = Some(vec![
            "1.1.1".to_string(),
            "1.4.3".to_string(),
            "1.1.1".to_string(),
        ]);
        let pipeline = AuditReportPipeline::new(MockStorage::new(), config).unwrap();
        assert_eq!(pipeline.target_criteria(), vec!["1.1.1", "1.4.3"]);

        let source = SourceDocument {
            csv: CSV.to_string(),
            origin: "inline".to_string(),
            download_url: None,
        };
        let report = pipeline.transform(source).await.unwrap();

        assert_eq!(report.summary.criteria.len(), 2);
        assert_eq!(report.html.matches(r#"<section id="1.1.1""#).count(), 1);
        assert_eq!(report.html.matches(r#"id="sc-1-1-1-label""#).count(), 1);
    }

    #[tokio::test]
    async fn test_default_targets_follow_catalog_level() {
        let config = MockConfig::new(CsvSource::File("unused.csv".to_string()));
        let pipeline = AuditReportPipeline::new(MockStorage::new(), config).unwrap();
        assert_eq!(pipeline.target_criteria().len(), 50);

        let mut config = MockConfig::new(CsvSource::File("unused.csv".to_string()));
        config.version = CatalogVersion::Wcag22;
        let pipeline = AuditReportPipeline::new(MockStorage::new(), config).unwrap();
        let targets = pipeline.target_criteria();
        assert!(!targets.contains(&"4.1.1".to_string()));
        assert!(targets.contains(&"2.4.11".to_string()));
    }

    #[tokio::test]
    async fn test_load_writes_report_and_summary() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new(CsvSource::File("unused.csv".to_string()));
        config.targets = Some(vec!["1.1.1".to_string()]);
        let pipeline = AuditReportPipeline::new(storage.clone(), config).unwrap();

        let source = SourceDocument {
            csv: CSV.to_string(),
            origin: "inline".to_string(),
            download_url: None,
        };
        let report = pipeline.transform(source).await.unwrap();
        let path = pipeline.load(report).await.unwrap();

        assert_eq!(path, "test_output/report.html");
        let html = String::from_utf8(storage.get_file(REPORT_FILE).await.unwrap()).unwrap();
        assert!(html.contains("<section id=\"1.1.1\""));

        let summary: serde_json::Value =
            serde_json::from_slice(&storage.get_file(SUMMARY_FILE).await.unwrap()).unwrap();
        assert_eq!(summary["qualifying_rows"], 2);
        assert_eq!(summary["catalog_version"], "2.1");
        assert_eq!(summary["criteria"][0]["id"], "1.1.1");
        assert_eq!(summary["criteria"][0]["failures"], 1);
    }
}
