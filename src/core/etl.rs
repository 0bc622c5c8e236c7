use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;
use tracing::Instrument;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. Nothing is written if an
    /// earlier stage fails.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting report generation");

        let source = self
            .pipeline
            .extract()
            .instrument(tracing::info_span!("extract"))
            .await?;
        tracing::info!("Fetched {} bytes of CSV from {}", source.csv.len(), source.origin);

        let report = self
            .pipeline
            .transform(source)
            .instrument(tracing::info_span!("transform"))
            .await?;
        for warning in &report.aggregation.warnings {
            tracing::debug!("{}", warning);
        }

        let output_path = self
            .pipeline
            .load(report)
            .instrument(tracing::info_span!("load"))
            .await?;

        tracing::info!(
            "Report written to {} in {:.2?}",
            output_path,
            started.elapsed()
        );
        Ok(output_path)
    }
}
