pub mod aggregate;
pub mod annotator;
pub mod etl;
pub mod fetch;
pub mod links;
pub mod pipeline;

pub use crate::domain::model::{AggregationResult, AuditRow, Report, SourceDocument};
pub use crate::domain::ports::{ConfigProvider, CsvSource, Pipeline, Storage};
pub use crate::utils::error::Result;
