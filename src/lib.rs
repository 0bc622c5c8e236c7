pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, ReportConfig};

pub use catalog::Catalog;
pub use core::{etl::ReportEngine, pipeline::AuditReportPipeline};
pub use utils::error::{ReportError, Result};
