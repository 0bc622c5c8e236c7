use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("CSV parse error: unbalanced quotes ({quotes} quote characters)")]
    UnbalancedQuotes { quotes: usize },

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {seconds}s: {url}")]
    Timeout { url: String, seconds: u64 },

    #[error("No Content-Length header in response from {url}")]
    MissingLengthIndicator { url: String },

    #[error("No download link to a .csv file found on {page}")]
    CsvLinkNotFound { page: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Malformed catalog: {message}")]
    Catalog { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::Parse(_)
            | ReportError::UnbalancedQuotes { .. }
            | ReportError::CsvLinkNotFound { .. } => ErrorCategory::Input,
            ReportError::Network(_)
            | ReportError::Timeout { .. }
            | ReportError::MissingLengthIndicator { .. } => ErrorCategory::Network,
            ReportError::InvalidUrl(_)
            | ReportError::ConfigError { .. }
            | ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReportError::Catalog { .. } | ReportError::Io(_) | ReportError::Serialization(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::MissingLengthIndicator { .. } => ErrorSeverity::Low,
            ReportError::Network(_) | ReportError::Timeout { .. } => ErrorSeverity::Medium,
            ReportError::Catalog { .. } | ReportError::Io(_) | ReportError::Serialization(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::Parse(_) | ReportError::UnbalancedQuotes { .. } => {
                format!("The audit export could not be read as CSV: {}", self)
            }
            ReportError::Network(_) => format!("Could not download the audit export: {}", self),
            ReportError::Timeout { url, seconds } => {
                format!("Downloading {} took longer than {} seconds", url, seconds)
            }
            ReportError::CsvLinkNotFound { page } => {
                format!("The page {} does not offer a CSV download", page)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check that the export is a semicolon-separated CSV file with balanced quotes"
            }
            ErrorCategory::Network => {
                "Check the URL and your network connection, or raise the timeout"
            }
            ErrorCategory::Configuration => "Check the command-line flags or the TOML configuration",
            ErrorCategory::System => "Check file permissions and free disk space",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_distinct_network_failure() {
        let err = ReportError::Timeout {
            url: "https://example.com/a.csv".to_string(),
            seconds: 30,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("30 seconds"));
    }

    #[test]
    fn test_parse_errors_are_input_errors() {
        let err = ReportError::UnbalancedQuotes { quotes: 3 };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
    }
}
