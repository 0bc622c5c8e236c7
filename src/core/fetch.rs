use crate::utils::error::{ReportError, Result};
use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// HTTP access with a hard deadline on every exchange.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    async fn deadline<T, F>(&self, url: &Url, work: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.timeout, work).await {
            Ok(result) => result,
            Err(_) => Err(ReportError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    /// GET `url` and return the body as text. Non-success statuses are errors.
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        tracing::debug!("GET {}", url);
        self.deadline(url, async {
            let response = self.client.get(url.clone()).send().await?;
            tracing::debug!("Response status: {}", response.status());
            let response = response.error_for_status()?;
            Ok::<_, ReportError>(response.text().await?)
        })
        .await
    }

    /// HEAD `url` and return the advertised body size in bytes.
    pub async fn head_content_length(&self, url: &Url) -> Result<u64> {
        tracing::debug!("HEAD {}", url);
        self.deadline(url, async {
            let response = self.client.head(url.clone()).send().await?;
            let response = response.error_for_status()?;
            content_length(response.headers()).ok_or_else(|| ReportError::MissingLengthIndicator {
                url: url.to_string(),
            })
        })
        .await
    }
}

/// Reads `Content-Length` from the headers themselves; the body of a HEAD
/// response is always empty, so its size hint cannot be used.
pub fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}
