use crate::core::fetch::HttpFetcher;
use crate::core::links::{apply_size_labels, unlabelled_download_hrefs};
use crate::render::format::{format_megabytes, Locale};
use crate::utils::error::ReportError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// A download link that could not be given a size label.
#[derive(Debug)]
pub struct AnnotationFailure {
    pub href: String,
    pub error: ReportError,
}

#[derive(Debug)]
pub struct Annotated {
    pub html: String,
    pub labelled: usize,
    pub failures: Vec<AnnotationFailure>,
}

/// Adds `data-size="<n> megabyte"` to every `<a href download>` that lacks one.
///
/// One HEAD request per distinct href, at most `concurrency` at a time. A
/// failing link keeps its markup unchanged and is reported in
/// [`Annotated::failures`].
pub async fn annotate_download_links(
    fetcher: &HttpFetcher,
    html: &str,
    base: Option<&Url>,
    locale: Locale,
    concurrency: usize,
) -> Annotated {
    let hrefs = unlabelled_download_hrefs(html);

    if hrefs.is_empty() {
        return Annotated {
            html: html.to_string(),
            labelled: 0,
            failures: Vec::new(),
        };
    }

    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for href in hrefs {
        let fetcher = fetcher.clone();
        let permits = Arc::clone(&permits);
        let resolved = match base {
            Some(base) => base.join(&href),
            None => Url::parse(&href),
        };

        tasks.spawn(async move {
            let outcome = match resolved {
                Ok(url) => {
                    let _permit = permits.acquire_owned().await;
                    fetcher.head_content_length(&url).await
                }
                Err(e) => Err(ReportError::InvalidUrl(e)),
            };
            (href, outcome)
        });
    }

    let mut labels = HashMap::new();
    let mut failures = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((href, Ok(bytes))) => {
                labels.insert(href, format_megabytes(bytes, locale));
            }
            Ok((href, Err(error))) => {
                tracing::warn!("Could not determine size of {}: {}", href, error);
                failures.push(AnnotationFailure { href, error });
            }
            Err(join_error) => tracing::warn!("Annotation task failed: {}", join_error),
        }
    }

    if labels.is_empty() {
        return Annotated {
            html: html.to_string(),
            labelled: 0,
            failures,
        };
    }

    let (annotated, labelled) = apply_size_labels(html, &labels);
    tracing::debug!(
        "Annotated {} download links, {} failed",
        labelled,
        failures.len()
    );

    Annotated {
        html: annotated,
        labelled,
        failures,
    }
}
