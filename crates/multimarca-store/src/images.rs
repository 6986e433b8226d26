//! Image-CDN interface plus the client-side pieces of the pipeline: batch
//! validation before upload, hosted-URL verification and a connectivity
//! probe.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::StatusCode;
use serde::Serialize;

use crate::HostError;

/// Content types the CDN accepts.
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// A file selected in the admin panel, not yet uploaded.
#[derive(Debug, Clone)]
pub struct ImageCandidate {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Size/type constraints applied before anything is sent to the CDN.
#[derive(Debug, Clone)]
pub struct ImageConstraints {
    pub max_bytes: u64,
    pub allowed_types: &'static [&'static str],
}

impl Default for ImageConstraints {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            allowed_types: ALLOWED_IMAGE_TYPES,
        }
    }
}

impl ImageConstraints {
    #[must_use]
    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            ..Self::default()
        }
    }
}

/// One rejected candidate with its user-facing reason.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedImage {
    pub file_name: String,
    pub reason: String,
}

/// Outcome of validating a batch: the candidates worth uploading plus a
/// per-file rejection list, never a collapsed boolean.
#[derive(Debug)]
pub struct BatchValidation {
    pub valid: Vec<ImageCandidate>,
    pub rejected: Vec<RejectedImage>,
}

impl BatchValidation {
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validate candidates against the constraints, preserving input order
/// within both result lists.
#[must_use]
pub fn validate_batch(
    candidates: Vec<ImageCandidate>,
    constraints: &ImageConstraints,
) -> BatchValidation {
    let mut valid = Vec::new();
    let mut rejected = Vec::new();

    for candidate in candidates {
        if !constraints
            .allowed_types
            .contains(&candidate.content_type.as_str())
        {
            rejected.push(RejectedImage {
                reason: format!("tipo de archivo no permitido: {}", candidate.content_type),
                file_name: candidate.file_name,
            });
        } else if candidate.data.len() as u64 > constraints.max_bytes {
            rejected.push(RejectedImage {
                reason: format!(
                    "supera el tamaño máximo de {} bytes ({} bytes)",
                    constraints.max_bytes,
                    candidate.data.len()
                ),
                file_name: candidate.file_name,
            });
        } else {
            valid.push(candidate);
        }
    }

    BatchValidation { valid, rejected }
}

/// A file the CDN accepted.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
}

/// A file the CDN turned away.
#[derive(Debug, Clone, Serialize)]
pub struct UploadFailure {
    pub file_name: String,
    pub reason: String,
}

/// Per-batch upload outcome. Partial success is a first-class result: the
/// caller gets a success count and one reason per failed file.
#[derive(Debug, Default, Serialize)]
pub struct UploadReport {
    pub images: Vec<UploadedImage>,
    pub failures: Vec<UploadFailure>,
}

impl UploadReport {
    #[must_use]
    pub fn uploaded(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Connectivity status of the hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HostStatus {
    Reachable,
    Unreachable { reason: String },
}

/// Upload/status surface of the hosted image CDN.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload a batch and report per-file outcomes.
    async fn upload(&self, images: Vec<ImageCandidate>) -> Result<UploadReport, HostError>;
    async fn status(&self) -> HostStatus;
}

/// Probe a hosting service with a single `HEAD` request.
pub async fn check_host_status(client: &reqwest::Client, base_url: &str) -> HostStatus {
    match client.head(base_url).send().await {
        Ok(resp) if resp.status().is_success() => HostStatus::Reachable,
        Ok(resp) => HostStatus::Unreachable {
            reason: format!("estado HTTP {}", resp.status().as_u16()),
        },
        Err(e) => HostStatus::Unreachable {
            reason: e.to_string(),
        },
    }
}

/// One hosted URL that failed verification.
#[derive(Debug, Clone, Serialize)]
pub struct UrlFailure {
    pub url: String,
    pub reason: String,
}

/// Aggregate of a hosted-URL sweep.
#[derive(Debug, Default, Serialize)]
pub struct UrlCheckReport {
    pub ok: usize,
    pub failures: Vec<UrlFailure>,
}

impl UrlCheckReport {
    #[must_use]
    pub fn bad(&self) -> usize {
        self.failures.len()
    }
}

/// Verify hosted image URLs with `HEAD` requests and bounded concurrency.
///
/// Non-200 URLs are logged for cleanup and collected with their reasons.
pub async fn verify_image_urls(
    client: &reqwest::Client,
    urls: Vec<String>,
    concurrency: usize,
) -> UrlCheckReport {
    let checks = stream::iter(urls.into_iter().map(|url| {
        let client = client.clone();
        async move {
            let result = client.head(&url).send().await;
            (url, result)
        }
    }))
    .buffer_unordered(concurrency.max(1))
    .collect::<Vec<_>>()
    .await;

    let mut report = UrlCheckReport::default();
    for (url, result) in checks {
        match result {
            Ok(resp) if resp.status() == StatusCode::OK => report.ok += 1,
            Ok(resp) => {
                tracing::warn!(
                    status = resp.status().as_u16(),
                    url = %url,
                    "image URL verification failed"
                );
                report.failures.push(UrlFailure {
                    url,
                    reason: format!("estado HTTP {}", resp.status().as_u16()),
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "image URL verification failed");
                report.failures.push(UrlFailure {
                    url,
                    reason: e.to_string(),
                });
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn candidate(file_name: &str, content_type: &str, len: usize) -> ImageCandidate {
        ImageCandidate {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            data: vec![0u8; len],
        }
    }

    #[test]
    fn valid_batch_passes_untouched() {
        let batch = validate_batch(
            vec![
                candidate("a.jpg", "image/jpeg", 1024),
                candidate("b.png", "image/png", 2048),
            ],
            &ImageConstraints::default(),
        );
        assert!(batch.all_valid());
        assert_eq!(batch.valid.len(), 2);
        assert_eq!(batch.valid[0].file_name, "a.jpg");
        assert_eq!(batch.valid[1].file_name, "b.png");
    }

    #[test]
    fn oversize_candidate_is_rejected_with_reason() {
        let batch = validate_batch(
            vec![candidate("big.jpg", "image/jpeg", 32)],
            &ImageConstraints::with_max_bytes(16),
        );
        assert!(!batch.all_valid());
        assert!(batch.valid.is_empty());
        assert_eq!(batch.rejected[0].file_name, "big.jpg");
        assert!(batch.rejected[0].reason.contains("tamaño máximo"));
    }

    #[test]
    fn wrong_type_is_rejected_with_reason() {
        let batch = validate_batch(
            vec![candidate("doc.pdf", "application/pdf", 10)],
            &ImageConstraints::default(),
        );
        assert_eq!(batch.rejected.len(), 1);
        assert!(batch.rejected[0]
            .reason
            .contains("tipo de archivo no permitido: application/pdf"));
    }

    #[test]
    fn mixed_batch_splits_preserving_order() {
        let batch = validate_batch(
            vec![
                candidate("ok1.webp", "image/webp", 10),
                candidate("bad.bmp", "image/bmp", 10),
                candidate("ok2.gif", "image/gif", 10),
            ],
            &ImageConstraints::default(),
        );
        assert_eq!(batch.valid.len(), 2);
        assert_eq!(batch.rejected.len(), 1);
        assert_eq!(batch.valid[0].file_name, "ok1.webp");
        assert_eq!(batch.valid[1].file_name, "ok2.gif");
    }

    #[test]
    fn boundary_size_is_accepted() {
        let batch = validate_batch(
            vec![candidate("edge.jpg", "image/jpeg", 16)],
            &ImageConstraints::with_max_bytes(16),
        );
        assert!(batch.all_valid());
    }

    #[test]
    fn upload_report_counts_both_sides() {
        let report = UploadReport {
            images: vec![UploadedImage {
                url: "https://cdn.example.com/a.jpg".to_string(),
                public_id: "a".to_string(),
            }],
            failures: vec![UploadFailure {
                file_name: "b.jpg".to_string(),
                reason: "timeout".to_string(),
            }],
        };
        assert_eq!(report.uploaded(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_complete());
    }

    #[tokio::test]
    async fn host_status_reachable_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let status = check_host_status(&client, &server.uri()).await;
        assert_eq!(status, HostStatus::Reachable);
    }

    #[tokio::test]
    async fn host_status_unreachable_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let status = check_host_status(&client, &server.uri()).await;
        assert_eq!(
            status,
            HostStatus::Unreachable {
                reason: "estado HTTP 503".to_string()
            }
        );
    }

    #[tokio::test]
    async fn url_verification_separates_ok_from_bad() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/good.jpg"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/gone.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let report = verify_image_urls(
            &client,
            vec![
                format!("{}/good.jpg", server.uri()),
                format!("{}/gone.jpg", server.uri()),
            ],
            4,
        )
        .await;

        assert_eq!(report.ok, 1);
        assert_eq!(report.bad(), 1);
        assert!(report.failures[0].url.ends_with("/gone.jpg"));
        assert_eq!(report.failures[0].reason, "estado HTTP 404");
    }

    #[tokio::test]
    async fn url_verification_counts_connection_errors() {
        // Port 9 (discard) is not listening; the request errors out.
        let client = reqwest::Client::new();
        let report =
            verify_image_urls(&client, vec!["http://127.0.0.1:9/x.jpg".to_string()], 1).await;
        assert_eq!(report.ok, 0);
        assert_eq!(report.bad(), 1);
    }

    #[tokio::test]
    async fn zero_concurrency_is_clamped() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let report =
            verify_image_urls(&client, vec![format!("{}/a.jpg", server.uri())], 0).await;
        assert_eq!(report.ok, 1);
    }
}
