// Analytics Service Client
//
// Fetches the read-only JSON contracts the analytics core consumes:
// GET /analytics and GET /scans/{id}. Local JSON files stand in for the
// service when working offline.

use crate::config::ServiceConfig;
use crate::error::AnalyticsError;
use crate::models::{AnalyticsSnapshot, ScanRecord};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Initial backoff duration (doubled with each retry)
const INITIAL_BACKOFF_MS: u64 = 100;

/// Maximum backoff duration
const MAX_BACKOFF_MS: u64 = 5000;

/// HTTP client for the analytics service
pub struct AnalyticsClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl AnalyticsClient {
    /// Create a new client from service settings
    pub fn new(config: &ServiceConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(4)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries.max(1),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET /analytics
    pub async fn fetch_analytics(&self) -> crate::Result<AnalyticsSnapshot> {
        let url = self.endpoint("analytics");
        let snapshot: AnalyticsSnapshot = self.get_json(&url).await?;
        debug!("Fetched {} trend entries", snapshot.trends.len());
        Ok(snapshot)
    }

    /// GET /scans/{id}
    pub async fn fetch_scan(&self, id: i64) -> crate::Result<ScanRecord> {
        let url = self.endpoint(&format!("scans/{}", id));
        match self.get_json::<ScanRecord>(&url).await {
            Ok(mut scan) => {
                scan.id.get_or_insert(id);
                Ok(scan)
            }
            Err(AnalyticsError::Http { status: 404, .. }) => Err(AnalyticsError::ScanNotFound { id }),
            Err(e) => Err(e),
        }
    }

    /// Fetch two scans concurrently
    pub async fn fetch_scan_pair(&self, id_a: i64, id_b: i64) -> crate::Result<(ScanRecord, ScanRecord)> {
        tokio::try_join!(self.fetch_scan(id_a), self.fetch_scan(id_b))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> crate::Result<T> {
        let response = self.retry_request(url).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(AnalyticsError::from)
    }

    /// Retry a GET with exponential backoff
    async fn retry_request(&self, url: &str) -> crate::Result<reqwest::Response> {
        let mut backoff = Duration::from_millis(INITIAL_BACKOFF_MS);
        let mut last_error = None;

        for attempt in 0..self.max_retries {
            debug!("GET {} (attempt {}/{})", url, attempt + 1, self.max_retries);

            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    } else if status.as_u16() == 429 || status.is_server_error() {
                        warn!(
                            "Service returned {}, retrying after {:?} (attempt {}/{})",
                            status,
                            backoff,
                            attempt + 1,
                            self.max_retries
                        );
                        last_error = Some(AnalyticsError::Http {
                            status: status.as_u16(),
                            details: format!("Request to {} failed with status: {}", url, status),
                        });
                    } else {
                        // Client error - don't retry
                        return Err(AnalyticsError::Http {
                            status: status.as_u16(),
                            details: format!("Request to {} failed with status: {}", url, status),
                        });
                    }
                }
                Err(e) => {
                    warn!(
                        "Network error: {}, retrying after {:?} (attempt {}/{})",
                        e,
                        backoff,
                        attempt + 1,
                        self.max_retries
                    );
                    last_error = Some(AnalyticsError::Request(e));
                }
            }

            if attempt + 1 < self.max_retries {
                tokio::time::sleep(backoff).await;
                backoff = std::cmp::min(backoff * 2, Duration::from_millis(MAX_BACKOFF_MS));
            }
        }

        Err(last_error.unwrap_or_else(|| AnalyticsError::Other(format!("No attempts made for {}", url))))
    }
}

/// Read a GET /analytics payload saved to disk
pub fn load_analytics_file(path: impl AsRef<Path>) -> crate::Result<AnalyticsSnapshot> {
    read_json(path.as_ref())
}

/// Read a GET /scans/{id} payload saved to disk
pub fn load_scan_file(path: impl AsRef<Path>) -> crate::Result<ScanRecord> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> crate::Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| AnalyticsError::FileSystem {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(serde_json::from_str(&contents)?)
}
