//! Single-target HTTP fetcher wrapping reqwest.
//!
//! One GET per call, bounded by the configured timeout. No retries.

use std::collections::BTreeMap;

use crate::normalize::{normalize, strip_mime_params};
use crate::types::{DataError, DataResult, FetchConfig, FetchOutcome};

/// HTTP client bound to one fixed target.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl Fetcher {
    /// Create a fetcher for the given target. The URL is validated here.
    pub fn new(config: FetchConfig) -> DataResult<Self> {
        reqwest::Url::parse(&config.url)
            .map_err(|e| DataError::InvalidTarget(format!("{}: {e}", config.url)))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            // A 3xx from the target is reported as a status error, never followed.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| DataError::Transport {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// The fixed target URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch the target and normalize the response.
    ///
    /// Any non-2xx status is an error; a `FetchOutcome` only exists for success.
    pub async fn fetch(&self) -> DataResult<FetchOutcome> {
        let url = self.url();
        tracing::debug!(url, "Fetching target");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Target returned non-success status");
            return Err(DataError::HttpStatus {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in response.headers() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }

        let content_type = headers.get("content-type").map(|raw| strip_mime_params(raw));

        let text = response.text().await.map_err(|e| self.classify(e))?;
        let body = normalize(content_type.as_deref().unwrap_or(""), &text);

        tracing::debug!(
            url,
            status = status.as_u16(),
            content_type = content_type.as_deref().unwrap_or(""),
            "Fetched target"
        );

        Ok(FetchOutcome {
            url: url.to_string(),
            status_code: status.as_u16(),
            content_type,
            body,
            headers,
        })
    }

    fn classify(&self, e: reqwest::Error) -> DataError {
        if e.is_timeout() {
            tracing::warn!(url = self.url(), "Fetch timed out");
            DataError::Timeout {
                url: self.url().to_string(),
            }
        } else {
            tracing::warn!(url = self.url(), "Fetch failed: {e}");
            DataError::Transport {
                message: e.to_string(),
            }
        }
    }
}
