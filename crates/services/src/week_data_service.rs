use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use tracker_core::model::{ProgressEntry, WeekResult, WeekStart};

use crate::error::WeekDataError;

#[derive(Clone, Debug)]
pub struct WeekDataConfig {
    pub base_url: String,
}

impl WeekDataConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("DROPTRACK_ENDPOINT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "http://127.0.0.1:5000".into());
        Self { base_url }
    }
}

/// Retrieves one week's progress rows from the tracker backend and classifies
/// the response.
///
/// The service performs no retries, no caching and no deduplication:
/// overlapping calls proceed independently and the caller decides which
/// outcome wins the display.
#[derive(Clone)]
pub struct WeekDataService {
    client: Client,
    config: WeekDataConfig,
}

impl WeekDataService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(WeekDataConfig::from_env())
    }

    #[must_use]
    pub fn new(config: WeekDataConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch the progress rows for the week starting on `date`.
    ///
    /// The date must be an ISO `YYYY-MM-DD` string falling on a Wednesday;
    /// anything else fails before a request is issued.
    ///
    /// # Errors
    ///
    /// Returns `WeekDataError` when the date is invalid, the backend answers
    /// with a non-success status, or the request never completes.
    pub async fn fetch_week(&self, date: &str) -> Result<WeekFetch, WeekDataError> {
        let week = WeekStart::parse(date)?;

        let url = format!(
            "{}/get_week_data",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(url)
            .query(&[("date", week.as_query())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the backend's own error text when the body carries one.
            if let Ok(body) = response.json::<ErrorBody>().await {
                if let Some(message) = body.error {
                    return Err(WeekDataError::Server(message));
                }
            }
            return Err(WeekDataError::HttpStatus(status));
        }

        let body: WeekResponse = response.json().await?;
        Ok(classify(body))
    }
}

/// Object-safe fetch seam so views can run against stub clients in tests.
#[async_trait]
pub trait WeekDataApi: Send + Sync {
    async fn fetch_week(&self, date: &str) -> Result<WeekFetch, WeekDataError>;
}

#[async_trait]
impl WeekDataApi for WeekDataService {
    async fn fetch_week(&self, date: &str) -> Result<WeekFetch, WeekDataError> {
        WeekDataService::fetch_week(self, date).await
    }
}

/// A successful retrieval, classified.
///
/// `Empty` means the backend answered with zero rows, a valid result rather
/// than an error. Loading and failure states are the renderer's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum WeekFetch {
    Rows(WeekResult),
    Empty,
}

/// The two response shapes the endpoint has produced over time: the current
/// object carrying an aggregate, and the legacy bare array without one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WeekResponse {
    Keyed {
        #[serde(default)]
        progress: Vec<ProgressEntry>,
        #[serde(default)]
        total_value: Option<f64>,
    },
    Bare(Vec<ProgressEntry>),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

fn classify(response: WeekResponse) -> WeekFetch {
    let (entries, total_value) = match response {
        WeekResponse::Keyed {
            progress,
            total_value,
        } => (progress, total_value),
        WeekResponse::Bare(entries) => (entries, None),
    };
    if entries.is_empty() {
        WeekFetch::Empty
    } else {
        WeekFetch::Rows(WeekResult {
            entries,
            total_value,
        })
    }
}
