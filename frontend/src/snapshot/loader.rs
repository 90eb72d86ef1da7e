use std::{future::Future, time::Duration};

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::constants::{SNAPSHOT_PATH, SNAPSHOT_TIMEOUT_SECS};

use super::types::Snapshot;

const HTTP_NOT_FOUND: u16 = 404;

/// Where the scan artifact lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub url: String,
    /// `None` waits for the artifact indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            url: SNAPSHOT_PATH.to_string(),
            timeout: Some(Duration::from_secs(SNAPSHOT_TIMEOUT_SECS)),
        }
    }
}

/// Reasons the snapshot could not be loaded. The display text is an operator
/// diagnostic and is never shown on the dashboard itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("snapshot request failed: {0}")]
    Transport(String),
    #[error("snapshot request returned HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("snapshot is malformed: {0}")]
    Parse(String),
    #[error("snapshot request timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
}

impl LoadError {
    /// The scan has not published an artifact yet.
    pub fn is_missing_artifact(&self) -> bool {
        matches!(self, LoadError::Status { status, .. } if *status == HTTP_NOT_FOUND)
    }
}

/// Accept 2xx responses only.
pub fn check_status(status: u16, status_text: &str) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Status {
            status,
            status_text: status_text.to_string(),
        })
    }
}

pub fn parse_snapshot(body: &str) -> Result<Snapshot, LoadError> {
    serde_json::from_str(body).map_err(|err| LoadError::Parse(err.to_string()))
}

/// Retrieve the artifact once. This is the only suspension point of the dashboard.
pub async fn fetch_snapshot(config: &LoaderConfig) -> Result<Snapshot, LoadError> {
    let request = request_snapshot(&config.url);
    let Some(limit) = config.timeout else {
        return request.await;
    };

    let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
    race_timer(request, TimeoutFuture::new(millis), limit).await
}

/// Resolve with the request outcome, or `TimedOut` if `timer` fires first.
async fn race_timer<R, T>(request: R, timer: T, limit: Duration) -> Result<Snapshot, LoadError>
where
    R: Future<Output = Result<Snapshot, LoadError>>,
    T: Future<Output = ()>,
{
    futures::pin_mut!(request, timer);

    match future::select(request, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(LoadError::TimedOut(limit)),
    }
}

/// Fetch the artifact and report any failure to the operator console.
pub async fn load_snapshot(config: &LoaderConfig) -> Result<Snapshot, LoadError> {
    log::debug!("loading scan snapshot from {}", config.url);
    let outcome = fetch_snapshot(config).await;
    report_outcome(&config.url, &outcome);
    outcome
}

async fn request_snapshot(url: &str) -> Result<Snapshot, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| LoadError::Transport(err.to_string()))?;
    check_status(response.status(), &response.status_text())?;

    let body = response
        .text()
        .await
        .map_err(|err| LoadError::Transport(err.to_string()))?;
    parse_snapshot(&body)
}

fn report_outcome(url: &str, outcome: &Result<Snapshot, LoadError>) {
    match outcome {
        Ok(snapshot) => {
            log::info!(
                "loaded scan snapshot with {} entries from {url}",
                snapshot.results.len()
            );
            let duplicates = snapshot.duplicate_tickers();
            if !duplicates.is_empty() {
                log::warn!("snapshot lists duplicate tickers: {}", duplicates.join(", "));
            }
        }
        Err(err) if err.is_missing_artifact() => {
            log::warn!("no scan snapshot published at {url} yet: {err}");
        }
        Err(err) => log::error!("error loading {url}: {err}"),
    }
}
