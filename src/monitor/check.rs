//! Single-URL checks and round summaries.

use std::fmt;
use std::time::{Duration, Instant};

/// Whether a check got an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Up,
    Down(String),
}

/// Result of probing one URL once.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub url: String,
    /// HTTP status, when a response arrived.
    pub status: Option<u16>,
    pub response_time: Duration,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn is_up(&self) -> bool {
        self.outcome == CheckOutcome::Up
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.response_time.as_millis();
        match (&self.outcome, self.status) {
            (CheckOutcome::Up, Some(status)) => write!(f, "UP {} status={} {}ms", self.url, status, ms),
            (CheckOutcome::Up, None) => write!(f, "UP {} {}ms", self.url, ms),
            (CheckOutcome::Down(error), _) => write!(f, "DOWN {} error={} {}ms", self.url, error, ms),
        }
    }
}

/// GET `url` with `client`; the client's own timeout bounds the call.
pub async fn check_url(client: &reqwest::Client, url: &str) -> CheckResult {
    let start = Instant::now();
    let result = client.get(url).send().await;
    let response_time = start.elapsed();

    match result {
        Ok(response) => CheckResult {
            url: url.to_string(),
            status: Some(response.status().as_u16()),
            response_time,
            outcome: CheckOutcome::Up,
        },
        Err(e) => {
            let error = if e.is_timeout() {
                "Timeout".to_string()
            } else {
                e.to_string()
            };
            CheckResult {
                url: url.to_string(),
                status: None,
                response_time,
                outcome: CheckOutcome::Down(error),
            }
        }
    }
}

/// Up/down counts for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundSummary {
    pub up: usize,
    pub down: usize,
}

impl RoundSummary {
    pub fn from_results(results: &[CheckResult]) -> Self {
        let up = results.iter().filter(|r| r.is_up()).count();
        Self {
            up,
            down: results.len() - up,
        }
    }
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} up, {} down", self.up, self.down)
    }
}
