//! Remote publish check.
//!
//! The checker owns a tokio runtime and a reqwest client. Each check
//! spawns one GET against the configured endpoint and reports the
//! outcome back over an mpsc channel; the UI loop drains the channel
//! on its tick. The HTTP status line is deliberately not inspected:
//! only the body is interpreted. No timeout is configured either, the
//! call runs until the network stack resolves or rejects it.

use chrono::{DateTime, Utc};
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::runtime::Runtime;

use crate::verdict;

/// Result of one completed publish check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The endpoint yielded a boolean.
    Verdict(bool),
    /// A body arrived but no strategy could extract a boolean.
    Indeterminate,
    /// The request never produced a usable body.
    Transport(String),
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub outcome: CheckOutcome,
    pub checked_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum CheckerError {
    Runtime(String),
    Client(String),
}

impl std::fmt::Display for CheckerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckerError::Runtime(e) => write!(f, "Runtime error: {}", e),
            CheckerError::Client(e) => write!(f, "HTTP client error: {}", e),
        }
    }
}

impl std::error::Error for CheckerError {}

pub struct Checker {
    runtime: Runtime,
    client: reqwest::Client,
    endpoint: String,
    result_tx: Sender<CheckResult>,
    result_rx: Receiver<CheckResult>,
}

impl Checker {
    pub fn new(endpoint: String) -> Result<Self, CheckerError> {
        let runtime = Runtime::new().map_err(|e| CheckerError::Runtime(e.to_string()))?;
        // No .timeout(): the check has no deadline of its own.
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CheckerError::Client(e.to_string()))?;
        let (result_tx, result_rx) = mpsc::channel();

        Ok(Self {
            runtime,
            client,
            endpoint,
            result_tx,
            result_rx,
        })
    }

    /// Spawn one check. The caller guards against overlapping calls;
    /// the checker itself never queues or retries.
    pub fn start_check(&self) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let tx = self.result_tx.clone();

        self.runtime.spawn(async move {
            let outcome = fetch_verdict(&client, &endpoint).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(CheckResult {
                outcome,
                checked_at: Utc::now(),
            });
        });
    }

    /// Non-blocking poll for a finished check.
    pub fn try_poll(&self) -> Option<CheckResult> {
        self.result_rx.try_recv().ok()
    }
}

async fn fetch_verdict(client: &reqwest::Client, endpoint: &str) -> CheckOutcome {
    let response = match client.get(endpoint).send().await {
        Ok(r) => r,
        Err(e) => return CheckOutcome::Transport(e.to_string()),
    };

    let body = match response.text().await {
        Ok(b) => b,
        Err(e) => return CheckOutcome::Transport(e.to_string()),
    };

    match verdict::sniff(&body) {
        Some(flag) => CheckOutcome::Verdict(flag),
        None => CheckOutcome::Indeterminate,
    }
}
