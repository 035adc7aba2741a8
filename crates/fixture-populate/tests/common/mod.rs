//! In-memory transports for scheduler tests.

#![allow(dead_code)]

use marketplace_client::{Transport, TransportError, WriteMethod};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// One recorded `create` call.
#[derive(Debug, Clone)]
pub struct Call {
    pub method: WriteMethod,
    pub path: String,
    pub payload: Value,
    pub succeeded: bool,
}

/// Records every call; optionally fails some of them.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    counter: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    /// Fail every Nth create call (1-based), if set
    fail_every: Option<usize>,
    /// Fail every call whose path starts with this prefix
    fail_prefix: Option<String>,
    /// Reply to listing creation with a server-assigned ID
    assign_listing_ids: bool,
    /// Reply to version creation with a relabelled copy whose supported sets
    /// fall outside the vocabulary
    normalize_versions: bool,
    delay: Option<Duration>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_every(n: usize) -> Self {
        Self {
            fail_every: Some(n),
            ..Self::default()
        }
    }

    pub fn failing_path(prefix: &str) -> Self {
        Self {
            fail_prefix: Some(prefix.to_string()),
            ..Self::default()
        }
    }

    pub fn assigning_listing_ids() -> Self {
        Self {
            assign_listing_ids: true,
            ..Self::default()
        }
    }

    pub fn normalizing_versions() -> Self {
        Self {
            normalize_versions: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, prefix: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.path.starts_with(prefix))
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn create(
        &self,
        method: WriteMethod,
        path: &str,
        payload: &Value,
    ) -> Result<Value, TransportError> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let fails = self.fail_every.is_some_and(|every| n % every == 0)
            || self
                .fail_prefix
                .as_deref()
                .is_some_and(|prefix| path.starts_with(prefix));

        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            payload: payload.clone(),
            succeeded: !fails,
        });
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if fails {
            return Err(TransportError::Status {
                path: path.to_string(),
                status: 503,
            });
        }

        if self.assign_listing_ids && path == "/listings/" {
            let mut confirmed = payload.clone();
            confirmed["id"] = json!(format!("server-{n}"));
            return Ok(confirmed);
        }
        if self.normalize_versions && path == "/listing_versions" {
            let mut confirmed = payload.clone();
            let label = payload["version"].as_str().unwrap_or_default();
            confirmed["version"] = json!(format!("v-{label}"));
            confirmed["min_java_version"] = json!("8");
            confirmed["eclipse_versions"] = json!([]);
            confirmed["platforms"] = json!(["solaris"]);
            return Ok(confirmed);
        }
        Ok(Value::Null)
    }

    async fn read(&self, _path: &str) -> Result<Vec<Value>, TransportError> {
        Ok(Vec::new())
    }
}
