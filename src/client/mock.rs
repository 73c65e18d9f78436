//! Mock transport for testing
//!
//! Serves canned JSON responses and records every request so tests can
//! assert on paths and outbound payloads without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::Transport;
use crate::error::{ApiError, Result};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Map<String, Value>>,
}

/// Transport double serving queued responses in order.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Value>>,
    requests: Mutex<Vec<CapturedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to serve.
    pub fn with_response(self, response: Value) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record_and_respond(
        &self,
        method: &str,
        path: &str,
        body: Option<&Map<String, Value>>,
    ) -> Result<Value> {
        self.requests.lock().unwrap().push(CapturedRequest {
            method: method.to_string(),
            path: path.to_string(),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ApiError::NotFound(format!("no canned response for {}", path)).into())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<Value> {
        self.record_and_respond("GET", path, None)
    }

    async fn post(&self, path: &str, body: &Map<String, Value>) -> Result<Value> {
        self.record_and_respond("POST", path, Some(body))
    }
}
