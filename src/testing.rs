//! Testing utilities including a mock inference backend.
//!
//! Useful for exercising engine logic without real network calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

use crate::ai::{InferenceRequest, InferenceService};
use crate::error::{ExtractError, Result};
use crate::types::link::ExtractedLink;

/// A mock inference backend with canned responses.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the engine owns another.
#[derive(Default, Clone)]
pub struct MockInference {
    /// Raw payload served for every call
    payload: Arc<RwLock<Option<String>>>,

    /// Error message served instead of a payload
    failure: Arc<RwLock<Option<String>>>,

    /// Optional gate each call parks on before responding
    gate: Arc<RwLock<Option<Arc<Notify>>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockCall>>>,
}

/// Record of a call made to the mock backend.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub model: String,
    pub user_len: usize,
}

impl MockInference {
    /// Create a mock that answers every call with an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this raw payload for every call.
    pub fn with_payload(self, payload: impl Into<String>) -> Self {
        *self.payload.write().unwrap() = Some(payload.into());
        self
    }

    /// Serve a schema-shaped payload built from `links`.
    pub fn with_links(self, links: &[ExtractedLink]) -> Self {
        let videos: Vec<serde_json::Value> = links
            .iter()
            .map(|link| {
                serde_json::json!({
                    "url": link.url,
                    "platform": link.platform.label(),
                    "context": link.context,
                    "title": link.title,
                })
            })
            .collect();
        let payload = serde_json::json!({ "videos": videos }).to_string();
        self.with_payload(payload)
    }

    /// Fail every call with a service error carrying `message`.
    pub fn failing_with(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Park each call on `gate` until the test notifies it.
    pub fn with_gate(self, gate: Arc<Notify>) -> Self {
        *self.gate.write().unwrap() = Some(gate);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl InferenceService for MockInference {
    async fn generate_structured(&self, request: &InferenceRequest) -> Result<String> {
        self.calls.write().unwrap().push(MockCall {
            model: request.model.clone(),
            user_len: request.user.len(),
        });

        let gate = self.gate.read().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(ExtractError::Service(message.into()));
        }

        Ok(self
            .payload
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| r#"{"videos": []}"#.to_string()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
