//! The extraction coordinator.
//!
//! One engine owns one inference backend and at most one run at a time.
//! Callers pick a mode per request; the engine validates input, dispatches
//! to the matching extractor, and keeps the latest completed report.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ai::{self, InferenceService, OpenAIInference};
use crate::error::{ExtractError, Result};
use crate::scan;
use crate::types::{
    config::EngineConfig,
    run::{ExtractionMode, ExtractionRequest, RunReport},
};

/// Coordinates extraction runs over a single inference backend.
///
/// A second `run` while one is in flight fails fast with
/// [`ExtractError::Busy`]; nothing queues and nothing cancels, so a stale
/// in-flight response can never race a newer request. The engine keeps only
/// the latest completed report and replaces it wholesale on every run.
pub struct Engine<S: InferenceService> {
    service: S,
    config: EngineConfig,
    latest: Mutex<Option<RunReport>>,
}

impl<S: InferenceService> Engine<S> {
    /// Create an engine over `service` with default configuration.
    pub fn new(service: S) -> Self {
        Self::with_config(service, EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(service: S, config: EngineConfig) -> Self {
        Self {
            service,
            config,
            latest: Mutex::new(None),
        }
    }

    /// Execute one extraction run.
    ///
    /// Empty or whitespace-only input is rejected before either extractor
    /// is invoked. The deterministic path scans the text exactly as
    /// supplied; the AI path truncates it before transmission.
    pub async fn run(&self, request: ExtractionRequest) -> Result<RunReport> {
        if request.text.trim().is_empty() {
            return Err(ExtractError::InputEmpty);
        }

        let mut slot = self.latest.try_lock().map_err(|_| ExtractError::Busy)?;

        let run_id = Uuid::new_v4();
        info!(
            run_id = %run_id,
            mode = %request.mode,
            bytes = request.text.len(),
            "extraction run started"
        );

        let links = match request.mode {
            ExtractionMode::Deterministic => {
                let links = scan::scan_text(&request.text);
                tokio::time::sleep(Duration::from_millis(self.config.scan_delay_ms)).await;
                links
            }
            ExtractionMode::Ai => {
                match ai::extract_with_service(&self.service, &request.text, &self.config.model)
                    .await
                {
                    Ok(links) => links,
                    Err(err) => {
                        warn!(run_id = %run_id, error = %err, "extraction run failed");
                        return Err(err);
                    }
                }
            }
        };

        let report = RunReport::with_run_id(run_id, request.mode, links);
        info!(
            run_id = %report.run_id,
            matches = report.links.len(),
            outcome = ?report.outcome,
            "extraction run complete"
        );

        *slot = Some(report.clone());
        Ok(report)
    }

    /// The most recent completed report, if any.
    pub async fn latest(&self) -> Option<RunReport> {
        self.latest.lock().await.clone()
    }
}

impl Engine<OpenAIInference> {
    /// Engine over the real OpenAI backend, key from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(OpenAIInference::from_env()?))
    }
}
