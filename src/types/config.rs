//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the extraction engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Chat model used for the AI pass. Default: gpt-4o.
    pub model: String,

    /// Pause before a deterministic run returns, in milliseconds.
    ///
    /// Keeps rapid re-runs from flickering the host surface. Default: 400.
    /// Set to 0 in tests.
    pub scan_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            scan_delay_ms: 400,
        }
    }
}

impl EngineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the deterministic-run delay.
    pub fn with_scan_delay_ms(mut self, ms: u64) -> Self {
        self.scan_delay_ms = ms;
        self
    }
}
