//! Run-level types: requests, modes, outcomes and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::link::ExtractedLink;

/// Which extraction strategy a run uses.
///
/// The two modes are mutually exclusive per run; the caller picks one on
/// every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionMode {
    /// Pattern-rule scan of the raw text. Offline and exact.
    Deterministic,
    /// One structured call to an inference backend. Also catches
    /// obfuscated references the patterns cannot see.
    Ai,
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::Deterministic => f.write_str("deterministic"),
            ExtractionMode::Ai => f.write_str("ai"),
        }
    }
}

/// One extraction request from the host surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Raw input text, any length. The AI path truncates before transmission.
    pub text: String,

    /// Strategy for this run.
    pub mode: ExtractionMode,
}

impl ExtractionRequest {
    /// Create a request.
    pub fn new(text: impl Into<String>, mode: ExtractionMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    /// Shorthand for a deterministic run.
    pub fn deterministic(text: impl Into<String>) -> Self {
        Self::new(text, ExtractionMode::Deterministic)
    }

    /// Shorthand for an AI run.
    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(text, ExtractionMode::Ai)
    }
}

/// Terminal state of a completed run.
///
/// Finding nothing is informational, not a failure; failures surface as
/// errors from `run` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// At least one link was found.
    Matched,
    /// The run completed cleanly with zero matches.
    NoMatches,
}

/// The completed result of one extraction run.
///
/// Each run produces a fresh report; the engine keeps only the latest one
/// and never merges link lists across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique id for this run, also used in log correlation.
    pub run_id: Uuid,

    /// Strategy that produced the links.
    pub mode: ExtractionMode,

    /// Links in extraction order.
    pub links: Vec<ExtractedLink>,

    /// Terminal state, derived from the link list.
    pub outcome: RunOutcome,

    /// When the run finished.
    pub completed_at: DateTime<Utc>,
}

impl RunReport {
    /// Assemble a report, deriving the outcome from the link list.
    pub fn new(mode: ExtractionMode, links: Vec<ExtractedLink>) -> Self {
        Self::with_run_id(Uuid::new_v4(), mode, links)
    }

    /// Assemble a report under a caller-chosen run id.
    pub fn with_run_id(run_id: Uuid, mode: ExtractionMode, links: Vec<ExtractedLink>) -> Self {
        let outcome = if links.is_empty() {
            RunOutcome::NoMatches
        } else {
            RunOutcome::Matched
        };
        Self {
            run_id,
            mode,
            links,
            outcome,
            completed_at: Utc::now(),
        }
    }

    /// True when the run found nothing.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::link::Platform;

    #[test]
    fn test_outcome_derived_from_links() {
        let empty = RunReport::new(ExtractionMode::Deterministic, vec![]);
        assert_eq!(empty.outcome, RunOutcome::NoMatches);
        assert!(empty.is_empty());

        let found = RunReport::new(
            ExtractionMode::Ai,
            vec![ExtractedLink::new("https://vimeo.com/76979871", Platform::Vimeo)],
        );
        assert_eq!(found.outcome, RunOutcome::Matched);
        assert!(!found.is_empty());
    }

    #[test]
    fn test_request_shorthands() {
        assert_eq!(
            ExtractionRequest::deterministic("text").mode,
            ExtractionMode::Deterministic
        );
        assert_eq!(ExtractionRequest::ai("text").mode, ExtractionMode::Ai);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ExtractionMode::Deterministic.to_string(), "deterministic");
        assert_eq!(ExtractionMode::Ai.to_string(), "ai");
    }
}
