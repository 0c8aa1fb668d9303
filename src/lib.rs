//! Video Link Extraction Engine
//!
//! Finds video URLs in arbitrary unstructured text (pasted markup, chat
//! logs, documents), classifies each by hosting platform, and can route the
//! text through an AI pass that also recovers obfuscated references.
//!
//! Two extraction modes, chosen per run:
//!
//! - **Deterministic**: an ordered table of platform patterns scans the raw
//!   text. Offline, exact, linear-time.
//! - **AI**: one structured-output call against an inference backend, with
//!   a strict response schema and typed failure on any contract breach.
//!
//! The engine is the core of a host application that supplies raw text and
//! renders the result list; entry widgets, file handling and clipboard
//! plumbing stay on the host side. This crate still owns the output
//! contract: the clipboard join, the export template and its parser, and
//! the export filename.
//!
//! # Usage
//!
//! ```rust,ignore
//! use linksift::{Engine, ExtractionRequest};
//!
//! let engine = Engine::from_env()?;
//! let report = engine
//!     .run(ExtractionRequest::deterministic("notes with https://youtu.be/dQw4w9WgXcQ"))
//!     .await?;
//! for link in &report.links {
//!     println!("{}: {}", link.platform, link.url);
//! }
//! ```
//!
//! # Modules
//!
//! - [`rules`] - Ordered platform detection rules
//! - [`scan`] - Deterministic pattern scan with context windows
//! - [`ai`] - AI pass: prompts, strict schemas, the inference seam
//! - [`engine`] - Run coordination, busy guard, latest report
//! - [`report`] - Clipboard and export formatting
//! - [`testing`] - Mock inference backend for tests

pub mod ai;
pub mod engine;
pub mod error;
pub mod report;
pub mod rules;
pub mod scan;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use ai::{AILinkItem, AILinkResponse, InferenceRequest, InferenceService, OpenAIInference};
pub use engine::Engine;
pub use error::{ExtractError, Result};
pub use report::{clipboard_text, format_report, parse_report, report_filename};
pub use scan::scan_text;
pub use types::{
    config::EngineConfig,
    link::{ExtractedLink, Platform},
    run::{ExtractionMode, ExtractionRequest, RunOutcome, RunReport},
};

// Re-export testing utilities
pub use testing::MockInference;
