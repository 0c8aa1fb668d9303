//! Plain-text output formats for the host surface.
//!
//! The engine owns its textual output contract: the clipboard join, the
//! export template, the reverse parser for that template, and the export
//! filename. The host surface only moves the bytes.

use chrono::Utc;

use crate::types::link::{ExtractedLink, Platform};

/// Placeholder written for links without a title.
const UNKNOWN_TITLE: &str = "Unknown";

/// Placeholder written for links without context.
const NO_CONTEXT: &str = "N/A";

/// Line terminating each record.
const RECORD_END: &str = "---";

/// Newline-joined URL list for the clipboard.
pub fn clipboard_text(links: &[ExtractedLink]) -> String {
    links
        .iter()
        .map(|link| link.url.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render links in the export template.
///
/// One record per link, records separated by a blank line:
///
/// ```text
/// Platform: YouTube
/// Title: Unknown
/// URL: https://youtu.be/dQw4w9WgXcQ
/// Context: seen in the weekly digest
/// ---
/// ```
pub fn format_report(links: &[ExtractedLink]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                "Platform: {}\nTitle: {}\nURL: {}\nContext: {}\n{}",
                link.platform,
                link.title.as_deref().unwrap_or(UNKNOWN_TITLE),
                link.url,
                link.context.as_deref().unwrap_or(NO_CONTEXT),
                RECORD_END
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Parse text in the export template back into links.
///
/// Lenient by design: unknown lines are skipped, blank-line spacing between
/// records does not matter, and a trailing record without its terminator
/// still counts. Placeholder values map back to `None`.
pub fn parse_report(text: &str) -> Vec<ExtractedLink> {
    let mut links = Vec::new();
    let mut current = RecordFields::default();

    for line in text.lines() {
        let line = line.trim();
        if line == RECORD_END {
            if let Some(link) = std::mem::take(&mut current).build() {
                links.push(link);
            }
        } else if let Some(value) = line.strip_prefix("Platform:") {
            current.platform = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Title:") {
            current.title = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("URL:") {
            current.url = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Context:") {
            current.context = Some(value.trim().to_string());
        }
    }

    if let Some(link) = current.build() {
        links.push(link);
    }

    links
}

/// Timestamped filename for a report export.
pub fn report_filename() -> String {
    format!("video-links-{}.txt", Utc::now().format("%Y%m%d-%H%M%S"))
}

#[derive(Default)]
struct RecordFields {
    platform: Option<String>,
    title: Option<String>,
    url: Option<String>,
    context: Option<String>,
}

impl RecordFields {
    /// A record needs at least a URL; placeholders fold back to `None`.
    fn build(self) -> Option<ExtractedLink> {
        let url = self.url?;
        Some(ExtractedLink {
            url,
            platform: Platform::from_label(self.platform.as_deref().unwrap_or_default()),
            context: self.context.filter(|c| c != NO_CONTEXT),
            title: self.title.filter(|t| t != UNKNOWN_TITLE),
        })
    }
}
