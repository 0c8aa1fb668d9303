//! Link types: platforms and extracted links.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hosting platform of a video link.
///
/// Serialized as its display label, so `"YouTube"` on the wire both ways.
/// Labels outside the known set survive as [`Platform::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    YouTube,
    Vimeo,
    Twitch,
    TikTok,
    Instagram,
    DailyMotion,
    /// A raw video file (mp4, webm, m3u8, ...) rather than a hosted page.
    DirectLink,
    /// Any platform outside the known set, carrying its reported label.
    Other(String),
}

impl Platform {
    /// Map a free-form label onto the known platform set.
    ///
    /// Matching is case-insensitive and trims whitespace. Unknown labels are
    /// preserved as [`Platform::Other`]; an empty label becomes
    /// `Other("Unknown")` so it still renders.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "youtube" => Platform::YouTube,
            "vimeo" => Platform::Vimeo,
            "twitch" => Platform::Twitch,
            "tiktok" => Platform::TikTok,
            "instagram" => Platform::Instagram,
            "dailymotion" => Platform::DailyMotion,
            "directlink" | "direct link" | "direct" | "direct file" => Platform::DirectLink,
            "" => Platform::Other("Unknown".to_string()),
            _ => Platform::Other(trimmed.to_string()),
        }
    }

    /// Canonical display label.
    pub fn label(&self) -> &str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Vimeo => "Vimeo",
            Platform::Twitch => "Twitch",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::DailyMotion => "DailyMotion",
            Platform::DirectLink => "DirectLink",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Platform {
    fn from(label: String) -> Self {
        Platform::from_label(&label)
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.label().to_string()
    }
}

/// One video link found in the input text.
///
/// A plain value with no identity beyond its fields. Result lists are built
/// fresh per run and replaced wholesale by the next run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedLink {
    /// The matched or reported locator, verbatim (never re-encoded).
    pub url: String,

    /// Hosting platform classification.
    pub platform: Platform,

    /// Surrounding source text, whitespace-collapsed to a single line.
    pub context: Option<String>,

    /// Video title, only ever populated by the AI pass.
    pub title: Option<String>,
}

impl ExtractedLink {
    /// Create a link with no context or title.
    pub fn new(url: impl Into<String>, platform: Platform) -> Self {
        Self {
            url: url.into(),
            platform,
            context: None,
            title: None,
        }
    }

    /// Attach a context snippet.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attach a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known_platforms() {
        assert_eq!(Platform::from_label("YouTube"), Platform::YouTube);
        assert_eq!(Platform::from_label("youtube"), Platform::YouTube);
        assert_eq!(Platform::from_label("  VIMEO "), Platform::Vimeo);
        assert_eq!(Platform::from_label("TikTok"), Platform::TikTok);
        assert_eq!(Platform::from_label("dailymotion"), Platform::DailyMotion);
        assert_eq!(Platform::from_label("direct link"), Platform::DirectLink);
        assert_eq!(Platform::from_label("DirectLink"), Platform::DirectLink);
    }

    #[test]
    fn test_from_label_unknown_preserved() {
        assert_eq!(
            Platform::from_label("PeerTube"),
            Platform::Other("PeerTube".to_string())
        );
    }

    #[test]
    fn test_from_label_empty_renders() {
        let platform = Platform::from_label("   ");
        assert_eq!(platform.label(), "Unknown");
    }

    #[test]
    fn test_platform_serde_round_trip() {
        let json = serde_json::to_string(&Platform::YouTube).unwrap();
        assert_eq!(json, "\"YouTube\"");

        let parsed: Platform = serde_json::from_str("\"vimeo\"").unwrap();
        assert_eq!(parsed, Platform::Vimeo);

        let other: Platform = serde_json::from_str("\"PeerTube\"").unwrap();
        assert_eq!(other, Platform::Other("PeerTube".to_string()));
    }

    #[test]
    fn test_link_builder() {
        let link = ExtractedLink::new("https://youtu.be/dQw4w9WgXcQ", Platform::YouTube)
            .with_context("watch this https://youtu.be/dQw4w9WgXcQ now")
            .with_title("Never Gonna Give You Up");

        assert_eq!(link.url, "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(link.platform, Platform::YouTube);
        assert!(link.context.is_some());
        assert_eq!(link.title.as_deref(), Some("Never Gonna Give You Up"));
    }
}
