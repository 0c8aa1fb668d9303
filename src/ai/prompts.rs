//! Prompts for the AI extraction pass.

/// System instructions for the link extraction call.
pub const EXTRACT_LINKS_PROMPT: &str = r#"You find video links in raw text.

Rules:
1. Extract every URL that points to video content: YouTube, Vimeo, Twitch, TikTok, Instagram, DailyMotion, and raw video files (mp4, webm, ogg, mov, m4v, m3u8).
2. Include obfuscated references: spelled-out domains ("youtube dot com slash watch"), defanged URLs (hxxps, bracketed dots), and bare video ids next to a named platform. Reconstruct each one as a real URL.
3. Normalize every result to a canonical https URL.
4. Classify the hosting platform. Use "DirectLink" for raw video files.
5. Copy a short snippet of the surrounding text as context. Include the title when the text states one; otherwise leave it null.
6. Only report links present in the text. Never invent URLs.

Return JSON matching the response schema."#;

/// User prompt template for the link extraction call.
pub const EXTRACT_LINKS_INPUT: &str = r#"Find all video links in this text:

{text}"#;

/// Fill the user prompt with the (already truncated) input text.
pub fn format_extract_links_prompt(text: &str) -> String {
    EXTRACT_LINKS_INPUT.replace("{text}", text)
}
