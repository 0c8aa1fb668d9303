//! Ordered platform detection rules.
//!
//! Each rule pairs a [`Platform`] with a compiled pattern. Declaration order
//! is load-bearing: when two rules match the same literal text, the earliest
//! rule claims it, so specific grammars come first and the generic direct
//! file rule comes last. The `regex` engine runs in linear time, so hostile
//! input cannot stall a scan.
//!
//! All patterns accept URLs with or without a scheme and a `www` prefix, and
//! match hosts case-insensitively.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::link::Platform;

lazy_static! {
    // watch, youtu.be and embed forms, 11-char video id
    static ref YOUTUBE_REGEX: Regex = Regex::new(
        r#"(?i)\b(?:https?://)?(?:(?:www\.|m\.)?youtube\.com/(?:watch\?(?:[^\s"'<>]*&)?v=|embed/)|youtu\.be/)[A-Za-z0-9_-]{11}(?:[?&#][^\s"'<>]*)?"#
    ).unwrap();

    // numeric video ids, plain and player forms
    static ref VIMEO_REGEX: Regex = Regex::new(
        r#"(?i)\b(?:https?://)?(?:player\.vimeo\.com/video/|(?:www\.)?vimeo\.com/)[0-9]+(?:[?&#/][^\s"'<>]*)?"#
    ).unwrap();

    // channel pages; the channel segment itself is lowercase only
    static ref TWITCH_REGEX: Regex = Regex::new(
        r#"\b(?i:(?:https?://)?(?:www\.)?twitch\.tv)/[a-z0-9_]+\b(?:\?[^\s"'<>]*)?"#
    ).unwrap();

    // @user/video/<digits> paths and the vm/vt short-redirect hosts
    static ref TIKTOK_REGEX: Regex = Regex::new(
        r#"(?i)\b(?:https?://)?(?:(?:www\.)?tiktok\.com/@[A-Za-z0-9_.]+/video/[0-9]+|(?:vm|vt)\.tiktok\.com/[A-Za-z0-9]+)(?:[?&#/][^\s"'<>]*)?"#
    ).unwrap();

    // /p/, /reel/ and /reels/ post paths
    static ref INSTAGRAM_REGEX: Regex = Regex::new(
        r#"(?i)\b(?:https?://)?(?:www\.)?instagram\.com/(?:p|reels?)/[A-Za-z0-9_-]+(?:[?&#/][^\s"'<>]*)?"#
    ).unwrap();

    // full video pages and the dai.ly short form
    static ref DAILYMOTION_REGEX: Regex = Regex::new(
        r#"(?i)\b(?:https?://)?(?:(?:www\.)?dailymotion\.com/video/|dai\.ly/)[A-Za-z0-9]+(?:[?&#/_][^\s"'<>]*)?"#
    ).unwrap();

    // raw file URLs by extension; schemeless forms need a dotted host and a path
    static ref DIRECT_FILE_REGEX: Regex = Regex::new(
        r#"(?i)\b(?:https?://[^\s"'<>/]+|[A-Za-z0-9][\w.-]*\.[A-Za-z]{2,})/[^\s"'<>?#]*\.(?:mp4|webm|ogg|mov|m4v|m3u8)(?:[?#][^\s"'<>]*)?"#
    ).unwrap();

    static ref RULES: Vec<(Platform, &'static Regex)> = vec![
        (Platform::YouTube, &YOUTUBE_REGEX),
        (Platform::Vimeo, &VIMEO_REGEX),
        (Platform::Twitch, &TWITCH_REGEX),
        (Platform::TikTok, &TIKTOK_REGEX),
        (Platform::Instagram, &INSTAGRAM_REGEX),
        (Platform::DailyMotion, &DAILYMOTION_REGEX),
        (Platform::DirectLink, &DIRECT_FILE_REGEX),
    ];
}

/// The ordered rule set.
///
/// The scanner walks rules front to back; the first rule to match a literal
/// owns it. [`Platform::DirectLink`] sits last because its grammar is the
/// most generic.
pub fn rules() -> &'static [(Platform, &'static Regex)] {
    &RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(regex: &Regex, text: &str) -> Vec<String> {
        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    #[test]
    fn test_youtube_watch_forms() {
        let found = matches(
            &YOUTUBE_REGEX,
            "see https://www.youtube.com/watch?v=dQw4w9WgXcQ and youtu.be/dQw4w9WgXcQ?t=42",
        );
        assert_eq!(
            found,
            vec![
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                "youtu.be/dQw4w9WgXcQ?t=42",
            ]
        );
    }

    #[test]
    fn test_youtube_embed_and_mobile() {
        assert_eq!(
            matches(&YOUTUBE_REGEX, "https://www.youtube.com/embed/dQw4w9WgXcQ"),
            vec!["https://www.youtube.com/embed/dQw4w9WgXcQ"]
        );
        // v does not have to be the first query parameter
        assert_eq!(
            matches(&YOUTUBE_REGEX, "m.youtube.com/watch?si=Xy9&v=dQw4w9WgXcQ"),
            vec!["m.youtube.com/watch?si=Xy9&v=dQw4w9WgXcQ"]
        );
    }

    #[test]
    fn test_youtube_keeps_trailing_params() {
        assert_eq!(
            matches(&YOUTUBE_REGEX, "youtube.com/watch?v=dQw4w9WgXcQ&feature=share"),
            vec!["youtube.com/watch?v=dQw4w9WgXcQ&feature=share"]
        );
    }

    #[test]
    fn test_youtube_host_is_case_insensitive() {
        assert_eq!(
            matches(&YOUTUBE_REGEX, "HTTPS://WWW.YOUTUBE.COM/WATCH?V=dQw4w9WgXcQ").len(),
            1
        );
    }

    #[test]
    fn test_youtube_rejects_short_ids() {
        assert!(matches(&YOUTUBE_REGEX, "youtube.com/watch?v=short").is_empty());
        assert!(matches(&YOUTUBE_REGEX, "youtu.be/abc").is_empty());
    }

    #[test]
    fn test_vimeo_forms() {
        assert_eq!(
            matches(&VIMEO_REGEX, "https://vimeo.com/76979871"),
            vec!["https://vimeo.com/76979871"]
        );
        assert_eq!(
            matches(&VIMEO_REGEX, "player.vimeo.com/video/76979871"),
            vec!["player.vimeo.com/video/76979871"]
        );
    }

    #[test]
    fn test_vimeo_requires_numeric_id() {
        assert!(matches(&VIMEO_REGEX, "vimeo.com/channels/staffpicks").is_empty());
    }

    #[test]
    fn test_twitch_channel() {
        assert_eq!(
            matches(&TWITCH_REGEX, "https://www.twitch.tv/pokimane"),
            vec!["https://www.twitch.tv/pokimane"]
        );
        // host matching ignores case
        assert_eq!(matches(&TWITCH_REGEX, "Twitch.TV/pokimane").len(), 1);
    }

    #[test]
    fn test_twitch_channel_stays_lowercase() {
        assert!(matches(&TWITCH_REGEX, "twitch.tv/Pokimane").is_empty());
        assert!(matches(&TWITCH_REGEX, "twitch.tv/POKIMANE").is_empty());
    }

    #[test]
    fn test_tiktok_forms() {
        assert_eq!(
            matches(
                &TIKTOK_REGEX,
                "https://www.tiktok.com/@khaby.lame/video/7137423965982686469"
            ),
            vec!["https://www.tiktok.com/@khaby.lame/video/7137423965982686469"]
        );
        assert_eq!(
            matches(&TIKTOK_REGEX, "vm.tiktok.com/ZMFCompCh/ and vt.tiktok.com/ZSabc12"),
            vec!["vm.tiktok.com/ZMFCompCh/", "vt.tiktok.com/ZSabc12"]
        );
    }

    #[test]
    fn test_tiktok_rejects_profile_links() {
        assert!(matches(&TIKTOK_REGEX, "tiktok.com/@khaby.lame").is_empty());
    }

    #[test]
    fn test_instagram_forms() {
        assert_eq!(
            matches(&INSTAGRAM_REGEX, "https://www.instagram.com/reel/CxYzAbC1234/"),
            vec!["https://www.instagram.com/reel/CxYzAbC1234/"]
        );
        assert_eq!(
            matches(&INSTAGRAM_REGEX, "instagram.com/p/Cx-Yz_AbC12 instagram.com/reels/Cq0aaa111bb"),
            vec!["instagram.com/p/Cx-Yz_AbC12", "instagram.com/reels/Cq0aaa111bb"]
        );
    }

    #[test]
    fn test_instagram_rejects_profiles() {
        assert!(matches(&INSTAGRAM_REGEX, "instagram.com/natgeo").is_empty());
    }

    #[test]
    fn test_dailymotion_forms() {
        assert_eq!(
            matches(&DAILYMOTION_REGEX, "https://www.dailymotion.com/video/x8k2j3l"),
            vec!["https://www.dailymotion.com/video/x8k2j3l"]
        );
        assert_eq!(matches(&DAILYMOTION_REGEX, "dai.ly/x8k2j3l"), vec!["dai.ly/x8k2j3l"]);
    }

    #[test]
    fn test_direct_file_forms() {
        assert_eq!(
            matches(
                &DIRECT_FILE_REGEX,
                "https://cdn.example.com/clips/intro.mp4?sig=abc123"
            ),
            vec!["https://cdn.example.com/clips/intro.mp4?sig=abc123"]
        );
        assert_eq!(
            matches(&DIRECT_FILE_REGEX, "stream from media.site.io/live/master.m3u8 today"),
            vec!["media.site.io/live/master.m3u8"]
        );
    }

    #[test]
    fn test_direct_file_needs_host_and_path() {
        // a bare filename in prose is not a link
        assert!(matches(&DIRECT_FILE_REGEX, "saved as intro.mp4 locally").is_empty());
        assert!(matches(&DIRECT_FILE_REGEX, "see example.com/page.html").is_empty());
    }

    #[test]
    fn test_rule_order() {
        let rules = rules();
        assert_eq!(rules.first().map(|(p, _)| p), Some(&Platform::YouTube));
        assert_eq!(rules.last().map(|(p, _)| p), Some(&Platform::DirectLink));
        assert_eq!(rules.len(), 7);
    }
}
