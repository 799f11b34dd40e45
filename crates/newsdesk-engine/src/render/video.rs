//! Video source URL normalization.
//!
//! Authors paste whatever URL the provider shows them; players need the
//! embeddable form. Recognized shapes:
//!
//! - `youtube.com/watch?v=ID` and `youtu.be/ID` → `https://www.youtube.com/embed/ID`
//! - `vimeo.com/ID` → `https://player.vimeo.com/video/ID`
//!
//! Anything else is assumed to be embeddable already and passes through.

use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    youtube_watch: Regex,
    youtube_short: Regex,
    vimeo: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        youtube_watch: Regex::new(
            r"^(?:https?://)?(?:www\.|m\.)?youtube\.com/watch\?(?:[^#]*&)?v=([A-Za-z0-9_-]+)",
        )
        .expect("Invalid YouTube watch regex"),
        youtube_short: Regex::new(r"^(?:https?://)?youtu\.be/([A-Za-z0-9_-]+)")
            .expect("Invalid YouTube short-link regex"),
        vimeo: Regex::new(r"^(?:https?://)?(?:www\.)?vimeo\.com/(\d+)")
            .expect("Invalid Vimeo regex"),
    })
}

/// The embeddable form of `url`.
pub fn embed_url(url: &str) -> String {
    let url = url.trim();
    let patterns = patterns();

    let youtube_id = patterns
        .youtube_watch
        .captures(url)
        .or_else(|| patterns.youtube_short.captures(url))
        .and_then(|c| c.get(1));
    if let Some(id) = youtube_id {
        return format!("https://www.youtube.com/embed/{}", id.as_str());
    }

    if let Some(id) = patterns.vimeo.captures(url).and_then(|c| c.get(1)) {
        return format!("https://player.vimeo.com/video/{}", id.as_str());
    }

    url.to_string()
}
