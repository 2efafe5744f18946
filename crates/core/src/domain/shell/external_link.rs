use std::sync::LazyLock;

use regex::Regex;

/// Destinations the embedded UI may hand to the system browser. A URL matches
/// an entry when it is equal to it or continues it with a `/`.
pub const EXTERNAL_ALLOW_LIST: &[&str] = &[
    "https://frame.sh",
    "https://docs.frame.sh",
    "https://feedback.frame.sh",
    "https://frame.canny.io",
    "https://discord.gg/UH7NGqY",
    "https://github.com/floating/frame/issues",
    "https://github.com/floating/frame/blob/master/LICENSE",
    "https://github.com/frame-labs/frame/issues",
    "https://chrome.google.com/webstore/detail/frame-alpha/ldcoohedfbjoobcadoglnnmmfbdlmmhf",
    "https://addons.mozilla.org/en-US/firefox/addon/frame-extension",
];

static RELEASE_TAG_PAGES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"^https://github\.com/floating/frame/releases/tag/[^/?#\s]+$")
            .expect("static release tag pattern"),
        Regex::new(r"^https://github\.com/frame-labs/frame/releases/tag/[^/?#\s]+$")
            .expect("static release tag pattern"),
    ]
});

fn matches_allow_list(url: &str) -> bool {
    EXTERNAL_ALLOW_LIST.iter().any(|entry| {
        url == *entry
            || url
                .strip_prefix(entry)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

fn is_release_tag_page(url: &str) -> bool {
    RELEASE_TAG_PAGES.iter().any(|pattern| pattern.is_match(url))
}

pub fn is_allowed_external(url: &str) -> bool {
    matches_allow_list(url) || is_release_tag_page(url)
}
