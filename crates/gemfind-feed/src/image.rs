//! Image URL resolution with a tiered hotlink fallback.
//!
//! Feed image cells are free-form: bare `www.` links, Google Drive "file
//! view" share links, and hosts that refuse hotlinked requests all show up
//! in real spreadsheets. [`resolve_image_url`] turns such a reference into
//! a URL that can actually be rendered, or the empty string when nothing
//! usable can be made of it.
//!
//! At display time the consumer applies a two-tier runtime fallback: when
//! the resolved URL fails to load, retry once through [`proxied`]; when
//! that also fails, fall back to a static placeholder and stop. That chain
//! is the renderer's job — the functions here stay pure.

use std::sync::OnceLock;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;

/// Fixed rendition requested from the image proxy.
const PROXY_WIDTH: u32 = 800;
const PROXY_HEIGHT: u32 = 500;

/// Hosts that reject hotlinked image requests or serve an interstitial
/// HTML page instead of image bytes.
const HOTLINK_HOSTILE_HOSTS: &[&str] = &[
    "drive.google.com",
    "googleusercontent.com",
    "dropbox.com",
    "photos.app.goo.gl",
    "instagram.com",
    "cdninstagram.com",
];

/// Normalize a free-form image reference into a usable URL.
///
/// Returns the empty string when the reference cannot yield a usable
/// image. Steps, in order: scheme fixup for `www.` references, rejection
/// of anything that is not `http(s)` or a `data:` URI, Drive file-view
/// rewrite to the direct-view form, and a proxy rewrite for hotlink-hostile
/// hosts.
#[must_use]
pub fn resolve_image_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let url = if raw.starts_with("www.") {
        format!("https://{raw}")
    } else {
        raw.to_string()
    };

    // Inline data URIs are already self-contained; pass them through.
    if url.starts_with("data:") {
        return url;
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return String::new();
    }

    let direct = rewrite_drive_view_link(&url);
    if host_of(&direct).is_some_and(|host| is_hotlink_hostile(&host)) {
        proxied(&direct)
    } else {
        direct
    }
}

/// Route a URL through the public weserv image proxy, requesting a fixed
/// width/height with cover fit. Tier one of the render-time fallback.
#[must_use]
pub fn proxied(url: &str) -> String {
    let encoded = utf8_percent_encode(url, NON_ALPHANUMERIC);
    format!(
        "https://images.weserv.nl/?url={encoded}&w={PROXY_WIDTH}&h={PROXY_HEIGHT}&fit=cover"
    )
}

/// Rewrite Google Drive "file view" share links to the direct-view form.
///
/// Recognizes the `/file/d/<id>` path segment and the `id=<id>` query
/// parameter. Anything else passes through unchanged.
fn rewrite_drive_view_link(url: &str) -> String {
    static FILE_SEGMENT: OnceLock<Regex> = OnceLock::new();
    static ID_PARAM: OnceLock<Regex> = OnceLock::new();

    if !host_of(url).is_some_and(|host| host == "drive.google.com") {
        return url.to_string();
    }

    let file_segment = FILE_SEGMENT
        .get_or_init(|| Regex::new(r"/file/d/([A-Za-z0-9_-]+)").expect("valid drive path regex"));
    let id_param = ID_PARAM
        .get_or_init(|| Regex::new(r"[?&]id=([A-Za-z0-9_-]+)").expect("valid drive id regex"));

    let id = file_segment
        .captures(url)
        .or_else(|| id_param.captures(url))
        .and_then(|cap| cap.get(1));

    match id {
        Some(id) => format!("https://drive.google.com/uc?export=view&id={}", id.as_str()),
        None => url.to_string(),
    }
}

/// Extract the lowercased host from an `http(s)` URL without a full parser.
fn host_of(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.split('@').next_back()?;
    let host = host.split(':').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}

fn is_hotlink_hostile(host: &str) -> bool {
    HOTLINK_HOSTILE_HOSTS
        .iter()
        .any(|hostile| host == *hostile || host.ends_with(&format!(".{hostile}")))
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
