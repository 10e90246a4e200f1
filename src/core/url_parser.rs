use regex::Regex;
use std::sync::LazyLock;

use crate::models::media::ParsedReference;

static VIDEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tiktok\.com/@([^/]+)/video/(\d+)").unwrap());

/// Extracts `(handle, media id)` from a TikTok video share URL.
///
/// Returns `None` for anything that is not shaped like
/// `tiktok.com/@<handle>/video/<digits>`.
pub fn parse(raw_url: &str) -> Option<ParsedReference> {
    let caps = VIDEO_RE.captures(raw_url)?;
    let handle = caps.get(1)?.as_str();
    let media_id = caps.get(2)?.as_str();

    let handle = clean_handle(handle);
    if handle.is_empty() {
        return None;
    }

    Some(ParsedReference::new(handle, media_id))
}

fn clean_handle(handle: &str) -> &str {
    let handle = handle.split('?').next().unwrap_or(handle);
    handle.split('&').next().unwrap_or(handle)
}

/// True for `tiktok.com` and any of its subdomains.
pub fn is_tiktok_host(raw_url: &str) -> bool {
    if let Ok(parsed) = url::Url::parse(raw_url.trim()) {
        if let Some(host) = parsed.host_str() {
            let host = host.to_lowercase();
            return host == "tiktok.com" || host.ends_with(".tiktok.com");
        }
    }
    false
}
