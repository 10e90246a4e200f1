use serde::{Deserialize, Serialize};
use url::Url;

/// Identity of a single TikTok video, taken from its share URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReference {
    pub owner_handle: String,
    pub media_id: String,
}

impl ParsedReference {
    pub fn new(owner_handle: impl Into<String>, media_id: impl Into<String>) -> Self {
        Self {
            owner_handle: owner_handle.into(),
            media_id: media_id.into(),
        }
    }

    /// Suggested save name, always `<handle>_<id>.mp4`.
    pub fn filename(&self) -> String {
        format!("{}_{}.mp4", self.owner_handle, self.media_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub media_url: Url,
    pub provider_name: String,
}

impl ResolutionResult {
    /// Builds a result from a raw candidate returned by a provider.
    ///
    /// Returns `None` unless the normalized candidate is an absolute
    /// `http`/`https` URL.
    pub fn from_candidate(candidate: &str, provider_name: &str) -> Option<Self> {
        let media_url = normalize_media_url(candidate)?;
        Some(Self {
            media_url,
            provider_name: provider_name.to_string(),
        })
    }
}

/// Normalizes the media URL forms providers hand back.
///
/// `//cdn/x.mp4` gains `https:`, a bare `cdn/x.mp4` gains `https://`, and a
/// value that already has a scheme is kept as long as it is http(s).
pub fn normalize_media_url(candidate: &str) -> Option<Url> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    let absolute = if candidate.starts_with("//") {
        format!("https:{}", candidate)
    } else if has_scheme(candidate) {
        candidate.to_string()
    } else {
        format!("https://{}", candidate)
    };

    let parsed = Url::parse(&absolute).ok()?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => Some(parsed),
        _ => None,
    }
}

/// True when the value opens with `scheme://`. A `://` later on, such as
/// inside a query string, does not count.
fn has_scheme(candidate: &str) -> bool {
    let Some((scheme, _)) = candidate.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
