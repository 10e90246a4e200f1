use anyhow::anyhow;
use async_trait::async_trait;

use crate::models::media::ResolutionResult;
use crate::providers::traits::MediaResolver;
use crate::providers::{HttpMethod, ProviderDescriptor};

/// JSON paths probed for a media URL, in order.
const CANDIDATE_PATHS: &[&str] = &["/data/play", "/data/hdplay", "/video/url", "/url"];

/// Provider backed by a download API that answers with JSON.
pub struct JsonApiProvider {
    client: reqwest::Client,
    descriptor: ProviderDescriptor,
}

impl JsonApiProvider {
    pub fn new(client: reqwest::Client, descriptor: ProviderDescriptor) -> Self {
        Self { client, descriptor }
    }

    async fn fetch_json(&self, source_url: &str) -> anyhow::Result<serde_json::Value> {
        let params = self.descriptor.request_params(source_url);
        let endpoint = self.descriptor.endpoint.clone();

        let request = match self.descriptor.method {
            HttpMethod::Get => self.client.get(endpoint).query(&params),
            HttpMethod::Post => self.client.post(endpoint).form(&params),
        };

        tracing::debug!(
            "{}: {:?} {}",
            self.descriptor.name,
            self.descriptor.method,
            self.descriptor.endpoint
        );

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} returned HTTP {}", self.descriptor.name, status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..floor_char_boundary(&body, 200)];
            tracing::debug!("{}: non-JSON body: {}", self.descriptor.name, preview);
            anyhow!("{} returned a non-JSON body: {}", self.descriptor.name, e)
        })
    }
}

#[async_trait]
impl MediaResolver for JsonApiProvider {
    fn name(&self) -> &str {
        &self.descriptor.name
    }

    async fn resolve(&self, source_url: &str) -> anyhow::Result<ResolutionResult> {
        let json = self.fetch_json(source_url).await?;

        let candidate = extract_candidate(&json).ok_or_else(|| {
            let keys: Vec<&String> = json
                .as_object()
                .map(|o| o.keys().collect())
                .unwrap_or_default();
            tracing::debug!("{}: no media url, top-level keys: {:?}", self.name(), keys);
            anyhow!("{}: no media url in response", self.name())
        })?;

        ResolutionResult::from_candidate(candidate, self.name())
            .ok_or_else(|| anyhow!("{}: unusable media url {:?}", self.name(), candidate))
    }
}

/// First present, non-empty string among the known response shapes.
pub fn extract_candidate(json: &serde_json::Value) -> Option<&str> {
    CANDIDATE_PATHS
        .iter()
        .filter_map(|path| json.pointer(path))
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut idx = max;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
