use std::path::{Path, PathBuf};

use url::Url;

use crate::core::events::{FlowStage, ProgressEmitter};
use crate::core::media_buffer::MediaBuffer;
use crate::core::resolver::ProviderChain;
use crate::core::{direct_downloader, filename, http_client, url_parser};
use crate::error::DownloadError;
use crate::models::media::{ParsedReference, ResolutionResult};
use crate::models::settings::{AppSettings, DownloadSettings};
use crate::providers;

/// What a successful download hands to the caller.
///
/// Dropping it releases the temporary buffer.
#[derive(Debug)]
pub struct DownloadOutcome {
    pub reference: ParsedReference,
    pub buffer: MediaBuffer,
    pub byte_len: u64,
    pub provider_name: String,
    pub media_url: Url,
}

pub struct Downloader {
    chain: ProviderChain,
    media_client: reqwest::Client,
    download: DownloadSettings,
}

impl Downloader {
    pub fn new(chain: ProviderChain, media_client: reqwest::Client, download: DownloadSettings) -> Self {
        Self {
            chain,
            media_client,
            download,
        }
    }

    /// Wires the built-in providers and both HTTP clients from settings.
    pub fn from_settings(settings: &AppSettings) -> anyhow::Result<Self> {
        let api_client = http_client::api_client(&settings.network, &settings.proxy)?;
        let media_client = http_client::media_client(&settings.network, &settings.proxy)?;
        let chain = providers::default_chain(&api_client)?;
        Ok(Self::new(chain, media_client, settings.download.clone()))
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.chain.provider_names()
    }

    pub async fn resolve(&self, raw_url: &str) -> Result<ResolutionResult, DownloadError> {
        self.chain
            .resolve(raw_url)
            .await
            .ok_or_else(|| DownloadError::ResolutionExhausted {
                url: raw_url.to_string(),
                attempted: self.provider_names().iter().map(|s| s.to_string()).collect(),
            })
    }

    /// Parse, resolve and fetch, in that order, stopping at the first failure.
    pub async fn download(
        &self,
        raw_url: &str,
        emitter: &dyn ProgressEmitter,
    ) -> Result<DownloadOutcome, DownloadError> {
        emitter.emit_stage(&FlowStage::Parsing);
        let reference = parse_reference(raw_url)?;
        tracing::info!(
            "@{} video {} -> {}",
            reference.owner_handle,
            reference.media_id,
            reference.filename()
        );

        emitter.emit_stage(&FlowStage::Resolving);
        let resolution = self.resolve(raw_url.trim()).await?;
        emitter.emit_stage(&FlowStage::Resolved {
            provider: resolution.provider_name.clone(),
        });

        emitter.emit_stage(&FlowStage::Fetching);
        let buffer = direct_downloader::fetch_to_temp(
            &self.media_client,
            &resolution.media_url,
            &self.download,
            emitter,
        )
        .await
        .map_err(|cause| DownloadError::Fetch { cause })?;

        let byte_len = buffer.len();
        emitter.emit_stage(&FlowStage::Complete { bytes: byte_len });

        Ok(DownloadOutcome {
            reference,
            buffer,
            byte_len,
            provider_name: resolution.provider_name,
            media_url: resolution.media_url,
        })
    }
}

pub fn parse_reference(raw_url: &str) -> Result<ParsedReference, DownloadError> {
    url_parser::parse(raw_url.trim()).ok_or_else(|| DownloadError::InvalidUrl {
        url: raw_url.to_string(),
    })
}

/// Copies the buffered media into `output_dir` and releases the buffer,
/// whether or not the copy worked.
pub async fn save(outcome: DownloadOutcome, output_dir: &Path) -> Result<PathBuf, DownloadError> {
    let DownloadOutcome {
        reference, buffer, ..
    } = outcome;
    let dest = filename::output_path(output_dir, &reference);
    let result = buffer.persist_to(&dest).await;

    let temp_path = buffer.path().to_path_buf();
    if let Err(e) = buffer.close() {
        tracing::warn!("could not remove temp file {}: {}", temp_path.display(), e);
    }

    match result {
        Ok(bytes) => {
            tracing::info!("saved {} bytes to {}", bytes, dest.display());
            Ok(dest)
        }
        Err(source) => Err(DownloadError::Save { path: dest, source }),
    }
}
