use std::path::PathBuf;

use thiserror::Error;

/// Everything that can end a download request.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The input does not look like `tiktok.com/@<handle>/video/<id>`.
    #[error("invalid TikTok video URL: {url:?}")]
    InvalidUrl { url: String },

    /// Every provider failed or answered with an unknown payload.
    #[error("no provider could resolve {url} (tried: {})", .attempted.join(", "))]
    ResolutionExhausted { url: String, attempted: Vec<String> },

    /// The media CDN request failed.
    #[error("failed to download media: {cause:#}")]
    Fetch {
        #[source]
        cause: anyhow::Error,
    },

    /// Copying the buffered media to its destination failed.
    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Setup(#[from] anyhow::Error),
}

impl DownloadError {
    /// Message shown to the person at the terminal.
    pub fn user_message(&self) -> String {
        match self {
            DownloadError::InvalidUrl { url } if url.trim().is_empty() => {
                "Please enter a TikTok URL.".to_string()
            }
            DownloadError::InvalidUrl { .. } => {
                "Invalid URL! Make sure it is a TikTok video link such as \
                 https://www.tiktok.com/@user/video/1234567890123456789"
                    .to_string()
            }
            DownloadError::ResolutionExhausted { .. } => "Could not find the video!\n\
                 \n\
                 Possible causes:\n\
                 1. The video may be private or removed\n\
                 2. TikTok may be blocked in your region\n\
                 3. The download APIs may be temporarily unavailable\n\
                 \n\
                 What to try:\n\
                 - Check that the video is public\n\
                 - Try another video\n\
                 - Try again later"
                .to_string(),
            DownloadError::Fetch { cause } => {
                format!("Error downloading the video: {:#}", cause)
            }
            DownloadError::Save { path, source } => {
                format!("Could not save {}: {}", path.display(), source)
            }
            DownloadError::Setup(e) => format!("Setup failed: {:#}", e),
        }
    }
}
