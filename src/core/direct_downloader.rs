use std::path::Path;

use anyhow::anyhow;
use futures::StreamExt;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use crate::core::events::ProgressEmitter;
use crate::core::media_buffer::MediaBuffer;
use crate::fs_paths::{AppPaths, DesktopPaths};
use crate::models::settings::DownloadSettings;

/// Streams `media_url` into a fresh temporary file.
///
/// On failure the partial file is deleted before the error is returned.
pub async fn fetch_to_temp(
    client: &reqwest::Client,
    media_url: &url::Url,
    download: &DownloadSettings,
    emitter: &dyn ProgressEmitter,
) -> anyhow::Result<MediaBuffer> {
    let temp = create_temp_file(download.temp_dir.as_deref())?;
    tracing::debug!("[fetch] buffering {} into {}", media_url, temp.path().display());

    match stream_into(client, media_url, &temp, download.chunk_size, emitter).await {
        Ok(len) => Ok(MediaBuffer::new(temp, len)),
        Err(e) => {
            let path = temp.path().to_path_buf();
            if let Err(close_err) = temp.close() {
                tracing::warn!(
                    "[fetch] could not remove partial file {}: {}",
                    path.display(),
                    close_err
                );
            }
            Err(e)
        }
    }
}

fn create_temp_file(dir: Option<&Path>) -> anyhow::Result<NamedTempFile> {
    let dir = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| DesktopPaths.temp_dir());
    let file = tempfile::Builder::new()
        .prefix("tikgrab-")
        .suffix(".mp4")
        .tempfile_in(&dir)
        .map_err(|e| anyhow!("Could not create temp file in {}: {}", dir.display(), e))?;
    Ok(file)
}

async fn stream_into(
    client: &reqwest::Client,
    media_url: &url::Url,
    temp: &NamedTempFile,
    chunk_size: usize,
    emitter: &dyn ProgressEmitter,
) -> anyhow::Result<u64> {
    let chunk_size = chunk_size.max(1);

    let response = client
        .get(media_url.clone())
        .send()
        .await
        .map_err(|e| anyhow!("Request to {} failed: {}", media_url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("HTTP {} while downloading {}", status, media_url));
    }

    if let Some(ct) = response.headers().get(reqwest::header::CONTENT_TYPE) {
        if let Ok(ct_str) = ct.to_str() {
            if ct_str.contains("text/html") {
                return Err(anyhow!(
                    "Server returned HTML instead of media, the link may have expired"
                ));
            }
        }
    }

    let total_size = response.content_length();
    let mut file = tokio::fs::File::from_std(temp.as_file().try_clone()?);
    let mut written = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(next) = stream.next().await {
        let data = next.map_err(|e| anyhow!("Download stream error: {}", e))?;
        for piece in data.chunks(chunk_size) {
            file.write_all(piece)
                .await
                .map_err(|e| anyhow!("Write error (disk full?): {}", e))?;
            written += piece.len() as u64;
        }
        emitter.emit_bytes(written, total_size);
    }

    file.flush().await?;

    if let Some(expected) = total_size {
        if expected > 0 && written != expected {
            return Err(anyhow!(
                "Wrong size: expected {} bytes, received {}",
                expected,
                written
            ));
        }
    }

    let on_disk = temp.as_file().metadata()?.len();
    if on_disk != written {
        return Err(anyhow!(
            "Buffer size mismatch: wrote {} bytes, file holds {}",
            written,
            on_disk
        ));
    }

    Ok(written)
}
