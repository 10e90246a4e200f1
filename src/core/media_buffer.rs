use std::path::Path;

use tempfile::NamedTempFile;

/// Fetched media parked in a temporary file.
///
/// The file is removed when the buffer is dropped, so every path out of a
/// download releases it.
#[derive(Debug)]
pub struct MediaBuffer {
    file: NamedTempFile,
    len: u64,
}

impl MediaBuffer {
    pub(crate) fn new(file: NamedTempFile, len: u64) -> Self {
        Self { file, len }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub async fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.path()).await
    }

    /// Copies the buffered bytes to `dest`, creating parent directories.
    ///
    /// The temporary file itself stays owned by the buffer.
    pub async fn persist_to(&self, dest: &Path) -> std::io::Result<u64> {
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::copy(self.path(), dest).await
    }

    /// Deletes the temporary file now, reporting failures that `Drop` would
    /// swallow.
    pub fn close(self) -> std::io::Result<()> {
        self.file.close()
    }
}
