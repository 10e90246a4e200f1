use async_trait::async_trait;

use crate::models::media::ResolutionResult;

/// One step of the resolution chain: turns a share URL into a direct media URL.
///
/// Any error means "this provider could not help"; the chain moves on.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    fn name(&self) -> &str;
    async fn resolve(&self, source_url: &str) -> anyhow::Result<ResolutionResult>;
}
