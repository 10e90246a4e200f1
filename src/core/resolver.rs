use crate::models::media::ResolutionResult;
use crate::providers::traits::MediaResolver;

/// Ordered list of providers tried one after another until one succeeds.
pub struct ProviderChain {
    providers: Vec<Box<dyn MediaResolver>>,
}

impl ProviderChain {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Appends a provider at the lowest priority.
    pub fn register(&mut self, provider: Box<dyn MediaResolver>) {
        self.providers.push(provider);
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Asks each provider in turn; a failing provider is logged and skipped.
    ///
    /// Returns `None` once every provider has failed.
    pub async fn resolve(&self, source_url: &str) -> Option<ResolutionResult> {
        for provider in &self.providers {
            match provider.resolve(source_url).await {
                Ok(result) => {
                    tracing::info!(
                        "resolved via {}: {}",
                        result.provider_name,
                        result.media_url
                    );
                    return Some(result);
                }
                Err(e) => {
                    tracing::debug!("provider {} failed: {:#}", provider.name(), e);
                }
            }
        }

        tracing::info!(
            "all {} providers failed for {}",
            self.providers.len(),
            source_url
        );
        None
    }
}

impl Default for ProviderChain {
    fn default() -> Self {
        Self::new()
    }
}
