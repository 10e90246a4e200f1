pub use tikgrab_core::providers::traits;
pub use tikgrab_core::providers::{url_param, HttpMethod, ProviderDescriptor};

pub mod json_api;

use url::Url;

use crate::core::resolver::ProviderChain;
use json_api::JsonApiProvider;

pub const TIKMATE_ENDPOINT: &str = "https://www.tikwm.com/api/";
pub const TIKDOWN_ENDPOINT: &str = "https://api.tikdown.org/api/download";

/// Known providers in priority order.
pub fn default_descriptors() -> anyhow::Result<Vec<ProviderDescriptor>> {
    Ok(vec![
        ProviderDescriptor::new(
            "TikMate",
            Url::parse(TIKMATE_ENDPOINT)?,
            HttpMethod::Post,
            url_param,
        ),
        ProviderDescriptor::new(
            "TikDown",
            Url::parse(TIKDOWN_ENDPOINT)?,
            HttpMethod::Get,
            url_param,
        ),
    ])
}

pub fn chain_from_descriptors(
    client: &reqwest::Client,
    descriptors: Vec<ProviderDescriptor>,
) -> ProviderChain {
    let mut chain = ProviderChain::new();
    for descriptor in descriptors {
        chain.register(Box::new(JsonApiProvider::new(client.clone(), descriptor)));
    }
    chain
}

pub fn default_chain(client: &reqwest::Client) -> anyhow::Result<ProviderChain> {
    Ok(chain_from_descriptors(client, default_descriptors()?))
}
