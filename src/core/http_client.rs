use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};

use crate::models::settings::{NetworkSettings, ProxySettings};

/// Client used to talk to resolution providers.
pub fn api_client(
    network: &NetworkSettings,
    proxy: &ProxySettings,
) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&network.user_agent)?);
    headers.insert(ACCEPT, HeaderValue::from_str(&network.accept)?);

    let builder = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(network.resolve_timeout());

    Ok(apply_proxy(builder, proxy)?.build()?)
}

/// Client used to pull media bytes off the CDN.
///
/// CDNs check the referrer on their own, so this one carries `Referer`
/// and a longer timeout.
pub fn media_client(
    network: &NetworkSettings,
    proxy: &ProxySettings,
) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&network.user_agent)?);
    headers.insert(REFERER, HeaderValue::from_str(&network.referer)?);

    let builder = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(network.fetch_timeout());

    Ok(apply_proxy(builder, proxy)?.build()?)
}

/// Routes the builder through the configured proxy. An enabled proxy that
/// does not parse is an error.
pub fn apply_proxy(
    builder: reqwest::ClientBuilder,
    proxy: &ProxySettings,
) -> anyhow::Result<reqwest::ClientBuilder> {
    let Some(proxy_url) = proxy.proxy_url() else {
        return Ok(builder);
    };
    let p = reqwest::Proxy::all(&proxy_url)
        .map_err(|e| anyhow::anyhow!("Invalid proxy {}:{}: {}", proxy.host, proxy.port, e))?;
    Ok(builder.proxy(p))
}
