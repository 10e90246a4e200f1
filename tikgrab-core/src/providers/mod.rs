pub mod traits;

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Static description of one resolution API.
///
/// `params` turns the user's share URL into the request fields; they go into
/// the query string for `Get` and into a form-encoded body for `Post`.
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    pub name: String,
    pub endpoint: Url,
    pub method: HttpMethod,
    pub params: fn(&str) -> Vec<(&'static str, String)>,
}

impl ProviderDescriptor {
    pub fn new(
        name: impl Into<String>,
        endpoint: Url,
        method: HttpMethod,
        params: fn(&str) -> Vec<(&'static str, String)>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint,
            method,
            params,
        }
    }

    pub fn request_params(&self, source_url: &str) -> Vec<(&'static str, String)> {
        (self.params)(source_url)
    }
}

/// The `url=<share url>` field both known providers expect.
pub fn url_param(source_url: &str) -> Vec<(&'static str, String)> {
    vec![("url", source_url.to_string())]
}
