use crate::{config::ShortenerConfig, Error, Result};
use serde::Deserialize;

/// Client for the Bitly v4 shorten API. Credentials come from an explicit
/// [`ShortenerConfig`] rather than ambient environment state.
#[derive(Clone)]
pub struct Shortener {
    client: reqwest::Client,
    config: ShortenerConfig,
}

#[derive(Deserialize)]
struct ShortenResponse {
    link: String,
}

impl Shortener {
    pub fn new(config: ShortenerConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    /// Shorten a URL, returning the short link.
    pub async fn shorten(&self, long_url: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.config.api_base)
            .bearer_auth(&self.config.token)
            .json(&serde_json::json!({ "long_url": long_url }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ShortenFailed(format!("HTTP {}", status)));
        }

        let body: ShortenResponse = response.json().await?;
        Ok(body.link)
    }
}
