use anyhow::{bail, Context, Result};
use std::time::Duration;
use tracing::info;

use crate::config::ScrapingConfig;

/// Source of raw page markup.
#[allow(async_fn_in_trait)]
pub trait HtmlFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

pub struct WebHtmlFetcher {
    client: reqwest::Client,
}

impl WebHtmlFetcher {
    pub fn new(config: &ScrapingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl HtmlFetcher for WebHtmlFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            bail!("Failed to fetch {}: HTTP {}", url, response.status());
        }

        let text = response.text().await?;
        info!("Got {} bytes from {}", text.len(), url);
        Ok(text)
    }
}
