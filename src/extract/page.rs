// src/extract/page.rs
use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ImportError, Result};

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Raw body of `url`. Non-2xx responses are `ImportError::Fetch`.
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// Plain GET with the shared client; no streaming, no charset negotiation
/// beyond what `reqwest` does by default.
pub struct HttpPageFetcher {
    http: Client,
}

impl HttpPageFetcher {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ImportError::Fetch {
                url: url.to_string(),
                status: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ImportError::Fetch {
                url: url.to_string(),
                status: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_u16().to_string()),
            });
        }

        resp.text().await.map_err(|e| ImportError::Fetch {
            url: url.to_string(),
            status: e.to_string(),
        })
    }
}
