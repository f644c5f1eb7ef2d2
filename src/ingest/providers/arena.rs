// src/ingest/providers/arena.rs
use async_trait::async_trait;
use reqwest::Client;

use crate::config::app::{require_secret, ArenaConfig, ENV_ARENA_TOKEN};
use crate::error::{ImportError, Result};
use crate::ingest::types::{ChannelContents, ChannelSource, FeedItem};

/// Are.na v2 REST client. Holds the access token checked at construction.
pub struct ArenaClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ArenaClient {
    pub fn new(cfg: &ArenaConfig, http: Client) -> Result<Self> {
        let token = require_secret(cfg.token.as_deref(), ENV_ARENA_TOKEN)?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl ChannelSource for ArenaClient {
    async fn channel_contents(&self, slug: &str, page: u32, per: u32) -> Result<Vec<FeedItem>> {
        let url = format!("{}/v2/channels/{}/contents", self.base_url, slug);
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("page", page), ("per", per)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ImportError::Feed {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: ChannelContents = resp.json().await?;
        tracing::debug!(channel = slug, count = envelope.contents.len(), "arena page fetched");
        Ok(envelope.contents)
    }

    fn name(&self) -> &'static str {
        "arena"
    }
}
