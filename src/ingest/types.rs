// src/ingest/types.rs
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One block from an Are.na channel. Only the fields the pipeline reads are typed;
/// everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedItem {
    pub id: u64,
    pub title: Option<String>,
    pub source: Option<FeedSource>,
    pub image: Option<FeedImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedSource {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedImage {
    pub original: Option<ImageVersion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImageVersion {
    pub url: Option<String>,
}

impl FeedItem {
    /// `source.url` if present, else `image.original.url`. Empty strings count as absent.
    pub fn url(&self) -> Option<&str> {
        let primary = self.source.as_ref().and_then(|s| s.url.as_deref());
        let fallback = self
            .image
            .as_ref()
            .and_then(|i| i.original.as_ref())
            .and_then(|o| o.url.as_deref());
        primary
            .filter(|u| !u.trim().is_empty())
            .or_else(|| fallback.filter(|u| !u.trim().is_empty()))
    }
}

/// Envelope of `GET /v2/channels/{slug}/contents`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChannelContents {
    pub contents: Vec<FeedItem>,
}

#[async_trait::async_trait]
pub trait ChannelSource: Send + Sync {
    /// One page of a channel's contents, unfiltered and in channel order.
    async fn channel_contents(&self, slug: &str, page: u32, per: u32) -> Result<Vec<FeedItem>>;
    fn name(&self) -> &'static str;
}
