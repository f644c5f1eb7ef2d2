// src/ingest/mod.rs
pub mod providers;
pub mod types;

use crate::error::Result;
use crate::ingest::types::{ChannelSource, FeedItem};

/// Page size when the caller gives no limit.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Keep only items that carry a resolvable URL, preserving channel order.
/// Returns (kept, dropped_count).
pub fn retain_linked(items: Vec<FeedItem>) -> (Vec<FeedItem>, usize) {
    let total = items.len();
    let kept: Vec<FeedItem> = items
        .into_iter()
        .filter(|it| {
            let linked = it.url().is_some();
            if !linked {
                tracing::debug!(item_id = it.id, "dropping channel item without url");
            }
            linked
        })
        .collect();
    let dropped = total - kept.len();
    (kept, dropped)
}

/// List the first page of `slug` (page size `limit`, or [`DEFAULT_PER_PAGE`])
/// and drop items without a URL. Listing errors propagate; filtering never fails.
pub async fn fetch_channel_items(
    source: &dyn ChannelSource,
    slug: &str,
    limit: Option<u32>,
) -> Result<Vec<FeedItem>> {
    fetch_channel_items_with_default(source, slug, limit, DEFAULT_PER_PAGE).await
}

/// Same as [`fetch_channel_items`] with a configurable default page size.
pub async fn fetch_channel_items_with_default(
    source: &dyn ChannelSource,
    slug: &str,
    limit: Option<u32>,
    per_page_default: u32,
) -> Result<Vec<FeedItem>> {
    let per = limit.unwrap_or(per_page_default);
    let raw = source.channel_contents(slug, 1, per).await?;
    let (kept, dropped) = retain_linked(raw);
    tracing::info!(
        provider = source.name(),
        channel = slug,
        kept = kept.len(),
        dropped,
        "channel items listed"
    );
    Ok(kept)
}
