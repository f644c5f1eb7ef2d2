//! # Pipeline
//! List channel items, extract each one in order, and collect what succeeded.
//!
//! Listing errors end the run. Extraction errors are logged with the item URL
//! and the item is skipped. Publishing (optional) stops at the first failed write.

use crate::cms::{find_venue_by_name, DraftEvent, DraftPublisher, VenueLookup};
use crate::error::Result;
use crate::exhibition::Exhibition;
use crate::extract::ExhibitionExtractor;
use crate::ingest::{self, types::ChannelSource};

/// Outcome of one pass over the channel; stands in for the ingest counters.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Successfully extracted records, in channel order.
    pub exhibitions: Vec<Exhibition>,
    /// Items with a URL that were attempted.
    pub listed: usize,
    pub failed: usize,
}

/// Run listing + extraction over `slug`.
pub async fn run(
    source: &dyn ChannelSource,
    extractor: &ExhibitionExtractor,
    slug: &str,
    limit: Option<u32>,
) -> Result<RunReport> {
    run_with_default(source, extractor, slug, limit, ingest::DEFAULT_PER_PAGE).await
}

pub async fn run_with_default(
    source: &dyn ChannelSource,
    extractor: &ExhibitionExtractor,
    slug: &str,
    limit: Option<u32>,
    per_page_default: u32,
) -> Result<RunReport> {
    let items =
        ingest::fetch_channel_items_with_default(source, slug, limit, per_page_default).await?;

    let mut report = RunReport {
        listed: items.len(),
        ..RunReport::default()
    };

    for (idx, item) in items.iter().enumerate() {
        // Items without a URL never survive listing.
        let Some(url) = item.url() else { continue };
        tracing::info!(
            item = idx + 1,
            total = report.listed,
            url,
            title = item.title.as_deref(),
            "extracting"
        );

        match extractor.extract(url).await {
            Ok(ex) => report.exhibitions.push(ex),
            // Every extraction error is confined to its item; only the log level differs.
            Err(e) if e.is_item_level() => {
                report.failed += 1;
                tracing::warn!(error = %e, url, item_id = item.id, "error processing item");
            }
            Err(e) => {
                report.failed += 1;
                tracing::error!(
                    error = %e,
                    url,
                    item_id = item.id,
                    "unexpected error processing item"
                );
            }
        }
    }

    tracing::info!(
        extracted = report.exhibitions.len(),
        failed = report.failed,
        "extraction finished"
    );
    Ok(report)
}

/// Resolve each record's venue and create a draft for it, in order.
/// The first write failure is returned; drafts created before it stay created.
pub async fn publish_all(
    exhibitions: &[Exhibition],
    lookup: &dyn VenueLookup,
    publisher: &DraftPublisher<'_>,
) -> Result<Vec<DraftEvent>> {
    let mut drafts = Vec::with_capacity(exhibitions.len());
    for ex in exhibitions {
        let venue = find_venue_by_name(lookup, &ex.venue_name).await;
        if venue.is_none() && !ex.venue_name.trim().is_empty() {
            tracing::info!(venue = %ex.venue_name, "venue not found, using placeholder");
        }
        let draft = publisher.publish(ex, venue.as_ref()).await?;
        drafts.push(draft);
    }
    Ok(drafts)
}
