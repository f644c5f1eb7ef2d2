//! Draft event construction and persistence.
//!
//! Unlike venue resolution, a failed write is returned to the caller.

use chrono::{NaiveDate, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;

use crate::cms::types::{event_type, DocumentSink, DraftEvent, Reference, Venue};
use crate::config::FALLBACK_VENUE_ID;
use crate::error::Result;
use crate::exhibition::Exhibition;

pub const DRAFT_PREFIX: &str = "drafts.";
pub const UNTITLED: &str = "Untitled Exhibition";

/// `drafts.` + base36 millisecond timestamp + random suffix.
pub fn new_draft_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("{DRAFT_PREFIX}{}-{}", to_base36(millis), suffix.to_lowercase())
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

fn or_default(value: &str, default: impl FnOnce() -> String) -> String {
    if value.trim().is_empty() {
        default()
    } else {
        value.to_string()
    }
}

/// Apply defaults and pick the venue reference. Pure apart from the generated id.
pub fn build_draft(
    exhibition: &Exhibition,
    venue: Option<&Venue>,
    fallback_venue_id: &str,
    today: NaiveDate,
) -> DraftEvent {
    let venue_ref = venue.map_or(fallback_venue_id, |v| v.id.as_str());
    let today = today.format("%Y-%m-%d").to_string();
    let website = Some(exhibition.website.trim())
        .filter(|w| !w.is_empty())
        .map(str::to_string);

    DraftEvent {
        id: new_draft_id(),
        kind: event_type(),
        name: or_default(&exhibition.title, || UNTITLED.to_string()),
        venue: Reference::to(venue_ref),
        start_date: or_default(&exhibition.start_date, || today.clone()),
        end_date: or_default(&exhibition.end_date, || today.clone()),
        website,
    }
}

pub struct DraftPublisher<'a> {
    sink: &'a dyn DocumentSink,
    fallback_venue_id: String,
}

impl<'a> DraftPublisher<'a> {
    pub fn new(sink: &'a dyn DocumentSink) -> Self {
        Self {
            sink,
            fallback_venue_id: FALLBACK_VENUE_ID.to_string(),
        }
    }

    pub fn with_fallback_venue(mut self, id: impl Into<String>) -> Self {
        self.fallback_venue_id = id.into();
        self
    }

    /// Build the draft for today's UTC date and persist it.
    pub async fn publish(&self, exhibition: &Exhibition, venue: Option<&Venue>) -> Result<DraftEvent> {
        let today = Utc::now().date_naive();
        let draft = build_draft(exhibition, venue, &self.fallback_venue_id, today);

        if let Err(e) = self.sink.create_document(&draft).await {
            tracing::error!(error = %e, draft_id = %draft.id, title = %draft.name, "error creating draft event");
            return Err(e);
        }
        tracing::info!(draft_id = %draft.id, venue = %draft.venue.id, "draft event created");
        Ok(draft)
    }
}
