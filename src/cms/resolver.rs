// src/cms/resolver.rs
use crate::cms::types::{Venue, VenueLookup};

/// First venue whose name matches `$name` (case-insensitive pattern match).
pub const VENUE_BY_NAME_QUERY: &str = r#"*[_type == "venue" && name match $name][0]"#;

/// Best-effort venue lookup. Blank names short-circuit without a query; lookup
/// failures are logged and reported as "no venue".
pub async fn find_venue_by_name(lookup: &dyn VenueLookup, venue_name: &str) -> Option<Venue> {
    if venue_name.trim().is_empty() {
        return None;
    }

    match lookup.find_venue(VENUE_BY_NAME_QUERY, venue_name).await {
        Ok(found) => {
            tracing::debug!(venue = venue_name, found = found.is_some(), "venue lookup");
            found
        }
        Err(e) => {
            tracing::warn!(error = %e, venue = venue_name, "error searching for venue");
            None
        }
    }
}
