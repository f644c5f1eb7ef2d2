// src/cms/mod.rs
// Sanity side of the pipeline: venue lookup (best-effort) and draft creation (strict).
pub mod publisher;
pub mod resolver;
pub mod sanity;
pub mod types;

pub use publisher::{build_draft, DraftPublisher};
pub use resolver::find_venue_by_name;
pub use sanity::SanityClient;
pub use types::{DocumentSink, DraftEvent, Reference, Venue, VenueLookup};
