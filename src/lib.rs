// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod cms;
pub mod config;
pub mod error;
pub mod exhibition;
pub mod extract;
pub mod ingest;
pub mod pipeline;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::error::{ImportError, Result};
pub use crate::exhibition::Exhibition;
pub use crate::extract::ExhibitionExtractor;
pub use crate::pipeline::RunReport;
