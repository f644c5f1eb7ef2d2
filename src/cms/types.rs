// src/cms/types.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sanity `_ref` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    #[serde(rename = "_type", default = "reference_type")]
    pub kind: String,
    #[serde(rename = "_ref")]
    pub id: String,
}

fn reference_type() -> String {
    "reference".to_string()
}

impl Reference {
    pub fn to(id: impl Into<String>) -> Self {
        Self {
            kind: reference_type(),
            id: id.into(),
        }
    }
}

/// Venue document, owned by the CMS. Looked up, never written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Venue {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<Reference>,
}

/// Draft event document as persisted. `id` carries the `drafts.` prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraftEvent {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default = "event_type")]
    pub kind: String,
    pub name: String,
    pub venue: Reference,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

pub(crate) fn event_type() -> String {
    "event".to_string()
}

/// Read side: run a GROQ query bound to one `$name` parameter.
#[async_trait]
pub trait VenueLookup: Send + Sync {
    async fn find_venue(&self, query: &str, name: &str) -> Result<Option<Venue>>;
}

/// Write side: create one document.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn create_document(&self, doc: &DraftEvent) -> Result<()>;
}
