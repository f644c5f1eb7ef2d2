//! The record the extractor produces from one webpage.

use serde::{Deserialize, Deserializer, Serialize};

/// Exhibition metadata as returned by the model.
///
/// Every field is a plain string; anything the model could not determine is `""`.
/// Missing keys and JSON `null` deserialize to `""`, extra keys are ignored.
/// Dates are expected as `YYYY-MM-DD` but are not validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Exhibition {
    #[serde(deserialize_with = "null_as_empty")]
    pub venue_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub website: String,
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}
