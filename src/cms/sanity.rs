// src/cms/sanity.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::cms::types::{DocumentSink, DraftEvent, Venue, VenueLookup};
use crate::config::app::{require_secret, SanityConfig, ENV_SANITY_TOKEN};
use crate::error::{ImportError, Result};

/// Sanity HTTP API client. Reads need no token; writes require one.
pub struct SanityClient {
    http: Client,
    query_base: String,
    api_base: String,
    dataset: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    result: Option<T>,
}

impl SanityClient {
    pub fn new(cfg: &SanityConfig, http: Client) -> Self {
        Self {
            http,
            query_base: cfg.query_base(),
            api_base: cfg.api_base(),
            dataset: cfg.dataset.clone(),
            token: cfg.token.clone().filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn can_write(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl VenueLookup for SanityClient {
    async fn find_venue(&self, query: &str, name: &str) -> Result<Option<Venue>> {
        let url = format!("{}/data/query/{}", self.query_base, self.dataset);
        // GROQ parameters are passed as JSON literals.
        let name_param = serde_json::to_string(name)
            .map_err(|e| ImportError::Resolution(e.to_string()))?;

        let resp = self
            .http
            .get(&url)
            .query(&[("query", query), ("$name", name_param.as_str())])
            .send()
            .await
            .map_err(|e| ImportError::Resolution(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ImportError::Resolution(format!("{status}: {body}")));
        }

        let envelope: QueryEnvelope<Venue> = resp
            .json()
            .await
            .map_err(|e| ImportError::Resolution(e.to_string()))?;
        Ok(envelope.result)
    }
}

#[async_trait]
impl DocumentSink for SanityClient {
    async fn create_document(&self, doc: &DraftEvent) -> Result<()> {
        let token = require_secret(self.token.as_deref(), ENV_SANITY_TOKEN)?;
        let url = format!("{}/data/mutate/{}", self.api_base, self.dataset);
        let body = serde_json::json!({ "mutations": [{ "create": doc }] });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImportError::Publish {
                id: doc.id.clone(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ImportError::Publish {
                id: doc.id.clone(),
                message: format!("{status}: {text}"),
            });
        }
        Ok(())
    }
}
