//! Anthropic Messages API provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::app::{require_secret, AnthropicConfig, ENV_ANTHROPIC_KEY};
use crate::error::{ImportError, Result};

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// One element of the reply's `content` array. Anything that is not text is
/// kept only by its type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text(String),
    Other(String),
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl From<RawBlock> for ContentBlock {
    fn from(b: RawBlock) -> Self {
        match (b.kind.as_str(), b.text) {
            ("text", Some(text)) => ContentBlock::Text(text),
            _ => ContentBlock::Other(b.kind),
        }
    }
}

/// Single-turn completion seam. Separated so the extractor can be driven by
/// a fake in tests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Vec<ContentBlock>>;
    fn name(&self) -> &'static str;
}

pub struct AnthropicProvider {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub fn new(cfg: &AnthropicConfig, http: Client) -> Result<Self> {
        let api_key = require_secret(cfg.api_key.as_deref(), ENV_ANTHROPIC_KEY)?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: cfg.model.clone(),
            max_tokens: cfg.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    async fn complete(&self, prompt: &str) -> Result<Vec<ContentBlock>> {
        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            max_tokens: u32,
            messages: Vec<Msg<'a>>,
        }
        #[derive(Deserialize)]
        struct Resp {
            #[serde(default)]
            content: Vec<RawBlock>,
        }

        let req = Req {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Msg {
                role: "user",
                content: prompt,
            }],
        };

        let resp = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&req)
            .send()
            .await
            .map_err(|e| ImportError::CompletionTransport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ImportError::Completion {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: Resp = resp
            .json()
            .await
            .map_err(|e| ImportError::CompletionTransport(e.to_string()))?;
        Ok(body.content.into_iter().map(ContentBlock::from).collect())
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_blocks_map_to_content_blocks() {
        let blocks: Vec<RawBlock> = serde_json::from_str(
            r#"[{"type":"text","text":"hi"},{"type":"tool_use","id":"t1","name":"x","input":{}}]"#,
        )
        .unwrap();
        let mapped: Vec<ContentBlock> = blocks.into_iter().map(ContentBlock::from).collect();
        assert_eq!(
            mapped,
            vec![
                ContentBlock::Text("hi".into()),
                ContentBlock::Other("tool_use".into())
            ]
        );
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let cfg = AnthropicConfig::default();
        let err = AnthropicProvider::new(&cfg, Client::new())
            .err()
            .expect("must fail without key");
        assert_eq!(
            err.to_string(),
            "ANTHROPIC_API_KEY environment variable is not set"
        );
    }
}
