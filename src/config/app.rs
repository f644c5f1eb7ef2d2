// src/config/app.rs
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::error::{ImportError, Result};

pub const ENV_ARENA_TOKEN: &str = "ARENA_FILTERIZER_KEY";
pub const ENV_ANTHROPIC_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_SANITY_TOKEN: &str = "SANITY_WRITE_TOKEN";

/// Placeholder venue document used when a draft has no resolved venue.
pub const FALLBACK_VENUE_ID: &str = "venue-unknown";

/// Everything the pipeline needs, resolved once at startup.
///
/// Non-secret values come from the TOML settings file (all keys optional);
/// credentials are filled in from the environment by [`AppConfig::with_env_secrets`]
/// and never serialized back out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub arena: ArenaConfig,
    pub anthropic: AnthropicConfig,
    pub sanity: SanityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("exhibition-importer/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout_secs: 10,
            timeout_secs: 60,
        }
    }
}

impl HttpConfig {
    /// Shared client for every remote call; only the connection pool is shared.
    pub fn build_client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(client)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub base_url: String,
    /// Channel slug or id.
    pub channel: String,
    /// Page size used when no `--limit` is given.
    pub per_page_default: u32,
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.are.na".to_string(),
            channel: "art-exhibitions-for-filterizer".to_string(),
            per_page_default: 100,
            token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthropicConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Hard cap on the page markup embedded in the prompt, in characters.
    pub max_page_chars: usize,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-haiku-4-20250514".to_string(),
            max_tokens: 1024,
            max_page_chars: 50_000,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    /// Replaces both the CDN and the API host (local fakes, proxies).
    pub base_url: Option<String>,
    pub fallback_venue_id: String,
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            project_id: "ng5yto4p".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: true,
            base_url: None,
            fallback_venue_id: FALLBACK_VENUE_ID.to_string(),
            token: None,
        }
    }
}

impl SanityConfig {
    /// Base for read queries (CDN when enabled).
    pub fn query_base(&self) -> String {
        self.base_for(self.use_cdn)
    }

    /// Base for mutations; writes never go through the CDN.
    pub fn api_base(&self) -> String {
        self.base_for(false)
    }

    fn base_for(&self, cdn: bool) -> String {
        if let Some(base) = &self.base_url {
            return format!("{}/v{}", base.trim_end_matches('/'), self.api_version);
        }
        let host = if cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}",
            self.project_id, host, self.api_version
        )
    }
}

impl AppConfig {
    /// Fill credentials from the process environment.
    pub fn with_env_secrets(mut self) -> Self {
        self.arena.token = env_secret(ENV_ARENA_TOKEN);
        self.anthropic.api_key = env_secret(ENV_ANTHROPIC_KEY);
        self.sanity.token = env_secret(ENV_SANITY_TOKEN);
        self
    }
}

fn env_secret(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Turn an absent credential into the configuration error callers surface verbatim.
pub fn require_secret(value: Option<&str>, env_key: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ImportError::Configuration(format!(
            "{env_key} environment variable is not set"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_bases_follow_cdn_flag() {
        let cfg = SanityConfig::default();
        assert_eq!(
            cfg.query_base(),
            "https://ng5yto4p.apicdn.sanity.io/v2024-01-01"
        );
        assert_eq!(cfg.api_base(), "https://ng5yto4p.api.sanity.io/v2024-01-01");

        let local = SanityConfig {
            base_url: Some("http://127.0.0.1:9999/".into()),
            ..SanityConfig::default()
        };
        assert_eq!(local.query_base(), "http://127.0.0.1:9999/v2024-01-01");
        assert_eq!(local.api_base(), local.query_base());
    }

    #[test]
    fn require_secret_rejects_blank() {
        let err = require_secret(Some("   "), ENV_ARENA_TOKEN).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ARENA_FILTERIZER_KEY environment variable is not set"
        );
        assert!(require_secret(None, ENV_ANTHROPIC_KEY).is_err());
        assert_eq!(require_secret(Some(" k "), ENV_ANTHROPIC_KEY).unwrap(), "k");
    }
}
