// src/error.rs
use thiserror::Error;

/// Everything that can go wrong between listing the channel and writing a draft.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Missing credential or unusable setting. Raised before any request.
    #[error("{0}")]
    Configuration(String),

    /// The settings file exists but could not be read or parsed.
    #[error("invalid settings file {path}: {message}")]
    Settings { path: String, message: String },

    /// Listing the source channel failed.
    #[error("Are.na request failed ({status}): {message}")]
    Feed { status: u16, message: String },

    #[error("Failed to fetch {url}: {status}")]
    Fetch { url: String, status: String },

    #[error("completion request failed ({status}): {message}")]
    Completion { status: u16, message: String },

    /// The completion request never produced a readable reply (connect, timeout, body decode).
    #[error("completion transport error: {0}")]
    CompletionTransport(String),

    #[error("Unexpected response type from model: {0}")]
    UnexpectedResponse(String),

    #[error("Could not extract JSON from model response")]
    NoJsonFound,

    #[error("malformed JSON in model response: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("venue lookup failed: {0}")]
    Resolution(String),

    #[error("failed to create draft {id}: {message}")]
    Publish { id: String, message: String },

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ImportError {
    /// Failures confined to a single feed item; the pipeline logs and skips them.
    pub fn is_item_level(&self) -> bool {
        matches!(
            self,
            ImportError::Fetch { .. }
                | ImportError::Completion { .. }
                | ImportError::CompletionTransport(_)
                | ImportError::UnexpectedResponse(_)
                | ImportError::NoJsonFound
                | ImportError::MalformedJson(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
