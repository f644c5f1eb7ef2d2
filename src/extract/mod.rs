//! Metadata extractor: page fetch, one model call, JSON span parse.
//!
//! `extract` does no defaulting; whatever the model put in the object is what
//! the caller gets. Defaults for missing values live in the draft publisher.

pub mod anthropic;
pub mod json_span;
pub mod page;
pub mod prompt;

use std::sync::Arc;

use crate::error::{ImportError, Result};
use crate::exhibition::Exhibition;

pub use anthropic::{AnthropicProvider, CompletionProvider, ContentBlock};
pub use page::{HttpPageFetcher, PageFetcher};

/// Upper bound on markup characters sent to the model.
pub const MAX_PAGE_CHARS: usize = 50_000;

pub struct ExhibitionExtractor {
    fetcher: Arc<dyn PageFetcher>,
    llm: Arc<dyn CompletionProvider>,
    max_page_chars: usize,
}

impl ExhibitionExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>, llm: Arc<dyn CompletionProvider>) -> Self {
        Self {
            fetcher,
            llm,
            max_page_chars: MAX_PAGE_CHARS,
        }
    }

    pub fn with_max_page_chars(mut self, max_chars: usize) -> Self {
        self.max_page_chars = max_chars;
        self
    }

    pub async fn extract(&self, url: &str) -> Result<Exhibition> {
        let html = self.fetcher.fetch_page(url).await?;
        let excerpt = prompt::truncate_chars(&html, self.max_page_chars);
        let prompt = prompt::build_prompt(url, excerpt);

        tracing::debug!(
            provider = self.llm.name(),
            url,
            prompt_chars = prompt.len(),
            "requesting completion"
        );
        let blocks = self.llm.complete(&prompt).await?;
        let text = match blocks.into_iter().next() {
            Some(ContentBlock::Text(t)) => t,
            Some(ContentBlock::Other(kind)) => return Err(ImportError::UnexpectedResponse(kind)),
            None => return Err(ImportError::UnexpectedResponse("empty content".into())),
        };

        parse_reply(&text)
    }
}

/// Parse the first JSON object span of a model reply into an [`Exhibition`].
pub fn parse_reply(text: &str) -> Result<Exhibition> {
    let span = json_span::find_json_object(text).ok_or(ImportError::NoJsonFound)?;
    Ok(serde_json::from_str(span)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reply_reads_object_from_prose() {
        let ex = parse_reply(
            "Sure! {\"venue_name\":\"V\",\"title\":\"T\",\"start_date\":\"2024-01-01\",\"end_date\":\"2024-02-01\",\"website\":\"https://example.com\"}",
        )
        .unwrap();
        assert_eq!(ex.venue_name, "V");
        assert_eq!(ex.end_date, "2024-02-01");
    }

    #[test]
    fn parse_reply_error_kinds() {
        assert!(matches!(parse_reply("nothing"), Err(ImportError::NoJsonFound)));
        assert!(matches!(
            parse_reply("{not json}"),
            Err(ImportError::MalformedJson(_))
        ));
    }
}
