// tests/extractor.rs
mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use exhibition_importer::extract::{
    CompletionProvider, ContentBlock, ExhibitionExtractor, HttpPageFetcher, PageFetcher,
};
use exhibition_importer::{Exhibition, ImportError, Result};

/// Serves a fixed body and records requested URLs.
struct FakePage {
    body: String,
    calls: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl PageFetcher for FakePage {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        Ok(self.body.clone())
    }
}

/// Replies with fixed blocks and records prompts.
struct FakeLlm {
    reply: Vec<ContentBlock>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl CompletionProvider for FakeLlm {
    async fn complete(&self, prompt: &str) -> Result<Vec<ContentBlock>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
    fn name(&self) -> &'static str {
        "fake"
    }
}

struct Harness {
    extractor: ExhibitionExtractor,
    page_calls: Arc<Mutex<Vec<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

fn harness(body: &str, reply: Vec<ContentBlock>) -> Harness {
    let page_calls = Arc::new(Mutex::new(Vec::new()));
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let extractor = ExhibitionExtractor::new(
        Arc::new(FakePage {
            body: body.to_string(),
            calls: page_calls.clone(),
        }),
        Arc::new(FakeLlm {
            reply,
            prompts: prompts.clone(),
        }),
    );
    Harness {
        extractor,
        page_calls,
        prompts,
    }
}

const PAGE: &str = r#"
<html>
  <body>
    <h1>Gallery Exhibition</h1>
    <p>At Test Gallery</p>
    <p>January 1 - February 1, 2024</p>
  </body>
</html>
"#;

#[tokio::test]
async fn extracts_exactly_the_model_fields() {
    let reply = serde_json::json!({
        "venue_name": "Test Gallery",
        "title": "Gallery Exhibition",
        "start_date": "2024-01-01",
        "end_date": "2024-02-01",
        "website": "https://example.com"
    })
    .to_string();
    let h = harness(PAGE, vec![ContentBlock::Text(reply)]);

    let ex = h.extractor.extract("https://example.com").await.unwrap();

    assert_eq!(
        ex,
        Exhibition {
            venue_name: "Test Gallery".into(),
            title: "Gallery Exhibition".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-02-01".into(),
            website: "https://example.com".into(),
        }
    );
    assert_eq!(*h.page_calls.lock().unwrap(), vec!["https://example.com"]);
    let prompts = h.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("<h1>Gallery Exhibition</h1>"));
    assert!(prompts[0].contains("(https://example.com)"));
}

#[tokio::test]
async fn empty_fields_are_not_defaulted() {
    let reply = r#"Here you go: {"venue_name":"","title":"","start_date":"","end_date":"","website":""}"#;
    let h = harness(PAGE, vec![ContentBlock::Text(reply.into())]);
    let ex = h.extractor.extract("https://example.com").await.unwrap();
    assert_eq!(ex, Exhibition::default());
}

#[tokio::test]
async fn reply_without_json_is_no_json_found() {
    let h = harness("<html></html>", vec![ContentBlock::Text("No JSON here".into())]);
    let err = h.extractor.extract("https://example.com").await.unwrap_err();
    assert!(matches!(err, ImportError::NoJsonFound));
    assert_eq!(err.to_string(), "Could not extract JSON from model response");
}

#[tokio::test]
async fn malformed_span_is_malformed_json() {
    let h = harness(
        "<html></html>",
        vec![ContentBlock::Text(r#"{"title": "A",}"#.into())],
    );
    let err = h.extractor.extract("https://example.com").await.unwrap_err();
    assert!(matches!(err, ImportError::MalformedJson(_)));
    assert!(err.is_item_level());
}

#[tokio::test]
async fn non_text_first_block_is_unexpected() {
    let h = harness(
        "<html></html>",
        vec![
            ContentBlock::Other("tool_use".into()),
            ContentBlock::Text(r#"{"title":"A"}"#.into()),
        ],
    );
    let err = h.extractor.extract("https://example.com").await.unwrap_err();
    assert!(matches!(err, ImportError::UnexpectedResponse(ref k) if k == "tool_use"));
}

#[tokio::test]
async fn empty_reply_is_unexpected() {
    let h = harness("<html></html>", vec![]);
    let err = h.extractor.extract("https://example.com").await.unwrap_err();
    assert!(matches!(err, ImportError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn page_markup_is_capped_at_50k_chars() {
    let body = format!("{}TAIL_MARKER", "#".repeat(60_000));
    let h = harness(&body, vec![ContentBlock::Text("{}".into())]);
    h.extractor.extract("https://example.com").await.unwrap();

    let prompts = h.prompts.lock().unwrap();
    assert_eq!(prompts[0].matches('#').count(), 50_000);
    assert!(!prompts[0].contains("TAIL_MARKER"));
}

#[tokio::test]
async fn http_fetch_failure_carries_status_text_and_skips_model() {
    let router = Router::new()
        .route("/ok", get(|| async { "<html>ok</html>" }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nope") }));
    let base = common::spawn_server(router).await;

    let prompts = Arc::new(Mutex::new(Vec::new()));
    let extractor = ExhibitionExtractor::new(
        Arc::new(HttpPageFetcher::new(common::http_client())),
        Arc::new(FakeLlm {
            reply: vec![ContentBlock::Text(r#"{"title":"ok"}"#.into())],
            prompts: prompts.clone(),
        }),
    );

    let url = format!("{base}/missing");
    let err = extractor.extract(&url).await.unwrap_err();
    assert!(matches!(err, ImportError::Fetch { ref status, .. } if status == "Not Found"));
    assert_eq!(err.to_string(), format!("Failed to fetch {url}: Not Found"));
    assert!(prompts.lock().unwrap().is_empty());

    let ex = extractor.extract(&format!("{base}/ok")).await.unwrap();
    assert_eq!(ex.title, "ok");
    assert!(prompts.lock().unwrap()[0].contains("<html>ok</html>"));
}
