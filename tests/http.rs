use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use rapid_summarizer::service::server::router;
use rapid_summarizer::{
    LanguageResources, StopwordFilter, SummarizeService, Summarizer, SummarizerConfig, Tokenizer,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let resources = LanguageResources::new(Tokenizer::new(), StopwordFilter::empty());
    let service = SummarizeService::new(
        Summarizer::new(Arc::new(resources)),
        SummarizerConfig::default(),
    );
    router(Arc::new(service))
}

async fn post_summarize(body: String) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method("POST")
        .uri("/summarize")
        .header("content-type", "application/json")
        .body(Body::from(body))?;

    let response = app().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn summarize_returns_summary() -> anyhow::Result<()> {
    let body = json!({ "text": "A. B. C. D. E.", "ratio": 0.4, "method": "extractive" });
    let (status, value) = post_summarize(body.to_string()).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({ "summary": "A. B." }));
    Ok(())
}

#[tokio::test]
async fn full_ratio_returns_every_sentence() -> anyhow::Result<()> {
    let text = "One is here. Two is there. Three is near. Four is far. Five is gone.";
    let body = json!({ "text": text, "ratio": 1.0, "method": "frequency" });
    let (status, value) = post_summarize(body.to_string()).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["summary"], text);
    Ok(())
}

#[tokio::test]
async fn missing_text_is_bad_request() -> anyhow::Result<()> {
    let (status, value) = post_summarize(json!({ "ratio": 0.3 }).to_string()).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value.get("summary").is_none());
    assert_eq!(value["error"], "No text provided");
    Ok(())
}

#[tokio::test]
async fn bogus_method_is_bad_request() -> anyhow::Result<()> {
    let body = json!({ "text": "Hello there.", "method": "bogus" });
    let (status, value) = post_summarize(body.to_string()).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = value["error"].as_str().unwrap_or_default();
    assert!(error.contains("Invalid summarization method"));
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> anyhow::Result<()> {
    let (status, value) = post_summarize("{ text: oops".to_string()).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn pipeline_failure_is_server_error() -> anyhow::Result<()> {
    let body = json!({ "text": "A. B. C. D. E.", "ratio": "inf" });
    let (status, value) = post_summarize(body.to_string()).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(value["error"].as_str().unwrap_or_default().contains("ratio"));
    Ok(())
}

#[tokio::test]
async fn large_document_is_accepted() -> anyhow::Result<()> {
    // Past axum's 2 MB default body limit.
    let text = format!("{}end.", "word ".repeat(600_000));
    let body = json!({ "text": text });
    let (status, value) = post_summarize(body.to_string()).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["summary"], text);
    Ok(())
}

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    let request = Request::builder().uri("/health").body(Body::empty())?;
    let response = app().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(value, json!({ "status": "ok" }));
    Ok(())
}
