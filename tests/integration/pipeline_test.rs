// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use std::sync::Arc;
use x_scraper::domain::models::record::MalformedRecordError;
use x_scraper::domain::models::sentiment::SentimentLabel;
use x_scraper::domain::services::sentiment_scorer::ScoringError;
use x_scraper::engines::traits::FetchError;
use x_scraper::infrastructure::storage::LocalCsvStorage;
use x_scraper::{PipelineError, ScraperSettings, XScraper};

use super::helpers::{posts_server, read_csv, settings_for, KeywordAnalyzer, StaticSource};

#[tokio::test]
async fn test_end_to_end_scenario_keeps_long_record_only() {
    // Given: 一条足够长、一条过短的记录
    let server = posts_server(
        200,
        json!([
            {"id": 1, "title": "Hello", "body": "World, this is a sufficiently long test body."},
            {"id": 2, "title": "Hi", "body": "short"}
        ]),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server.uri(), dir.path()).with_min_chars(20);

    // When: 使用默认能力执行流水线
    let scraper = XScraper::new(settings).unwrap();
    let paths = scraper.run().await.unwrap();

    // Then: 仅保留记录 1
    let (headers, rows) = read_csv(&paths.detail_csv);
    assert_eq!(
        headers,
        vec!["id", "title", "body", "content", "clean_text", "sentiment_score", "sentiment"]
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[0][2], "World, this is a sufficiently long test body.");
    assert_eq!(rows[0][3], "Hello\nWorld, this is a sufficiently long test body.");
    assert_eq!(rows[0][4], "Hello World, this is a sufficiently long test body.");
    assert!(["positive", "negative", "neutral"].contains(&rows[0][6].as_str()));

    let (summary_headers, summary_rows) = read_csv(&paths.sentiment_report_csv);
    assert_eq!(summary_headers, vec!["sentiment", "count"]);
    assert_eq!(summary_rows.len(), 1);
    assert_eq!(summary_rows[0][0], rows[0][6]);
    assert_eq!(summary_rows[0][1], "1");
}

#[tokio::test]
async fn test_fetch_truncates_to_batch_limit() {
    let posts: Vec<_> = (1..=30)
        .map(|i| json!({"id": i, "title": format!("post {}", i), "body": "lorem ipsum"}))
        .collect();
    let server = posts_server(200, json!(posts)).await;
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server.uri(), dir.path())
        .with_limit(5)
        .with_min_chars(0);

    let scraper = XScraper::new(settings).unwrap();
    let records = scraper.scrape().await.unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[4].title, "post 5");
}

#[tokio::test]
async fn test_elements_past_limit_are_not_validated() {
    // Given: 上限之后跟着非对象元素
    let server = posts_server(
        200,
        json!([
            {"id": 1, "title": "first", "body": "one"},
            "garbage past the limit",
            null
        ]),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server.uri(), dir.path()).with_limit(1);

    // When
    let scraper = XScraper::new(settings).unwrap();
    let records = scraper.scrape().await.unwrap();

    // Then: 只投影上限内的元素
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content, "first\none");
}

#[tokio::test]
async fn test_non_object_element_within_limit_is_malformed() {
    let server = posts_server(200, json!([{"id": 1, "title": "first"}, "garbage"])).await;
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server.uri(), dir.path()).with_limit(2);

    let scraper = XScraper::new(settings).unwrap();
    let result = scraper.scrape().await;

    assert!(matches!(
        result,
        Err(PipelineError::MalformedRecord(MalformedRecordError::NotAnObject(_)))
    ));
}

#[tokio::test]
async fn test_summary_counts_three_positive_one_negative() {
    let source = StaticSource::new(vec![
        json!({"id": 1, "title": "great", "body": "news"}),
        json!({"id": 2, "title": "awful", "body": "news"}),
        json!({"id": 3, "title": "great", "body": "again"}),
        json!({"id": 4, "title": "great", "body": "once more"}),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let settings = ScraperSettings::default()
        .with_output_dir(dir.path())
        .with_min_chars(0);

    let scraper = XScraper::with_capabilities(
        settings,
        Arc::new(source),
        Arc::new(KeywordAnalyzer),
        Arc::new(LocalCsvStorage::new()),
    )
    .unwrap();
    let paths = scraper.run().await.unwrap();

    let summary = std::fs::read_to_string(&paths.sentiment_report_csv).unwrap();
    assert_eq!(summary, "sentiment,count\npositive,3\nnegative,1\n");
}

#[tokio::test]
async fn test_stages_can_be_driven_individually() {
    let source = StaticSource::new(vec![
        json!({"id": "a", "title": "  great\n\n", "body": "   day   out "}),
        json!({"title": "", "body": ""}),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let settings = ScraperSettings::default()
        .with_output_dir(dir.path())
        .with_min_chars(0);
    let scraper = XScraper::with_capabilities(
        settings,
        Arc::new(source),
        Arc::new(KeywordAnalyzer),
        Arc::new(LocalCsvStorage::new()),
    )
    .unwrap();

    let normalized = scraper.scrape().await.unwrap();
    assert_eq!(normalized[0].content, "great\n\n\n   day   out");

    let cleaned = scraper.clean(&normalized);
    assert_eq!(cleaned.len(), 2);
    assert_eq!(cleaned[0].clean_text, "great day out");
    assert_eq!(cleaned[1].clean_text, "");

    let scored = scraper.score_sentiment(&cleaned).unwrap();
    assert_eq!(scored[0].sentiment, SentimentLabel::Positive);
    assert_eq!(scored[1].sentiment, SentimentLabel::Neutral);

    let paths = scraper.generate_reports(&scored).await.unwrap();
    let (_, rows) = read_csv(&paths.detail_csv);
    assert_eq!(rows[0][0], "a");
    assert_eq!(rows[1][0], "");
    assert_eq!(rows[1][3], "");
}

#[tokio::test]
async fn test_http_error_aborts_before_writing() {
    let server = posts_server(404, json!({"error": "missing"})).await;
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("artifacts");
    let settings = settings_for(&server.uri(), &output_dir);

    let scraper = XScraper::new(settings).unwrap();
    let result = scraper.run().await;

    assert!(matches!(
        result,
        Err(PipelineError::Fetch(FetchError::Status { status: 404, .. }))
    ));
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_non_array_body_is_a_fetch_error() {
    let server = posts_server(200, json!({"posts": []})).await;
    let dir = tempfile::tempdir().unwrap();

    let scraper = XScraper::new(settings_for(&server.uri(), dir.path())).unwrap();
    let result = scraper.scrape().await;

    assert!(matches!(result, Err(PipelineError::Fetch(FetchError::Decode(_)))));
}

#[tokio::test]
async fn test_scoring_failure_aborts_whole_run() {
    let source = StaticSource::new(vec![
        json!({"id": 1, "title": "great", "body": "fine"}),
        json!({"id": 2, "title": "this will explode", "body": ""}),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("artifacts");
    let settings = ScraperSettings::default()
        .with_output_dir(&output_dir)
        .with_min_chars(0);

    let scraper = XScraper::with_capabilities(
        settings,
        Arc::new(source),
        Arc::new(KeywordAnalyzer),
        Arc::new(LocalCsvStorage::new()),
    )
    .unwrap();
    let result = scraper.run().await;

    assert!(matches!(
        result,
        Err(PipelineError::Scoring(ScoringError::Rejected(_)))
    ));
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_invalid_settings_are_rejected() {
    let result = XScraper::with_capabilities(
        ScraperSettings::default().with_limit(0),
        Arc::new(StaticSource::new(Vec::new())),
        Arc::new(KeywordAnalyzer),
        Arc::new(LocalCsvStorage::new()),
    );

    assert!(matches!(result, Err(PipelineError::Config(_))));
}
