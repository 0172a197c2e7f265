// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use x_scraper::domain::models::record::{CleanedRecord, NormalizedRecord, RecordId, ScoredRecord};
use x_scraper::domain::repositories::table_storage::IoWriteError;
use x_scraper::domain::services::report_generator::ReportGenerator;
use x_scraper::infrastructure::storage::LocalCsvStorage;
use x_scraper::ScraperSettings;

fn scored(id: i64, title: &str, body: &str, score: f64) -> ScoredRecord {
    let normalized = NormalizedRecord::new(Some(RecordId::from(id)), title, body);
    let clean_text = format!("{} {}", title, body);
    ScoredRecord::from_cleaned(CleanedRecord::from_normalized(normalized, clean_text), score)
}

fn sample() -> Vec<ScoredRecord> {
    vec![
        scored(1, "Good news", "Everyone is happy, truly.", 0.6),
        scored(2, "Bad news", "Nobody \"likes\" this.", -0.4),
        scored(3, "Plain", "Nothing to see", 0.0),
    ]
}

#[tokio::test]
async fn test_rerun_overwrites_instead_of_appending() {
    let dir = tempfile::tempdir().unwrap();
    let settings = ScraperSettings::default().with_output_dir(dir.path().join("nested/out"));
    let generator = ReportGenerator::new(Arc::new(LocalCsvStorage::new()), &settings);

    let first = generator.generate(&sample()).await.unwrap();
    let detail_once = std::fs::read_to_string(&first.detail_csv).unwrap();
    let summary_once = std::fs::read_to_string(&first.sentiment_report_csv).unwrap();

    let second = generator.generate(&sample()).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(std::fs::read_to_string(&second.detail_csv).unwrap(), detail_once);
    assert_eq!(
        std::fs::read_to_string(&second.sentiment_report_csv).unwrap(),
        summary_once
    );
}

#[tokio::test]
async fn test_detail_file_uses_standard_csv_quoting() {
    let dir = tempfile::tempdir().unwrap();
    let settings = ScraperSettings::default().with_output_dir(dir.path());
    let generator = ReportGenerator::new(Arc::new(LocalCsvStorage::new()), &settings);

    let paths = generator.generate(&sample()[1..2]).await.unwrap();
    let detail = std::fs::read_to_string(&paths.detail_csv).unwrap();

    assert_eq!(
        detail,
        concat!(
            "id,title,body,content,clean_text,sentiment_score,sentiment\n",
            "2,Bad news,\"Nobody \"\"likes\"\" this.\",\"Bad news\nNobody \"\"likes\"\" this.\",",
            "\"Bad news Nobody \"\"likes\"\" this.\",-0.4,negative\n"
        )
    );
}

#[tokio::test]
async fn test_custom_filenames_are_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let settings = ScraperSettings::default()
        .with_output_dir(dir.path())
        .with_filenames("detail.csv", "summary.csv");
    let generator = ReportGenerator::new(Arc::new(LocalCsvStorage::new()), &settings);

    let paths = generator.generate(&sample()).await.unwrap();

    assert_eq!(paths.detail_csv, dir.path().join("detail.csv"));
    assert_eq!(paths.sentiment_report_csv, dir.path().join("summary.csv"));
    assert!(paths.detail_csv.is_file());
    assert!(paths.sentiment_report_csv.is_file());
}

#[tokio::test]
async fn test_summary_write_failure_keeps_detail_file() {
    let dir = tempfile::tempdir().unwrap();
    // a directory squatting on the summary filename makes the second write fail
    std::fs::create_dir_all(dir.path().join("sentiment_report.csv")).unwrap();
    let settings = ScraperSettings::default().with_output_dir(dir.path());
    let generator = ReportGenerator::new(Arc::new(LocalCsvStorage::new()), &settings);

    let result = generator.generate(&sample()).await;

    assert!(matches!(result, Err(IoWriteError::Write { .. })));
    assert!(dir.path().join("scraped_posts.csv").is_file());
}

#[tokio::test]
async fn test_empty_input_writes_headers_only() {
    let dir = tempfile::tempdir().unwrap();
    let settings = ScraperSettings::default().with_output_dir(dir.path());
    let generator = ReportGenerator::new(Arc::new(LocalCsvStorage::new()), &settings);

    let paths = generator.generate(&[]).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&paths.detail_csv).unwrap(),
        "id,title,body,content,clean_text,sentiment_score,sentiment\n"
    );
    assert_eq!(
        std::fs::read_to_string(&paths.sentiment_report_csv).unwrap(),
        "sentiment,count\n"
    );
}
