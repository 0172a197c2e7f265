// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use x_scraper::config::settings::ConfigError;
use x_scraper::Settings;

#[test]
fn test_environment_overrides_and_validation() {
    // Given: 环境变量覆盖批量上限与过滤阈值
    std::env::set_var("XSCRAPER__SCRAPER__LIMIT", "7");
    std::env::set_var("XSCRAPER__SCRAPER__MIN_CHARS", "0");

    let settings = Settings::new().expect("settings should load");
    assert_eq!(settings.scraper.limit, 7);
    assert_eq!(settings.scraper.min_chars, 0);
    assert_eq!(settings.scraper.report_filename, "sentiment_report.csv");

    // When: 批量上限为 0
    std::env::set_var("XSCRAPER__SCRAPER__LIMIT", "0");
    let invalid = Settings::new();

    // Then: 校验失败
    assert!(matches!(invalid, Err(ConfigError::Invalid(_))));

    std::env::remove_var("XSCRAPER__SCRAPER__LIMIT");
    std::env::remove_var("XSCRAPER__SCRAPER__MIN_CHARS");
}
