// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::config::settings::{ConfigError, ScraperSettings};
use crate::domain::models::record::{CleanedRecord, NormalizedRecord, ScoredRecord};
use crate::domain::models::report::ReportPaths;
use crate::domain::repositories::table_storage::TableStorage;
use crate::domain::services::record_fetcher::RecordFetcher;
use crate::domain::services::report_generator::ReportGenerator;
use crate::domain::services::sentiment_scorer::{SentimentAnalyzer, SentimentScorer};
use crate::domain::services::text_cleaner::TextCleaner;
use crate::engines::reqwest_engine::ReqwestRecordSource;
use crate::engines::traits::RecordSource;
use crate::infrastructure::sentiment::lexicon_analyzer::LexiconAnalyzer;
use crate::infrastructure::storage::LocalCsvStorage;
use crate::utils::errors::PipelineError;

// === Section: Use Case Definition ===

/// 抓取与情感分析流水线
///
/// 抓取 → 清洗 → 评分 → 报告，各阶段顺序执行，
/// 每个阶段完整产出结果后下一阶段才开始，首个错误即终止。
pub struct XScraper {
    settings: ScraperSettings,
    fetcher: RecordFetcher,
    cleaner: TextCleaner,
    scorer: SentimentScorer,
    reporter: ReportGenerator,
}

// === Section: Implementation ===

impl XScraper {
    /// 使用默认能力创建流水线
    ///
    /// 数据源为 reqwest，评分引擎为词典分析器，输出为本地 CSV 文件
    pub fn new(settings: ScraperSettings) -> Result<Self, PipelineError> {
        let source = ReqwestRecordSource::new()?;
        Self::with_capabilities(
            settings,
            Arc::new(source),
            Arc::new(LexiconAnalyzer::new()),
            Arc::new(LocalCsvStorage::new()),
        )
    }

    /// 使用自定义能力创建流水线
    pub fn with_capabilities(
        settings: ScraperSettings,
        source: Arc<dyn RecordSource>,
        analyzer: Arc<dyn SentimentAnalyzer>,
        storage: Arc<dyn TableStorage>,
    ) -> Result<Self, PipelineError> {
        settings.validate().map_err(ConfigError::from)?;

        Ok(Self {
            fetcher: RecordFetcher::new(source, &settings),
            cleaner: TextCleaner::from_settings(&settings),
            scorer: SentimentScorer::new(analyzer),
            reporter: ReportGenerator::new(storage, &settings),
            settings,
        })
    }

    pub fn settings(&self) -> &ScraperSettings {
        &self.settings
    }

    /// 抓取并规范化记录
    pub async fn scrape(&self) -> Result<Vec<NormalizedRecord>, PipelineError> {
        self.fetcher.fetch().await
    }

    /// 清洗并过滤记录
    pub fn clean(&self, records: &[NormalizedRecord]) -> Vec<CleanedRecord> {
        self.cleaner.clean(records)
    }

    /// 为记录评分
    pub fn score_sentiment(
        &self,
        records: &[CleanedRecord],
    ) -> Result<Vec<ScoredRecord>, PipelineError> {
        Ok(self.scorer.score(records)?)
    }

    /// 写出明细表与汇总表
    pub async fn generate_reports(
        &self,
        records: &[ScoredRecord],
    ) -> Result<ReportPaths, PipelineError> {
        Ok(self.reporter.generate(records).await?)
    }

    /// 执行完整流水线
    ///
    /// # 返回值
    ///
    /// * `Ok(ReportPaths)` - 两个输出文件的路径
    /// * `Err(PipelineError)` - 第一个失败阶段的错误
    pub async fn run(&self) -> Result<ReportPaths, PipelineError> {
        info!(source_url = %self.settings.source_url, "Starting pipeline run");

        let normalized = self.scrape().await?;
        let cleaned = self.clean(&normalized);
        let scored = self.score_sentiment(&cleaned)?;
        let paths = self.generate_reports(&scored).await?;

        info!(
            fetched = normalized.len(),
            kept = cleaned.len(),
            scored = scored.len(),
            "Pipeline run completed"
        );

        Ok(paths)
    }
}
