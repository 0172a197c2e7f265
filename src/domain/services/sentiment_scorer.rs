// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::domain::models::record::{CleanedRecord, ScoredRecord};
use crate::domain::models::sentiment::{PolarityScores, SentimentLabel};

/// 情感评分错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// 评分引擎拒绝处理该文本
    #[error("Analyzer rejected text: {0}")]
    Rejected(String),
    /// 评分结果无效
    #[error("Analyzer returned an invalid compound score: {0}")]
    InvalidScore(f64),
}

/// 情感分析引擎特质
///
/// 将文本映射为连续的极性分数，同样的文本应得到同样的分数
pub trait SentimentAnalyzer: Send + Sync {
    /// 计算文本的极性分数
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, ScoringError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

/// 情感评分服务
pub struct SentimentScorer {
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl SentimentScorer {
    pub fn new(analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// 为单条文本评分并判定标签
    ///
    /// 复合分数原样保留，不做取整或截断
    pub fn score_text(&self, text: &str) -> Result<(f64, SentimentLabel), ScoringError> {
        let compound = self.analyzer.polarity_scores(text)?.compound;
        if compound.is_nan() {
            return Err(ScoringError::InvalidScore(compound));
        }
        Ok((compound, SentimentLabel::from_compound(compound)))
    }

    /// 为所有记录评分
    ///
    /// 任意一条记录评分失败即整体失败，不返回部分结果
    ///
    /// # 参数
    ///
    /// * `records` - 清洗后的记录
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<ScoredRecord>)` - 与输入顺序一致的评分结果
    /// * `Err(ScoringError)` - 第一条失败记录的错误
    pub fn score(&self, records: &[CleanedRecord]) -> Result<Vec<ScoredRecord>, ScoringError> {
        let scored = records
            .iter()
            .cloned()
            .map(|record| {
                let (compound, _) = self.score_text(&record.clean_text)?;
                Ok(ScoredRecord::from_cleaned(record, compound))
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        info!(
            analyzer = self.analyzer.name(),
            scored = scored.len(),
            "Scored records"
        );

        Ok(scored)
    }
}

#[cfg(test)]
#[path = "sentiment_scorer_test.rs"]
mod tests;
