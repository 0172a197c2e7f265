// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::ScoredRecord;

/// 正向阈值（含）
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// 负向阈值（含）
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// 情感标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// 根据复合分数判定标签
    ///
    /// `c >= 0.05` 为正向，`c <= -0.05` 为负向，其余为中性
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 评分引擎的输出
///
/// `neg`/`neu`/`pos` 为各极性所占比例，`compound` 为归一化到 [-1, 1] 的综合分数
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// 单个标签的计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub sentiment: SentimentLabel,
    pub count: usize,
}

/// 情感汇总表
///
/// 每个出现过的标签一行，按计数降序排列，计数相同则按首次出现顺序
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SentimentSummary {
    pub rows: Vec<SentimentCount>,
}

impl SentimentSummary {
    /// 汇总表列名
    pub const COLUMNS: [&'static str; 2] = ["sentiment", "count"];

    pub fn from_records(records: &[ScoredRecord]) -> Self {
        let mut rows: Vec<SentimentCount> = Vec::new();
        for record in records {
            match rows.iter_mut().find(|row| row.sentiment == record.sentiment) {
                Some(row) => row.count += 1,
                None => rows.push(SentimentCount {
                    sentiment: record.sentiment,
                    count: 1,
                }),
            }
        }
        // stable sort keeps first-appearance order among equal counts
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        Self { rows }
    }

    /// 指定标签的计数，未出现时为 0
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.rows
            .iter()
            .find(|row| row.sentiment == label)
            .map(|row| row.count)
            .unwrap_or(0)
    }

    /// 所有标签计数之和
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| vec![row.sentiment.to_string(), row.count.to_string()])
            .collect()
    }
}
