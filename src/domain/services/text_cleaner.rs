// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::config::settings::ScraperSettings;
use crate::domain::models::record::{CleanedRecord, NormalizedRecord};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// 将每段连续空白折叠为单个空格并去掉首尾空白
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// 文本清洗服务
///
/// 纯函数式转换：不访问网络或存储，相同输入总是得到相同输出
#[derive(Debug, Clone, Copy)]
pub struct TextCleaner {
    /// 最小文本长度（字符数），0 表示不过滤
    min_chars: usize,
}

impl TextCleaner {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    pub fn from_settings(settings: &ScraperSettings) -> Self {
        Self::new(settings.min_chars)
    }

    /// 清洗并过滤记录
    ///
    /// 丢弃清洗后长度小于 `min_chars` 的记录，幸存记录保持原有相对顺序
    pub fn clean(&self, records: &[NormalizedRecord]) -> Vec<CleanedRecord> {
        let cleaned: Vec<CleanedRecord> = records
            .iter()
            .cloned()
            .map(|record| {
                let clean_text = collapse_whitespace(&record.content);
                CleanedRecord::from_normalized(record, clean_text)
            })
            .filter(|record| {
                let keep = self.keeps(record);
                if !keep {
                    debug!(
                        id = ?record.id,
                        length = record.clean_len(),
                        min_chars = self.min_chars,
                        "Dropping short record"
                    );
                }
                keep
            })
            .collect();

        info!(
            received = records.len(),
            kept = cleaned.len(),
            dropped = records.len() - cleaned.len(),
            "Cleaned records"
        );

        cleaned
    }

    fn keeps(&self, record: &CleanedRecord) -> bool {
        self.min_chars == 0 || record.clean_len() >= self.min_chars
    }
}

#[cfg(test)]
#[path = "text_cleaner_test.rs"]
mod tests;
