// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::config::settings::ConfigError;
use crate::domain::models::record::MalformedRecordError;
use crate::domain::repositories::table_storage::IoWriteError;
use crate::domain::services::sentiment_scorer::ScoringError;
use crate::engines::traits::FetchError;

/// 流水线错误类型
///
/// 汇总各阶段的错误，任何阶段失败都会立即终止本次运行
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("抓取失败: {0}")]
    Fetch(#[from] FetchError),

    #[error("记录格式错误: {0}")]
    MalformedRecord(#[from] MalformedRecordError),

    #[error("情感评分失败: {0}")]
    Scoring(#[from] ScoringError),

    #[error("写入失败: {0}")]
    IoWrite(#[from] IoWriteError),
}
