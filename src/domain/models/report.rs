// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::path::PathBuf;

/// 报告输出路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPaths {
    /// 明细表路径
    pub detail_csv: PathBuf,
    /// 情感汇总表路径
    pub sentiment_report_csv: PathBuf,
}
