// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use tracing::info;

use crate::config::settings::ScraperSettings;
use crate::domain::models::record::ScoredRecord;
use crate::domain::models::report::ReportPaths;
use crate::domain::models::sentiment::SentimentSummary;
use crate::domain::repositories::table_storage::{IoWriteError, Table, TableStorage};

/// 报告生成服务
///
/// 写出明细表与情感汇总表。两次写入不是事务性的：
/// 汇总表写入失败时，已写出的明细表会保留。
pub struct ReportGenerator {
    /// 表格存储
    storage: Arc<dyn TableStorage>,
    /// 流水线配置
    settings: ScraperSettings,
}

impl ReportGenerator {
    pub fn new(storage: Arc<dyn TableStorage>, settings: &ScraperSettings) -> Self {
        Self {
            storage,
            settings: settings.clone(),
        }
    }

    /// 生成报告
    ///
    /// # 参数
    ///
    /// * `records` - 已评分的记录
    ///
    /// # 返回值
    ///
    /// * `Ok(ReportPaths)` - 两个输出文件的绝对路径
    /// * `Err(IoWriteError)` - 目录创建或文件写入失败
    pub async fn generate(&self, records: &[ScoredRecord]) -> Result<ReportPaths, IoWriteError> {
        let output_dir = self
            .settings
            .resolved_output_dir()
            .map_err(IoWriteError::Resolve)?;
        self.storage.ensure_dir(&output_dir).await?;

        let detail_csv = output_dir.join(&self.settings.detail_filename);
        let detail = detail_table(records);
        self.storage.write_table(&detail_csv, &detail).await?;

        let summary = SentimentSummary::from_records(records);
        let sentiment_report_csv = output_dir.join(&self.settings.report_filename);
        let summary_table = Table::new(&SentimentSummary::COLUMNS, summary.to_rows());
        self.storage
            .write_table(&sentiment_report_csv, &summary_table)
            .await?;

        info!(
            detail_path = %detail_csv.display(),
            summary_path = %sentiment_report_csv.display(),
            rows = detail.len(),
            labels = summary_table.len(),
            "Reports written"
        );

        Ok(ReportPaths {
            detail_csv,
            sentiment_report_csv,
        })
    }
}

/// 构建明细表
pub fn detail_table(records: &[ScoredRecord]) -> Table {
    Table::new(
        &ScoredRecord::COLUMNS,
        records.iter().map(ScoredRecord::to_row).collect(),
    )
}

#[cfg(test)]
#[path = "report_generator_test.rs"]
mod tests;
