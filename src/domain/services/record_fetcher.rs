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
use crate::domain::models::record::{NormalizedRecord, RawRecord};
use crate::engines::traits::{FetchRequest, RecordSource};
use crate::utils::errors::PipelineError;

/// 记录抓取服务
///
/// 调用数据源，按批量上限截断，并将每条原始记录投影为规范化记录
pub struct RecordFetcher {
    /// 数据源
    source: Arc<dyn RecordSource>,
    /// 抓取请求
    request: FetchRequest,
    /// 批量上限
    limit: usize,
}

impl RecordFetcher {
    /// 创建新的抓取服务实例
    ///
    /// # 参数
    ///
    /// * `source` - 数据源实现
    /// * `settings` - 流水线配置
    pub fn new(source: Arc<dyn RecordSource>, settings: &ScraperSettings) -> Self {
        Self {
            source,
            request: FetchRequest::new(settings.source_url.clone(), settings.request_timeout()),
            limit: settings.limit,
        }
    }

    /// 抓取并规范化记录
    ///
    /// 数据源返回的记录少于上限时全部保留；超出上限的元素不做校验。
    /// 任何错误都不会返回部分结果
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<NormalizedRecord>)` - 按源顺序排列的规范化记录
    /// * `Err(PipelineError)` - 抓取失败或记录格式错误
    pub async fn fetch(&self) -> Result<Vec<NormalizedRecord>, PipelineError> {
        let values = self.source.fetch(&self.request).await?;
        let fetched = values.len();

        let records = values
            .into_iter()
            .take(self.limit)
            .map(|value| {
                let raw = RawRecord::from_value(value)?;
                NormalizedRecord::from_raw(&raw)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            source = self.source.name(),
            url = %self.request.url,
            fetched,
            kept = records.len(),
            limit = self.limit,
            "Fetched records"
        );

        Ok(records)
    }
}

#[cfg(test)]
#[path = "record_fetcher_test.rs"]
mod tests;
