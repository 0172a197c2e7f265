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

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;
use url::Url;

use crate::engines::traits::{FetchError, FetchRequest, RecordSource};

const USER_AGENT: &str = concat!("x-scraper/", env!("CARGO_PKG_VERSION"));

/// 记录抓取引擎
///
/// 基于reqwest实现，单次 GET 请求获取 JSON 记录数组。
/// 客户端在多次抓取之间复用连接池。
#[derive(Debug, Clone)]
pub struct ReqwestRecordSource {
    client: reqwest::Client,
}

impl ReqwestRecordSource {
    /// 创建抓取引擎
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestRecordSource)` - 抓取引擎
    /// * `Err(FetchError)` - HTTP 客户端初始化失败
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// 使用已有客户端创建抓取引擎
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource for ReqwestRecordSource {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Value>)` - 响应数组中的全部元素
    /// * `Err(FetchError)` - 超时、非 2xx 状态或响应体格式错误
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Value>, FetchError> {
        let url = Url::parse(&request.url).map_err(|e| FetchError::InvalidUrl {
            url: request.url.clone(),
            message: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl {
                url: request.url.clone(),
                message: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        let timeout_error = |e: reqwest::Error| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: request.url.clone(),
                    timeout: request.timeout,
                }
            } else {
                FetchError::RequestFailed(e)
            }
        };

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .timeout(request.timeout)
            .send()
            .await
            .map_err(timeout_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(timeout_error)?;
        let records: Vec<Value> = serde_json::from_str(&body)?;

        debug!(
            url = %request.url,
            status = status.as_u16(),
            records = records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched raw records"
        );

        Ok(records)
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
