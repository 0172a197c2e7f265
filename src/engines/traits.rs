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
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    /// 非 2xx 响应
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    /// 响应体不是 JSON 数组
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// 数据源地址无效
    #[error("Invalid source url {url}: {message}")]
    InvalidUrl { url: String, message: String },
}

/// 抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 数据源URL
    pub url: String,
    /// 超时时间
    pub timeout: Duration,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

/// 记录数据源特质
///
/// 给定地址返回 JSON 数组的全部元素，元素本身不做校验；失败时不返回部分结果
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Value>, FetchError>;

    /// 数据源名称
    fn name(&self) -> &'static str;
}
