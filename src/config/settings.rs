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

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

/// 默认数据源
pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
/// 默认批量上限
pub const DEFAULT_LIMIT: usize = 20;
/// 默认最小文本长度
pub const DEFAULT_MIN_CHARS: usize = 40;
/// 默认输出目录
pub const DEFAULT_OUTPUT_DIR: &str = "artifacts";
/// 默认明细表文件名
pub const DEFAULT_DETAIL_FILENAME: &str = "scraped_posts.csv";
/// 默认汇总表文件名
pub const DEFAULT_REPORT_FILENAME: &str = "sentiment_report.csv";
/// 默认请求超时时间（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 配置加载失败
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// 配置校验失败
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 抓取流水线配置
    pub scraper: ScraperSettings,
}

/// 抓取流水线配置设置
///
/// 构造后不可变，各阶段只读取其中的字段
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ScraperSettings {
    /// 数据源地址
    #[validate(url)]
    pub source_url: String,
    /// 单次抓取保留的最大记录数
    #[validate(range(min = 1))]
    pub limit: usize,
    /// 最小清洗后文本长度（字符数），0 表示不过滤
    pub min_chars: usize,
    /// 输出目录
    pub output_dir: PathBuf,
    /// 明细表文件名
    #[validate(length(min = 1))]
    pub detail_filename: String,
    /// 汇总表文件名
    #[validate(length(min = 1))]
    pub report_filename: String,
    /// 请求超时时间（秒）
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            min_chars: DEFAULT_MIN_CHARS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            detail_filename: DEFAULT_DETAIL_FILENAME.to_string(),
            report_filename: DEFAULT_REPORT_FILENAME.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ScraperSettings {
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_filenames(
        mut self,
        detail_filename: impl Into<String>,
        report_filename: impl Into<String>,
    ) -> Self {
        self.detail_filename = detail_filename.into();
        self.report_filename = report_filename.into();
        self
    }

    /// 请求超时时间
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// 解析输出目录为绝对路径
    ///
    /// 展开 `~` 前缀，相对路径基于当前工作目录，并按词法规则消除 `.` 与 `..`。
    /// 不会访问或创建任何目录，多次调用结果一致。
    ///
    /// # 返回值
    ///
    /// * `Ok(PathBuf)` - 绝对输出目录
    /// * `Err(std::io::Error)` - 无法获取当前工作目录
    pub fn resolved_output_dir(&self) -> std::io::Result<PathBuf> {
        let expanded = expand_home(&self.output_dir);
        let absolute = std::path::absolute(expanded)?;
        Ok(normalize_lexically(&absolute))
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `XSCRAPER__` 前缀的环境变量，然后进行校验
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载或校验失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("scraper.source_url", DEFAULT_SOURCE_URL)?
            .set_default("scraper.limit", DEFAULT_LIMIT as u64)?
            .set_default("scraper.min_chars", DEFAULT_MIN_CHARS as u64)?
            .set_default("scraper.output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("scraper.detail_filename", DEFAULT_DETAIL_FILENAME)?
            .set_default("scraper.report_filename", DEFAULT_REPORT_FILENAME)?
            .set_default("scraper.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("XSCRAPER")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.scraper.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
