// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use super::sentiment::SentimentLabel;

/// 记录格式错误
///
/// 原始记录的文本字段不是标量（例如嵌套对象或数组）时返回
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedRecordError {
    /// 原始值不是 JSON 对象
    #[error("record is not a JSON object: {0}")]
    NotAnObject(String),
    /// 文本字段不是文本
    #[error("field `{field}` is not text: {value}")]
    NonTextField { field: String, value: String },
}

/// 原始记录
///
/// 数据源返回的任意 JSON 对象，没有必需字段。
/// 缺失字段通过显式访问器给出默认值，下游阶段无需关心字段是否存在。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// 从任意 JSON 值构造原始记录
    ///
    /// # 参数
    ///
    /// * `value` - 必须是 JSON 对象
    ///
    /// # 返回值
    ///
    /// * `Ok(RawRecord)` - 原始记录
    /// * `Err(MalformedRecordError)` - 值不是对象
    pub fn from_value(value: Value) -> Result<Self, MalformedRecordError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(MalformedRecordError::NotAnObject(other.to_string())),
        }
    }

    /// 记录标识，缺失或为 null 时返回 None
    pub fn id(&self) -> Option<RecordId> {
        match self.0.get("id") {
            None | Some(Value::Null) => None,
            Some(value) => Some(RecordId(value.clone())),
        }
    }

    /// 读取文本字段
    ///
    /// 缺失或为 null 的字段返回空字符串；数字与布尔值按 JSON 文本形式返回（`true`、`2.5`）
    pub fn text_field(&self, field: &str) -> Result<String, MalformedRecordError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(other) => Err(MalformedRecordError::NonTextField {
                field: field.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// 记录标识
///
/// 不透明的标量值，按原样写出（字符串不带引号）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Value);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(Value::from(id))
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(Value::from(id))
    }
}

/// 规范化记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub id: Option<RecordId>,
    pub title: String,
    pub body: String,
    /// `title` + 换行 + `body`，去掉首尾空白
    pub content: String,
}

impl NormalizedRecord {
    pub fn new(id: Option<RecordId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        let title = title.into();
        let body = body.into();
        let content = merge_fields(&title, &body);
        Self {
            id,
            title,
            body,
            content,
        }
    }

    /// 将原始记录投影为规范化记录
    pub fn from_raw(raw: &RawRecord) -> Result<Self, MalformedRecordError> {
        Ok(Self::new(
            raw.id(),
            raw.text_field("title")?,
            raw.text_field("body")?,
        ))
    }
}

/// 合并标题与正文，仅去掉首尾空白，内部空白保持不变
pub fn merge_fields(title: &str, body: &str) -> String {
    format!("{}\n{}", title, body).trim().to_string()
}

/// 清洗后的记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedRecord {
    pub id: Option<RecordId>,
    pub title: String,
    pub body: String,
    pub content: String,
    /// 折叠空白后的文本
    pub clean_text: String,
}

impl CleanedRecord {
    pub fn from_normalized(record: NormalizedRecord, clean_text: String) -> Self {
        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            content: record.content,
            clean_text,
        }
    }

    /// 清洗后文本的字符数
    pub fn clean_len(&self) -> usize {
        self.clean_text.chars().count()
    }
}

/// 已评分的记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    pub id: Option<RecordId>,
    pub title: String,
    pub body: String,
    pub content: String,
    pub clean_text: String,
    pub sentiment_score: f64,
    pub sentiment: SentimentLabel,
}

impl ScoredRecord {
    /// 明细表列名，顺序即输出顺序
    pub const COLUMNS: [&'static str; 7] = [
        "id",
        "title",
        "body",
        "content",
        "clean_text",
        "sentiment_score",
        "sentiment",
    ];

    pub fn from_cleaned(record: CleanedRecord, sentiment_score: f64) -> Self {
        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            content: record.content,
            clean_text: record.clean_text,
            sentiment_score,
            sentiment: SentimentLabel::from_compound(sentiment_score),
        }
    }

    /// 按 `COLUMNS` 顺序渲染为一行文本
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            self.title.clone(),
            self.body.clone(),
            self.content.clone(),
            self.clean_text.clone(),
            // Debug keeps a trailing `.0` on whole numbers
            format!("{:?}", self.sentiment_score),
            self.sentiment.to_string(),
        ]
    }
}
