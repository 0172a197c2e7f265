// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 写入错误类型
#[derive(Error, Debug)]
pub enum IoWriteError {
    /// 无法解析输出目录
    #[error("Failed to resolve output directory: {0}")]
    Resolve(#[source] std::io::Error),
    /// 无法创建目录
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 无法写入文件
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 表格编码失败
    #[error("Failed to encode table for {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// 文本表格
///
/// 一行表头加若干数据行，每行的单元格数与表头一致
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(columns: &[S], rows: Vec<Vec<String>>) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 表格存储特质
///
/// 定义输出表格的持久化接口，写入总是覆盖已有文件
#[async_trait]
pub trait TableStorage: Send + Sync {
    /// 确保目录存在（包括所有父目录），已存在时直接返回
    async fn ensure_dir(&self, path: &Path) -> Result<(), IoWriteError>;

    /// 将表格写入指定路径，覆盖已有内容
    async fn write_table(&self, path: &Path, table: &Table) -> Result<(), IoWriteError>;
}
