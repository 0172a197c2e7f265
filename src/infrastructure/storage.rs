// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::domain::repositories::table_storage::{IoWriteError, Table, TableStorage};

/// 本地 CSV 文件存储实现
///
/// 表头行在前，字段按标准 CSV 规则加引号，写入时覆盖已有文件
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCsvStorage;

impl LocalCsvStorage {
    pub fn new() -> Self {
        Self
    }

    /// 将表格编码为 CSV 字节
    pub fn encode(path: &Path, table: &Table) -> Result<Vec<u8>, IoWriteError> {
        let encode_error = |message: String| IoWriteError::Encode {
            path: path.to_path_buf(),
            message,
        };

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer
            .write_record(&table.columns)
            .map_err(|e| encode_error(e.to_string()))?;
        for row in &table.rows {
            writer
                .write_record(row)
                .map_err(|e| encode_error(e.to_string()))?;
        }
        writer
            .into_inner()
            .map_err(|e| encode_error(e.to_string()))
    }
}

#[async_trait]
impl TableStorage for LocalCsvStorage {
    async fn ensure_dir(&self, path: &Path) -> Result<(), IoWriteError> {
        fs::create_dir_all(path)
            .await
            .map_err(|source| IoWriteError::CreateDir {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn write_table(&self, path: &Path, table: &Table) -> Result<(), IoWriteError> {
        let bytes = Self::encode(path, table)?;

        // 确保目录存在
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent).await?;
        }

        fs::write(path, &bytes)
            .await
            .map_err(|source| IoWriteError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), rows = table.len(), bytes = bytes.len(), "Table written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
