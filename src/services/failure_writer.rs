//! 失败记录服务 - 业务能力层
//!
//! 只负责"把提交失败的草稿写进记录文件"，不关心流程

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 失败记录服务
///
/// 每行一条：草稿名称 | 原因
pub struct FailureWriter {
    file_path: String,
}

impl FailureWriter {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.file_path
    }

    /// 追加一条失败记录
    pub async fn write(&self, draft_name: &str, reason: &str) -> AppResult<()> {
        debug!("写入失败记录: {} | {}", draft_name, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .await
            .map_err(|e| AppError::file_write_failed(&self.file_path, e))?;

        let line = format!("草稿 {} | 原因: {}\n", draft_name, reason);

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| AppError::file_write_failed(&self.file_path, e))?;

        Ok(())
    }
}
