//! # Execution Store Module / 执行存储模块
//!
//! This module persists a completed [`TestExecution`] as a JSON document and
//! loads it back. The JSON file is the canonical interchange format between
//! the recording half of the pipeline and the report generator.
//!
//! 此模块将完成的 [`TestExecution`] 持久化为 JSON 文档并将其加载回来。
//! JSON 文件是管道的记录端与报告生成器之间的规范交换格式。

use crate::core::models::TestExecution;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Failure conditions of the store. Not-found and malformed-document are
/// deliberately distinct: callers report them differently, and a malformed
/// document must never be silently patched with defaults.
///
/// 存储的失败情况。not-found 与 malformed-document 被刻意区分开：
/// 调用方以不同方式报告它们，且格式错误的文档绝不能被默默地用默认值修补。
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("test execution document not found: {0}")]
    NotFound(PathBuf),
    #[error("malformed test execution document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode test execution document")]
    Encode(#[source] serde_json::Error),
    #[error("i/o failure on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Serializes `execution` as pretty-printed JSON and writes it to `path`,
/// fully replacing any existing file. The document is written to a temporary
/// file in the destination directory and renamed into place, so readers never
/// observe a partially written file.
///
/// 将 `execution` 序列化为带缩进的 JSON 并写入 `path`，完全替换已存在的文件。
/// 文档先写入目标目录中的临时文件再重命名就位，因此读取方不会观察到写了一半的文件。
pub fn save_execution(execution: &TestExecution, path: &Path) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(execution).map_err(StoreError::Encode)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(dir).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(temp.path(), json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    temp.persist(path).map_err(|error| StoreError::Io {
        path: path.to_path_buf(),
        source: error.error,
    })?;
    Ok(())
}

/// Reads and deserializes the execution document at `path`.
/// 读取并反序列化位于 `path` 的执行文档。
pub fn load_execution(path: &Path) -> Result<TestExecution, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
