//! 统一错误类型定义
//!
//! 使用 `thiserror` 定义数据层的所有错误类型，并提供与 `anyhow` 的兼容层。

use std::path::PathBuf;
use thiserror::Error;

/// 数据层的统一错误类型
#[derive(Error, Debug)]
pub enum DataError {
    /// 参数校验失败（空的文件夹名、空的键等）
    #[error("{0}")]
    Validation(String),

    /// 资源未找到（文件夹、变量或文件不存在）
    #[error("{0}")]
    NotFound(String),

    /// 键冲突（重命名目标键已存在）
    #[error("{0}")]
    Conflict(String),

    /// 文件 I/O 错误
    #[error("文件 I/O 错误: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 序列化/反序列化错误
    #[error("JSON 序列化错误: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// 便于与现有代码集成的类型别名
pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    /// 从 `std::io::Error` 和路径创建 I/O 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
