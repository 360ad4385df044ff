//! 统一数据管理模块
//!
//! 提供环境变量数据层的全部实现：
//!
//! - `error`: 统一错误类型定义
//! - `codec`: ENV 文本编解码器（解析/序列化/内容嗅探）
//! - `folder_store`: 文件夹存储（枚举/创建/删除/切换）
//! - `repository`: 环境变量仓库（当前文件夹文档的读写与单键操作）

pub mod codec;
pub mod error;
pub mod folder_store;
pub mod repository;

pub use error::{DataError, Result};
pub use folder_store::{FolderStore, DEFAULT_FOLDER};
pub use repository::{EnvMap, VariableRepository};
