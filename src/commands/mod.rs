//! 命令层
//!
//! UI 层消费的全部表面操作。每个命令返回 `Result<Payload, String>`：
//! 成功时返回可序列化的载荷，失败时返回人类可读的错误消息，由
//! UI 层展示为临时通知。命令内部把 `DataError` 统一转为字符串，
//! 不向外抛出结构化错误。
//!
//! 所有命令显式接收 `AppState`（依赖注入），不依赖全局单例。

pub mod folder_commands;
pub mod transfer_commands;
pub mod types;
pub mod variable_commands;

// 重新导出所有命令函数
pub use folder_commands::*;
pub use transfer_commands::*;
pub use types::*;
pub use variable_commands::*;

use crate::data::{FolderStore, VariableRepository};
use crate::utils::paths;
use std::path::PathBuf;
use std::sync::Arc;

/// 应用状态
///
/// 持有文件夹存储与变量仓库，启动时创建一次并显式传入各命令。
pub struct AppState {
    pub store: Arc<FolderStore>,
    pub repository: VariableRepository,
}

impl AppState {
    /// 以指定根目录创建应用状态
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let store = Arc::new(FolderStore::new(root));
        let repository = VariableRepository::new(Arc::clone(&store));
        Self { store, repository }
    }

    /// 以默认数据根目录（`~/.envkeeper/environments`）创建应用状态
    pub fn with_default_root() -> Result<Self, String> {
        Ok(Self::new(paths::environments_dir()?))
    }

    /// 启动初始化：确保根目录与 `default` 文件夹存在
    pub async fn initialize(&self) -> Result<(), String> {
        self.store.initialize().await.map_err(|e| e.to_string())?;
        tracing::info!(root = %self.store.root().display(), "EnvKeeper 数据层已就绪");
        Ok(())
    }
}
