//! 文件夹存储
//!
//! 管理环境变量文件夹（根目录下的子目录，每个文件夹持有一份
//! `env.json` 文档），支持：
//! - 枚举、创建、删除、切换文件夹
//! - 文件夹名非法字符替换
//! - `default` 文件夹保护（始终存在，不可删除）
//!
//! "当前文件夹" 指针是进程级状态，由本结构显式持有（不依赖全局
//! 单例），启动时始终指向 `default`，不跨重启持久化。

use crate::data::{DataError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

/// 默认文件夹名，始终存在且不可删除
pub const DEFAULT_FOLDER: &str = "default";

/// 每个文件夹内的环境变量文档文件名
pub const ENV_FILE_NAME: &str = "env.json";

/// 文件夹名中需要替换为 `_` 的非法字符
const FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// 文件夹存储
///
/// 文件夹与根目录下的子目录一一对应。
pub struct FolderStore {
    /// 根目录（所有文件夹的父目录）
    root: PathBuf,
    /// 当前文件夹指针
    current: RwLock<String>,
}

impl FolderStore {
    /// 创建文件夹存储，当前文件夹指向 `default`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            current: RwLock::new(DEFAULT_FOLDER.to_string()),
        }
    }

    /// 启动初始化：确保根目录和 `default` 文件夹存在
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DataError::io(self.root.clone(), e))?;
        self.ensure_folder(DEFAULT_FOLDER).await
    }

    /// 存储根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 文件夹对应的目录路径
    pub fn folder_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// 当前文件夹的 `env.json` 路径
    pub async fn current_env_path(&self) -> PathBuf {
        self.folder_path(&self.current().await).join(ENV_FILE_NAME)
    }

    /// 当前文件夹名（永不失败）
    pub async fn current(&self) -> String {
        self.current.read().await.clone()
    }

    /// 枚举所有文件夹（字典序）
    ///
    /// 只统计根目录下的子目录。枚举失败时记录警告并回退为
    /// `["default"]`，不向上传播错误，保证应用总能启动。
    pub async fn list(&self) -> Vec<String> {
        match self.read_folder_names().await {
            Ok(mut names) => {
                names.sort();
                names
            }
            Err(e) => {
                tracing::warn!(error = %e, "枚举文件夹失败，回退为 default");
                vec![DEFAULT_FOLDER.to_string()]
            }
        }
    }

    /// 创建文件夹
    ///
    /// 名称去除首尾空白后不能为空；非法字符替换为 `_`。创建是
    /// 幂等的：文件夹已存在时不改写其中的任何数据（已有的
    /// `env.json` 保持原样，只在缺失时初始化为空文档）。
    ///
    /// 返回替换后的实际文件夹名。
    pub async fn create(&self, name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DataError::Validation("文件夹名称不能为空".to_string()));
        }

        let sanitized = sanitize_name(trimmed);
        self.ensure_folder(&sanitized).await?;

        tracing::info!(folder = %sanitized, "文件夹已创建");
        Ok(sanitized)
    }

    /// 删除文件夹（递归删除其目录）
    ///
    /// `default` 文件夹不可删除。若被删除的文件夹是当前文件夹，
    /// 当前指针重置为 `default`。
    pub async fn delete(&self, name: &str) -> Result<()> {
        if name == DEFAULT_FOLDER {
            return Err(DataError::Validation("无法删除 default 文件夹".to_string()));
        }

        let dir = self.folder_path(name);
        if fs::metadata(&dir).await.is_err() {
            return Err(DataError::NotFound("文件夹不存在".to_string()));
        }

        fs::remove_dir_all(&dir)
            .await
            .map_err(|e| DataError::io(dir.clone(), e))?;

        let mut current = self.current.write().await;
        if *current == name {
            *current = DEFAULT_FOLDER.to_string();
        }

        tracing::info!(folder = %name, "文件夹已删除");
        Ok(())
    }

    /// 切换当前文件夹
    ///
    /// 目标文件夹必须已存在，切换不会隐式创建。
    pub async fn switch_to(&self, name: &str) -> Result<()> {
        let dir = self.folder_path(name);
        if fs::metadata(&dir).await.is_err() {
            return Err(DataError::NotFound("文件夹不存在".to_string()));
        }

        let mut current = self.current.write().await;
        *current = name.to_string();

        tracing::debug!(folder = %name, "已切换当前文件夹");
        Ok(())
    }

    /// 确保文件夹目录存在，且 `env.json` 缺失时初始化为空文档
    async fn ensure_folder(&self, name: &str) -> Result<()> {
        let dir = self.folder_path(name);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| DataError::io(dir.clone(), e))?;

        let env_file = dir.join(ENV_FILE_NAME);
        if fs::metadata(&env_file).await.is_err() {
            fs::write(&env_file, "{}")
                .await
                .map_err(|e| DataError::io(env_file.clone(), e))?;
        }
        Ok(())
    }

    async fn read_folder_names(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| DataError::io(self.root.clone(), e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DataError::io(self.root.clone(), e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| DataError::io(entry.path(), e))?;
            if file_type.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

/// 替换文件夹名中的非法文件系统字符
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
