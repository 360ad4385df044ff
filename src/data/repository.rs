//! 环境变量仓库
//!
//! 读写当前文件夹的环境变量文档（`env.json`，string→string 的
//! JSON 对象，格式化输出），并在其上提供单变量的增删改操作。
//!
//! 每个变更操作都是一次 读取-修改-写回 序列，不加锁：单用户桌面
//! 场景下并发写入以最后写入为准（已知限制）。

use crate::data::folder_store::FolderStore;
use crate::data::{DataError, Result};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::sync::Arc;
use tokio::fs;

/// 一个文件夹的环境变量映射（键唯一，值可为空字符串）
pub type EnvMap = BTreeMap<String, String>;

/// 环境变量仓库
///
/// 始终作用于 `FolderStore` 的当前文件夹。
pub struct VariableRepository {
    store: Arc<FolderStore>,
}

impl VariableRepository {
    /// 创建仓库，绑定到指定的文件夹存储
    pub fn new(store: Arc<FolderStore>) -> Self {
        Self { store }
    }

    /// 读取当前文件夹的全部环境变量
    ///
    /// 文档不存在时返回空映射（首次使用场景，不算错误）；
    /// 其他 I/O 失败或 JSON 解析失败向上传播。
    pub async fn read(&self) -> Result<EnvMap> {
        let path = self.store.current_env_path().await;

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(EnvMap::new()),
            Err(e) => return Err(DataError::io(path, e)),
        };

        let vars: EnvMap = serde_json::from_str(&content)?;
        Ok(vars)
    }

    /// 整体写回当前文件夹的环境变量文档（完全覆盖）
    pub async fn write(&self, vars: &EnvMap) -> Result<()> {
        let path = self.store.current_env_path().await;
        let content = serde_json::to_string_pretty(vars)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DataError::io(parent.to_path_buf(), e))?;
        }

        fs::write(&path, content)
            .await
            .map_err(|e| DataError::io(path.clone(), e))?;
        Ok(())
    }

    /// 设置单个变量（键去除首尾空白，已存在则覆盖）
    pub async fn set_variable(&self, key: &str, value: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(DataError::Validation("键不能为空".to_string()));
        }

        let mut vars = self.read().await?;
        vars.insert(key.to_string(), value.to_string());
        self.write(&vars).await
    }

    /// 重命名或更新单个变量
    ///
    /// 键发生变化时先移除旧键，再检查新键是否已被占用（先移除
    /// 后检查，保证重命名为自身不会与自己冲突）。冲突时不写回，
    /// 磁盘上的文档保持不变。
    pub async fn rename_or_update_variable(
        &self,
        old_key: &str,
        new_key: &str,
        new_value: &str,
    ) -> Result<()> {
        let trimmed = new_key.trim();
        if trimmed.is_empty() {
            return Err(DataError::Validation("键不能为空".to_string()));
        }

        let mut vars = self.read().await?;

        if old_key != new_key {
            vars.remove(old_key);
            if vars.contains_key(trimmed) {
                return Err(DataError::Conflict("键已存在".to_string()));
            }
        }

        vars.insert(trimmed.to_string(), new_value.to_string());
        self.write(&vars).await
    }

    /// 删除单个变量
    pub async fn delete_variable(&self, key: &str) -> Result<()> {
        let mut vars = self.read().await?;

        if vars.remove(key).is_none() {
            return Err(DataError::NotFound("环境变量不存在".to_string()));
        }

        self.write(&vars).await
    }
}
