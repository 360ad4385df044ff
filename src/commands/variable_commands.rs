// 环境变量相关命令

use crate::commands::types::MutationResult;
use crate::commands::AppState;
use crate::data::EnvMap;

/// 加载当前文件夹的全部环境变量
pub async fn load_env_vars(state: &AppState) -> Result<EnvMap, String> {
    state.repository.read().await.map_err(|e| e.to_string())
}

/// 保存单个环境变量（已存在则覆盖）
pub async fn save_env_var(
    state: &AppState,
    key: &str,
    value: &str,
) -> Result<MutationResult, String> {
    state
        .repository
        .set_variable(key, value)
        .await
        .map_err(|e| e.to_string())?;
    Ok(MutationResult {
        success: true,
        message: "环境变量已保存".to_string(),
    })
}

/// 更新或重命名单个环境变量
pub async fn update_env_var(
    state: &AppState,
    old_key: &str,
    new_key: &str,
    new_value: &str,
) -> Result<MutationResult, String> {
    state
        .repository
        .rename_or_update_variable(old_key, new_key, new_value)
        .await
        .map_err(|e| e.to_string())?;
    Ok(MutationResult {
        success: true,
        message: "环境变量已更新".to_string(),
    })
}

/// 删除单个环境变量
pub async fn delete_env_var(state: &AppState, key: &str) -> Result<MutationResult, String> {
    state
        .repository
        .delete_variable(key)
        .await
        .map_err(|e| e.to_string())?;
    Ok(MutationResult {
        success: true,
        message: "环境变量已删除".to_string(),
    })
}
