// 文件夹管理相关命令

use crate::commands::types::{FolderResult, MutationResult};
use crate::commands::AppState;

/// 获取全部文件夹（字典序）
pub async fn get_folders(state: &AppState) -> Result<Vec<String>, String> {
    Ok(state.store.list().await)
}

/// 获取当前文件夹名
pub async fn get_current_folder(state: &AppState) -> Result<String, String> {
    Ok(state.store.current().await)
}

/// 创建文件夹，返回替换非法字符后的实际名称
pub async fn create_folder(state: &AppState, folder_name: &str) -> Result<FolderResult, String> {
    let sanitized = state
        .store
        .create(folder_name)
        .await
        .map_err(|e| e.to_string())?;
    Ok(FolderResult {
        success: true,
        folder_name: sanitized,
    })
}

/// 删除文件夹（递归删除，不可恢复；确认交互由 UI 层负责）
pub async fn delete_folder(state: &AppState, folder_name: &str) -> Result<MutationResult, String> {
    state
        .store
        .delete(folder_name)
        .await
        .map_err(|e| e.to_string())?;
    Ok(MutationResult {
        success: true,
        message: "文件夹已删除".to_string(),
    })
}

/// 切换当前文件夹
pub async fn switch_folder(state: &AppState, folder_name: &str) -> Result<FolderResult, String> {
    state
        .store
        .switch_to(folder_name)
        .await
        .map_err(|e| e.to_string())?;
    Ok(FolderResult {
        success: true,
        folder_name: folder_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn new_state() -> (TempDir, AppState) {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState::new(temp_dir.path().join("environments"));
        state.initialize().await.unwrap();
        (temp_dir, state)
    }

    #[tokio::test]
    async fn test_folder_lifecycle() {
        let (_guard, state) = new_state().await;

        let created = create_folder(&state, "work").await.unwrap();
        assert!(created.success);
        assert_eq!(created.folder_name, "work");

        let switched = switch_folder(&state, "work").await.unwrap();
        assert!(switched.success);
        assert_eq!(get_current_folder(&state).await.unwrap(), "work");

        let folders = get_folders(&state).await.unwrap();
        assert_eq!(folders, vec!["default", "work"]);

        let deleted = delete_folder(&state, "work").await.unwrap();
        assert!(deleted.success);
        assert_eq!(get_current_folder(&state).await.unwrap(), "default");
    }

    #[tokio::test]
    async fn test_errors_surface_as_messages() {
        let (_guard, state) = new_state().await;

        // 错误以消息字符串的形式跨越命令边界
        let err = delete_folder(&state, "default").await.unwrap_err();
        assert_eq!(err, "无法删除 default 文件夹");

        let err = switch_folder(&state, "nonexistent").await.unwrap_err();
        assert_eq!(err, "文件夹不存在");

        let err = create_folder(&state, "   ").await.unwrap_err();
        assert_eq!(err, "文件夹名称不能为空");
    }
}
