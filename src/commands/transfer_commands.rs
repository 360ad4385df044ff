// 导入/导出相关命令

use crate::commands::types::{ExportOptions, ExportResult, ImportOptions, ImportResult};
use crate::commands::AppState;
use crate::services::transfer;

/// 导出当前文件夹的环境变量
///
/// 直接模式写入 `<下载目录>/<当前文件夹>.env`；交互模式写入 UI 层
/// 选中的路径，未选中（用户取消）时返回 `success: false`，不算错误。
pub async fn export_env_vars(
    state: &AppState,
    options: ExportOptions,
) -> Result<ExportResult, String> {
    let file_path = if options.direct_export {
        let folder = state.store.current().await;
        transfer::default_export_path(&folder).map_err(|e| e.to_string())?
    } else {
        match options.file_path {
            Some(path) => path,
            None => {
                return Ok(ExportResult {
                    success: false,
                    message: "导出已取消".to_string(),
                    file_path: None,
                })
            }
        }
    };

    transfer::export_to(&state.repository, &file_path)
        .await
        .map_err(|e| e.to_string())?;

    Ok(ExportResult {
        success: true,
        message: "环境变量导出成功".to_string(),
        file_path: Some(file_path.to_string_lossy().into_owned()),
    })
}

/// 导入环境变量到当前文件夹
///
/// 直接模式必须给出来源路径；交互模式下 `None` 表示用户取消，
/// 返回 `success: false`，不算错误。
pub async fn import_env_vars(
    state: &AppState,
    options: ImportOptions,
) -> Result<ImportResult, String> {
    let file_path = match options.file_path {
        Some(path) => path,
        None => {
            if options.direct_import {
                return Err("未指定导入文件路径".to_string());
            }
            return Ok(ImportResult {
                success: false,
                message: "导入已取消".to_string(),
                imported_count: 0,
            });
        }
    };

    let imported_count = transfer::import_from(&state.repository, &file_path)
        .await
        .map_err(|e| e.to_string())?;

    Ok(ImportResult {
        success: true,
        message: "环境变量导入成功".to_string(),
        imported_count,
    })
}
