// 命令层数据类型定义

use std::path::PathBuf;

/// 文件夹操作结果
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct FolderResult {
    pub success: bool,
    pub folder_name: String,
}

/// 变量变更结果
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct MutationResult {
    pub success: bool,
    pub message: String,
}

/// 导出结果
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>, // 实际写入的目标路径
}

/// 导入结果
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ImportResult {
    pub success: bool,
    pub message: String,
    pub imported_count: usize,
}

/// 导出选项
///
/// `direct_export` 为 true 时导出到下载目录的固定路径；否则
/// `file_path` 为 UI 层文件对话框选中的目标，`None` 表示用户取消。
#[derive(serde::Serialize, serde::Deserialize, Default)]
pub struct ExportOptions {
    pub direct_export: bool,
    pub file_path: Option<PathBuf>,
}

/// 导入选项
///
/// `direct_import` 为 true 时 `file_path` 必须给出；否则 `file_path`
/// 为 UI 层文件对话框选中的来源，`None` 表示用户取消。
#[derive(serde::Serialize, serde::Deserialize, Default)]
pub struct ImportOptions {
    pub direct_import: bool,
    pub file_path: Option<PathBuf>,
}
