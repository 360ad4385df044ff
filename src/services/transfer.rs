//! 导入/导出服务
//!
//! 在环境变量仓库与外部文件（`.env` / JSON）之间搬运数据：
//! - 导出：按目标扩展名选择 ENV 或格式化 JSON 输出
//! - 导入：按扩展名与内容嗅探选择解析方式，JSON 解析失败时
//!   回退为 ENV 解析；导入条目浅合并进当前映射，同名键以导入为准

use crate::data::codec;
use crate::data::repository::{EnvMap, VariableRepository};
use crate::data::{DataError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 直接导出模式的默认目标路径：`<下载目录>/<文件夹名>.env`
///
/// 无下载目录时（精简环境）回退到用户主目录。
pub fn default_export_path(folder: &str) -> Result<PathBuf> {
    let downloads = dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| DataError::NotFound("无法定位下载目录".to_string()))?;
    Ok(downloads.join(format!("{folder}.env")))
}

/// 渲染导出内容：目标以 `.env` 结尾时输出 ENV 格式，否则输出
/// 格式化 JSON
pub fn render_export(vars: &EnvMap, path: &Path) -> Result<String> {
    if is_env_path(path) {
        Ok(codec::serialize(vars))
    } else {
        Ok(serde_json::to_string_pretty(vars)?)
    }
}

/// 解析导入内容
///
/// `.env` 扩展名或内容嗅探命中时按 ENV 解析；否则按 JSON 解析，
/// JSON 解析失败时回退为 ENV 解析。JSON 顶层必须是对象，字符串
/// 值原样保留，非字符串值强制转为其紧凑 JSON 文本。
pub fn parse_import(path: &Path, content: &str) -> Result<EnvMap> {
    if is_env_path(path) || codec::is_likely_env_text(content) {
        return Ok(codec::parse(content));
    }

    match serde_json::from_str::<Value>(content) {
        Ok(value) => coerce_object(value),
        Err(_) => Ok(codec::parse(content)),
    }
}

/// 导出当前文件夹的全部变量到目标文件
pub async fn export_to(repository: &VariableRepository, path: &Path) -> Result<()> {
    let vars = repository.read().await?;
    if vars.is_empty() {
        return Err(DataError::Validation("没有可导出的环境变量".to_string()));
    }

    let content = render_export(&vars, path)?;
    fs::write(path, content)
        .await
        .map_err(|e| DataError::io(path.to_path_buf(), e))?;

    tracing::info!(path = %path.display(), count = vars.len(), "环境变量已导出");
    Ok(())
}

/// 从文件导入变量并合并进当前文件夹
///
/// 浅合并，导入的键覆盖同名已有键。返回导入的条目数。
pub async fn import_from(repository: &VariableRepository, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| DataError::io(path.to_path_buf(), e))?;

    let imported = parse_import(path, &content)?;
    let count = imported.len();

    let mut vars = repository.read().await?;
    vars.extend(imported);
    repository.write(&vars).await?;

    tracing::info!(path = %path.display(), count = count, "环境变量已导入");
    Ok(count)
}

fn is_env_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".env")
}

/// 校验并拍平导入的 JSON 值
fn coerce_object(value: Value) -> Result<EnvMap> {
    let Value::Object(object) = value else {
        return Err(DataError::Validation(
            "文件格式无效：顶层必须是 JSON 对象".to_string(),
        ));
    };

    let mut vars = EnvMap::new();
    for (key, item) in object {
        let text = match item {
            Value::String(s) => s,
            other => other.to_string(),
        };
        vars.insert(key, text);
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FolderStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn new_repository() -> (TempDir, VariableRepository) {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(FolderStore::new(temp_dir.path().join("environments")));
        store.initialize().await.unwrap();
        let repository = VariableRepository::new(store);
        (temp_dir, repository)
    }

    fn map(entries: &[(&str, &str)]) -> EnvMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_import_env_extension() {
        let vars = parse_import(Path::new("vars.env"), "A=1\n# comment\nB=2\n").unwrap();
        assert_eq!(vars, map(&[("A", "1"), ("B", "2")]));
    }

    #[test]
    fn test_parse_import_json_object() {
        let vars = parse_import(Path::new("vars.json"), r#"{"A": "1", "B": "2"}"#).unwrap();
        assert_eq!(vars, map(&[("A", "1"), ("B", "2")]));
    }

    #[test]
    fn test_parse_import_coerces_non_string_values() {
        let vars =
            parse_import(Path::new("vars.json"), r#"{"N": 42, "F": true, "Z": null}"#).unwrap();
        assert_eq!(vars, map(&[("N", "42"), ("F", "true"), ("Z", "null")]));
    }

    #[test]
    fn test_parse_import_rejects_non_object_json() {
        let err = parse_import(Path::new("vars.json"), "[1, 2]").unwrap_err();
        assert!(matches!(err, DataError::Validation(_)));
    }

    #[test]
    fn test_parse_import_sniffs_env_content() {
        // 扩展名不明确，但内容像 ENV
        let vars = parse_import(Path::new("vars.txt"), "A=1\nB=2\n").unwrap();
        assert_eq!(vars, map(&[("A", "1"), ("B", "2")]));
    }

    #[test]
    fn test_parse_import_falls_back_to_env_on_bad_json() {
        // 既不是合法 JSON，嗅探也未命中（键不是标识符），回退为 ENV 解析
        let vars = parse_import(Path::new("vars.json"), "my-key=1\n").unwrap();
        assert_eq!(vars, map(&[("my-key", "1")]));
    }

    #[test]
    fn test_render_export_env_format() {
        let vars = map(&[("A", "hello world"), ("B", "plain")]);
        let text = render_export(&vars, Path::new("out.env")).unwrap();
        assert_eq!(text, "A=\"hello world\"\nB=plain");
    }

    #[test]
    fn test_render_export_json_format() {
        let vars = map(&[("A", "1")]);
        let text = render_export(&vars, Path::new("out.json")).unwrap();
        assert_eq!(serde_json::from_str::<EnvMap>(&text).unwrap(), vars);
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_default_export_path_file_name() {
        let path = default_export_path("work").unwrap();
        assert_eq!(path.file_name().unwrap().to_string_lossy(), "work.env");
    }

    #[tokio::test]
    async fn test_export_empty_map_fails() {
        let (guard, repository) = new_repository().await;
        let target = guard.path().join("out.env");

        let err = export_to(&repository, &target).await.unwrap_err();
        assert!(matches!(err, DataError::Validation(_)));
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_export_then_import_round_trip() {
        let (guard, repository) = new_repository().await;
        let target = guard.path().join("out.env");

        let vars = map(&[("API_KEY", "secret"), ("MESSAGE", "hello world")]);
        repository.write(&vars).await.unwrap();
        export_to(&repository, &target).await.unwrap();

        repository.write(&EnvMap::new()).await.unwrap();
        let count = import_from(&repository, &target).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(repository.read().await.unwrap(), vars);
    }

    #[tokio::test]
    async fn test_import_merges_with_imported_keys_winning() {
        let (guard, repository) = new_repository().await;
        let source = guard.path().join("incoming.json");

        repository.write(&map(&[("A", "1"), ("B", "2")])).await.unwrap();
        std::fs::write(&source, r#"{"B": "9"}"#).unwrap();

        let count = import_from(&repository, &source).await.unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            repository.read().await.unwrap(),
            map(&[("A", "1"), ("B", "9")])
        );
    }

    #[tokio::test]
    async fn test_import_missing_file_fails() {
        let (guard, repository) = new_repository().await;
        let missing = guard.path().join("missing.env");

        let err = import_from(&repository, &missing).await.unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
