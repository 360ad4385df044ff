//! 数据目录定位
//!
//! EnvKeeper 的全部数据存放在用户主目录下的 `.envkeeper` 中，
//! 环境变量文件夹集中在其 `environments` 子目录。

use std::path::PathBuf;

/// EnvKeeper 配置目录 (~/.envkeeper)
pub fn config_dir() -> Result<PathBuf, String> {
    let home_dir = dirs::home_dir().ok_or("Failed to get home directory")?;
    Ok(home_dir.join(".envkeeper"))
}

/// 环境变量文件夹的根目录 (~/.envkeeper/environments)
pub fn environments_dir() -> Result<PathBuf, String> {
    Ok(config_dir()?.join("environments"))
}
