// lib.rs - 暴露数据层与命令层给 CLI 和 GUI 使用

pub mod commands;
pub mod data;
pub mod logging;
pub mod services;
pub mod utils;

pub use commands::AppState;
pub use data::codec;
pub use data::{DataError, EnvMap, FolderStore, Result, VariableRepository, DEFAULT_FOLDER};
pub use logging::{init_logging, LogLevel};

// 重新导出常用类型
pub use anyhow::Context;
