//! ENV 文本编解码器
//!
//! 在内存键值映射与 `.env` 行格式文本之间转换，支持：
//! - 行级解析（跳过注释与空行，剥离一层成对引号）
//! - 序列化（含空格或引号的值自动加双引号）
//! - 内容嗅探（判断任意文本是否像 `.env` 格式）
//!
//! 三个操作均为无状态纯函数，不做任何 I/O。

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// ENV 键名的标识符模式
static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("标识符正则无效"));

/// 解析 `.env` 格式文本为键值映射
///
/// 逐行处理：跳过空行和 `#` 开头的整行注释；无 `=` 或 `=` 位于
/// 行首的行被忽略；键和值各自去除首尾空白；值若被一对相同的
/// 引号（`"…"` 或 `'…'`）包裹则剥离一层，不做其他转义处理。
/// 重复键以最后一次出现为准。
pub fn parse(content: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();

    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(eq_index) = trimmed.find('=') else {
            continue;
        };
        if eq_index == 0 {
            continue;
        }

        let key = trimmed[..eq_index].trim();
        if key.is_empty() {
            continue;
        }

        let value = strip_quotes(trimmed[eq_index + 1..].trim());
        vars.insert(key.to_string(), value.to_string());
    }

    vars
}

/// 序列化键值映射为 `.env` 格式文本
///
/// 每个条目一行 `key=value`；值包含空格、双引号、单引号或反斜杠时
/// 用双引号包裹，并将内部双引号转义为 `\"`。各行以 `\n` 连接，
/// 末尾不附加换行。
pub fn serialize(vars: &BTreeMap<String, String>) -> String {
    let lines: Vec<String> = vars
        .iter()
        .map(|(key, value)| {
            if needs_quoting(value) {
                format!("{}=\"{}\"", key, value.replace('"', "\\\""))
            } else {
                format!("{}={}", key, value)
            }
        })
        .collect();

    lines.join("\n")
}

/// 判断文本内容是否像 `.env` 格式
///
/// 忽略空行和注释行后，统计形如 `KEY=...`（键为合法标识符）的行
/// 所占比例。至少存在一个有效行且比例不低于 0.5 时返回 true。
/// 这是导入时扩展名不明确情况下的启发式分类，不是严格语法校验。
pub fn is_likely_env_text(content: &str) -> bool {
    let mut total_lines = 0usize;
    let mut env_lines = 0usize;

    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        total_lines += 1;

        if let Some(eq_index) = trimmed.find('=') {
            if eq_index > 0 && IDENTIFIER_RE.is_match(trimmed[..eq_index].trim()) {
                env_lines += 1;
            }
        }
    }

    total_lines > 0 && (env_lines as f64 / total_lines as f64) >= 0.5
}

/// 剥离值两侧成对的引号（只剥一层）
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// 值是否需要引号包裹
fn needs_quoting(value: &str) -> bool {
    value.contains(' ') || value.contains('"') || value.contains('\'') || value.contains('\\')
}
