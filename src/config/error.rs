// ==========================================
// 炉批自动组批系统 - 配置错误类型
// ==========================================

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    Read { path: String, message: String },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值非法 (key: {key}): {message}")]
    Invalid { key: String, message: String },
}
