// ==========================================
// 炉批自动组批系统 - 组批配置
// ==========================================
// 存储: JSON 文件/字符串 (serde_json)
// 默认值: 与原始贪心算法行为一致
// ==========================================

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 组批配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchingConfig {
    /// 同一材料多台可用炉台批量上下限不一致时的处理策略
    pub capacity_bounds_policy: CapacityBoundsPolicy,

    /// 工单号生成策略
    pub work_order_id: WorkOrderIdStrategy,
}

/// 批量上下限策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityBoundsPolicy {
    /// 取炉台代码排序后的第一台；不一致仅告警
    #[default]
    FirstEligible,
    /// 要求一致，不一致整批中止
    RequireUniform,
}

/// 工单号生成策略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "strategy", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderIdStrategy {
    #[default]
    Uuid,
    /// 运行级前缀 + 单调序号，如 RUN42-000001
    Sequential { prefix: String },
}

impl BatchingConfig {
    /// 从 JSON 字符串加载（缺省字段取默认值）
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: BatchingConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let WorkOrderIdStrategy::Sequential { prefix } = &self.work_order_id {
            if prefix.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    key: "work_order_id.prefix".to_string(),
                    message: "顺序工单号前缀不能为空".to_string(),
                });
            }
        }
        Ok(())
    }
}
