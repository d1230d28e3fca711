// ==========================================
// 炉批自动组批系统 - 配置层
// ==========================================
// 职责: 组批策略配置的加载与校验
// ==========================================

pub mod batching_config;
pub mod error;

// 重导出
pub use batching_config::{BatchingConfig, CapacityBoundsPolicy, WorkOrderIdStrategy};
pub use error::ConfigError;
