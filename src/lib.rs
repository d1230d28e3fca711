// ==========================================
// 炉批自动组批系统 - 核心库
// ==========================================
// 职责: 销售订单需求 -> 炉批工单
// 流程: 需求归一化 -> 贪心组批 -> 炉台轮转分配 -> 工单生成
// 系统定位: 单次运行、单线程、确定性计算,不持久化
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 组批规则
pub mod engine;

// 导入层 - 外部快照
pub mod importer;

// 配置层 - 组批策略
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    BatchBounds, BatchCandidate, Demand, Material, MaterialTable, Resource, SalesOrderLine,
    UnfulfilledDemand, UnfulfilledReason, WorkOrder, WorkOrderDetail, WorkOrderStatus,
};

// 引擎
pub use engine::{
    BatchBuilder, BatchingError, BatchingOrchestrator, BatchingResult, BatchingSummary,
    DemandNormalizer, ResourceRotator,
};

// 配置
pub use config::{BatchingConfig, CapacityBoundsPolicy, WorkOrderIdStrategy};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "炉批自动组批系统";
