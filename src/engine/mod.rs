// ==========================================
// 炉批自动组批系统 - 引擎层
// ==========================================
// 职责: 需求归一化、贪心组批、炉台轮转分配、工单生成
// 红线: 引擎不做文件读写,所有跳过的需求必须给出原因
// ==========================================

pub mod batch_builder;
pub mod eligibility;
pub mod error;
pub mod id_generator;
pub mod normalizer;
pub mod orchestrator;
pub mod rotator;
pub mod summary;

// 重导出核心引擎
pub use batch_builder::{BatchBuilder, BuildBatchesResult};
pub use eligibility::{CapacityBoundsWarning, ResourceEligibility, ResourceSelection};
pub use error::BatchingError;
pub use id_generator::{
    id_generator_for, SequentialIdGenerator, UuidIdGenerator, WorkOrderIdGenerator,
};
pub use normalizer::DemandNormalizer;
pub use orchestrator::{BatchingOrchestrator, BatchingResult};
pub use rotator::ResourceRotator;
pub use summary::BatchingSummary;
