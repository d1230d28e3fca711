// ==========================================
// 炉批自动组批系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含引擎逻辑,不含文件读写
// ==========================================

pub mod batch;
pub mod material;
pub mod resource;
pub mod sales_order;
pub mod types;
pub mod work_order;

// 重导出核心类型
pub use batch::{BatchCandidate, Demand};
pub use material::{material_table, Material, MaterialTable};
pub use resource::{BatchBounds, Resource};
pub use sales_order::SalesOrderLine;
pub use types::{UnfulfilledReason, WorkOrderStatus};
pub use work_order::{UnfulfilledDemand, WorkOrder, WorkOrderDetail};
