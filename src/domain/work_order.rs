// ==========================================
// 炉批自动组批系统 - 工单领域模型
// ==========================================
// 红线: 明细分配量之和 == 工单总量
// 用途: 下游报表/持久化只读消费
// ==========================================

use crate::domain::types::{UnfulfilledReason, WorkOrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// WorkOrder - 生产工单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub wo_id: String,                 // 工单号 (运行内/跨运行唯一)
    pub resource_id: String,           // 分配炉台
    pub material_id: String,           // 材料代码
    pub total_qty: i64,                // 批次总量 (kg)
    pub status: WorkOrderStatus,       // Ready / OnHold-Underfill
    pub batch_fullkit_date: NaiveDate, // 成员需求中最晚的齐套日期
    pub details: Vec<WorkOrderDetail>, // 明细 (保持需求顺序)
}

impl WorkOrder {
    /// 明细分配量合计
    pub fn allocated_qty(&self) -> i64 {
        self.details
            .iter()
            .fold(0i64, |acc, d| acc.saturating_add(d.allocated_qty))
    }
}

// ==========================================
// WorkOrderDetail - 工单明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderDetail {
    pub wo_id: String,
    pub so_line_id: String,
    pub allocated_qty: i64,
}

// ==========================================
// UnfulfilledDemand - 未满足需求
// ==========================================
// 无炉台 / 配额用尽 / 零重量尾批 的需求在此显式列出,不再静默丢弃
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnfulfilledDemand {
    pub so_line_id: String,
    pub material_id: String,
    pub batch_qty_kg: i64,
    pub reason: UnfulfilledReason,
    pub batch_total_qty: Option<i64>, // 所属候选批次总量 (无炉台时为空)
}
