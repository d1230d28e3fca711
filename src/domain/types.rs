// ==========================================
// 炉批自动组批系统 - 领域类型定义
// ==========================================
// 职责: 工单状态、未满足需求原因等枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工单状态 (Work Order Status)
// ==========================================
// 红线: Ready 当且仅当 批次总量 >= 所分配炉台的最小批量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkOrderStatus {
    #[serde(rename = "Ready")]
    Ready, // 可下达
    #[serde(rename = "OnHold-Underfill")]
    OnHoldUnderfill, // 欠装挂起
}

impl WorkOrderStatus {
    /// 按批次总量与最小批量判定状态
    pub fn from_fill(total_qty: i64, min_batch_qty: i64) -> Self {
        if total_qty >= min_batch_qty {
            WorkOrderStatus::Ready
        } else {
            WorkOrderStatus::OnHoldUnderfill
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, WorkOrderStatus::Ready)
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkOrderStatus::Ready => write!(f, "Ready"),
            WorkOrderStatus::OnHoldUnderfill => write!(f, "OnHold-Underfill"),
        }
    }
}

// ==========================================
// 未满足原因 (Unfulfilled Reason)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnfulfilledReason {
    NoEligibleResource, // 该材料无可用批处理炉台
    QuotaExhausted,     // 炉台周期配额已用尽
    ZeroQuantity,       // 尾批零重量未封批
}

impl fmt::Display for UnfulfilledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnfulfilledReason::NoEligibleResource => write!(f, "NO_ELIGIBLE_RESOURCE"),
            UnfulfilledReason::QuotaExhausted => write!(f, "QUOTA_EXHAUSTED"),
            UnfulfilledReason::ZeroQuantity => write!(f, "ZERO_QUANTITY"),
        }
    }
}
