// ==========================================
// 炉批自动组批系统 - 炉台资源领域模型
// ==========================================
// 红线: 只有批处理型炉台 (is_batch_type) 参与组批
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Resource - 炉台/资源
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_id: String,                  // 炉台代码
    pub is_batch_type: bool,                  // 是否批处理型
    pub min_batch_qty: i64,                   // 最小批量 (kg)
    pub max_batch_qty: i64,                   // 最大批量 (kg)
    pub n_per_cycle: u32,                     // 单周期可接批次数
    pub eligible_materials: BTreeSet<String>, // 可加工材料
}

impl Resource {
    pub fn new(
        resource_id: &str,
        is_batch_type: bool,
        min_batch_qty: i64,
        max_batch_qty: i64,
        n_per_cycle: u32,
        eligible_materials: &[&str],
    ) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            is_batch_type,
            min_batch_qty,
            max_batch_qty,
            n_per_cycle,
            eligible_materials: eligible_materials.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// 是否可参与该材料的组批
    pub fn can_batch(&self, material_id: &str) -> bool {
        self.is_batch_type && self.eligible_materials.contains(material_id)
    }

    pub fn bounds(&self) -> BatchBounds {
        BatchBounds {
            min_batch_qty: self.min_batch_qty,
            max_batch_qty: self.max_batch_qty,
        }
    }
}

// ==========================================
// BatchBounds - 批量上下限
// ==========================================
// min 不参与组批门控,只影响工单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchBounds {
    pub min_batch_qty: i64,
    pub max_batch_qty: i64,
}

impl BatchBounds {
    /// 当前累计量再加入 qty 是否超过上限（i64 溢出视为超限）
    pub fn would_overflow(&self, current_total: i64, qty: i64) -> bool {
        current_total
            .checked_add(qty)
            .map_or(true, |total| total > self.max_batch_qty)
    }
}
