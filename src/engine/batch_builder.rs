// ==========================================
// 炉批自动组批系统 - 贪心组批引擎
// ==========================================
// 职责: 同材料、已排序的需求 -> 候选批次
// 规则: 当前批次累计 + 下一需求 > max_batch_qty 时封批并开新批
// 红线: 单遍、贪心、按输入顺序,不回溯不重排
// ==========================================

use crate::domain::batch::{BatchCandidate, Demand};
use crate::domain::resource::BatchBounds;
use tracing::{instrument, warn};

/// 组批结果
#[derive(Debug, Clone, Default)]
pub struct BuildBatchesResult {
    /// 已封批的候选批次（保持组批顺序）
    pub batches: Vec<BatchCandidate>,
    /// 尾批累计为 0 未封批的需求
    pub zero_quantity_tail: Vec<Demand>,
}

// ==========================================
// BatchBuilder - 贪心组批引擎
// ==========================================
pub struct BatchBuilder {
    // 无状态引擎
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self {}
    }

    /// 贪心组批
    ///
    /// min_batch_qty 不参与组批，只在生成工单时决定状态。
    /// 空批次不会被封批：首个需求单独超过上限时自成一批（超限批）。
    ///
    /// # 参数
    /// - `demands`: 同一材料的需求（已按确定性顺序排列）
    /// - `bounds`: 炉台批量上下限
    #[instrument(skip(self, demands), fields(demands_count = demands.len(), max_batch_qty = bounds.max_batch_qty))]
    pub fn build(&self, demands: Vec<Demand>, bounds: BatchBounds) -> BuildBatchesResult {
        let mut result = BuildBatchesResult::default();

        let Some(first) = demands.first() else {
            return result;
        };
        let mut current = BatchCandidate::new(&first.material_id);

        for demand in demands {
            if !current.is_empty() && bounds.would_overflow(current.total_qty(), demand.batch_qty_kg) {
                let next = BatchCandidate::new(&demand.material_id);
                result.batches.push(std::mem::replace(&mut current, next));
            }

            if demand.batch_qty_kg > bounds.max_batch_qty {
                warn!(
                    so_line_id = %demand.so_line_id,
                    batch_qty_kg = demand.batch_qty_kg,
                    max_batch_qty = bounds.max_batch_qty,
                    "单条需求超过最大批量，单独成批"
                );
            }

            current.push(demand);
        }

        // 尾批: 有重量才封批
        if current.total_qty() > 0 {
            result.batches.push(current);
        } else {
            result.zero_quantity_tail = current.demands;
        }

        result
    }
}

impl Default for BatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
