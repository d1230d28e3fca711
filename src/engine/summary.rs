// ==========================================
// 炉批自动组批系统 - 组批结果汇总
// ==========================================
// 用途: 供报表/看板等下游只读消费,引擎不负责渲染
// ==========================================

use crate::domain::work_order::{UnfulfilledDemand, WorkOrder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchingSummary {
    pub demand_count: usize,
    pub work_order_count: usize,
    pub ready_count: usize,
    pub underfill_count: usize,
    pub unfulfilled_count: usize,
    pub scheduled_qty_kg: i64,
    pub unfulfilled_qty_kg: i64,
    /// 炉台代码 -> 分配批次数
    pub batches_per_resource: BTreeMap<String, usize>,
}

impl BatchingSummary {
    pub fn build(
        demand_count: usize,
        work_orders: &[WorkOrder],
        unfulfilled: &[UnfulfilledDemand],
    ) -> Self {
        let mut summary = BatchingSummary {
            demand_count,
            work_order_count: work_orders.len(),
            unfulfilled_count: unfulfilled.len(),
            unfulfilled_qty_kg: unfulfilled
                .iter()
                .fold(0i64, |acc, u| acc.saturating_add(u.batch_qty_kg)),
            ..Default::default()
        };

        for wo in work_orders {
            if wo.status.is_ready() {
                summary.ready_count += 1;
            } else {
                summary.underfill_count += 1;
            }
            summary.scheduled_qty_kg = summary.scheduled_qty_kg.saturating_add(wo.total_qty);
            *summary
                .batches_per_resource
                .entry(wo.resource_id.clone())
                .or_insert(0) += 1;
        }

        summary
    }

    /// 需求满足率（按条数）
    pub fn fulfilment_ratio(&self) -> f64 {
        if self.demand_count == 0 {
            return 1.0;
        }
        (self.demand_count - self.unfulfilled_count) as f64 / self.demand_count as f64
    }
}
