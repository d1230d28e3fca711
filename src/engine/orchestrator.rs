// ==========================================
// 炉批自动组批系统 - 组批编排器
// ==========================================
// 用途: 协调 归一化 -> 排序分组 -> 炉台准入 -> 组批 -> 轮转分配 -> 生成工单
// 红线: 单线程单遍确定性计算,组间不共享轮转状态
// ==========================================

use crate::config::BatchingConfig;
use crate::domain::batch::{BatchCandidate, Demand};
use crate::domain::material::MaterialTable;
use crate::domain::resource::Resource;
use crate::domain::sales_order::SalesOrderLine;
use crate::domain::types::{UnfulfilledReason, WorkOrderStatus};
use crate::domain::work_order::{UnfulfilledDemand, WorkOrder, WorkOrderDetail};
use crate::engine::eligibility::{CapacityBoundsWarning, ResourceEligibility};
use crate::engine::error::BatchingError;
use crate::engine::id_generator::{id_generator_for, WorkOrderIdGenerator};
use crate::engine::summary::BatchingSummary;
use crate::engine::{BatchBuilder, DemandNormalizer, ResourceRotator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info, instrument, warn};

// ==========================================
// BatchingResult - 组批结果
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchingResult {
    /// 工单（按材料组出现顺序，组内按组批顺序）
    pub work_orders: Vec<WorkOrder>,
    /// 未满足需求（不在任何工单明细中的需求各出现一次）
    pub unfulfilled: Vec<UnfulfilledDemand>,
    pub capacity_warnings: Vec<CapacityBoundsWarning>,
    pub summary: BatchingSummary,
}

// ==========================================
// BatchingOrchestrator - 组批编排器
// ==========================================
pub struct BatchingOrchestrator {
    config: BatchingConfig,
    normalizer: DemandNormalizer,
    builder: BatchBuilder,
    eligibility: ResourceEligibility,
}

impl BatchingOrchestrator {
    /// 创建新的编排器实例
    pub fn new(config: BatchingConfig) -> Self {
        Self {
            normalizer: DemandNormalizer::new(),
            builder: BatchBuilder::new(),
            eligibility: ResourceEligibility::new(config.capacity_bounds_policy),
            config,
        }
    }

    pub fn config(&self) -> &BatchingConfig {
        &self.config
    }

    /// 执行一次完整组批（工单号按配置策略生成）
    ///
    /// # 参数
    /// - lines: 订单行快照
    /// - materials: 材料查找表（须覆盖所有订单行引用的材料）
    /// - resources: 全部炉台
    ///
    /// # 返回
    /// - Ok(BatchingResult)
    /// - Err: 配置类错误，整批中止，不返回部分工单
    pub fn run(
        &self,
        lines: &[SalesOrderLine],
        materials: &MaterialTable,
        resources: &[Resource],
    ) -> Result<BatchingResult, BatchingError> {
        let mut id_generator = id_generator_for(&self.config.work_order_id);
        self.run_with_id_generator(lines, materials, resources, id_generator.as_mut())
    }

    /// 执行一次完整组批（注入工单号生成器）
    #[instrument(skip_all, fields(
        lines_count = lines.len(),
        materials_count = materials.len(),
        resources_count = resources.len()
    ))]
    pub fn run_with_id_generator(
        &self,
        lines: &[SalesOrderLine],
        materials: &MaterialTable,
        resources: &[Resource],
        id_generator: &mut dyn WorkOrderIdGenerator,
    ) -> Result<BatchingResult, BatchingError> {
        info!("开始执行自动组批");

        // ==========================================
        // 步骤1: 需求归一化（任一行失败整批中止）
        // ==========================================
        let mut demands = self.normalizer.normalize_all(lines, materials)?;
        let demand_count = demands.len();

        // ==========================================
        // 步骤2: 排序 材料 -> 优先级 -> 承诺时间 -> 订单行号
        // ==========================================
        demands.sort_by(compare_demands);

        // ==========================================
        // 步骤3-7: 按材料分组组批
        // ==========================================
        let mut result = BatchingResult::default();
        for (material_id, group) in group_by_material(demands) {
            self.process_material_group(&material_id, group, resources, id_generator, &mut result)?;
        }

        result.summary =
            BatchingSummary::build(demand_count, &result.work_orders, &result.unfulfilled);

        info!(
            work_orders_count = result.summary.work_order_count,
            ready_count = result.summary.ready_count,
            underfill_count = result.summary.underfill_count,
            unfulfilled_count = result.summary.unfulfilled_count,
            "自动组批完成"
        );

        Ok(result)
    }

    /// 处理单个材料组
    fn process_material_group(
        &self,
        material_id: &str,
        demands: Vec<Demand>,
        resources: &[Resource],
        id_generator: &mut dyn WorkOrderIdGenerator,
        result: &mut BatchingResult,
    ) -> Result<(), BatchingError> {
        // 炉台准入
        let Some(selection) = self.eligibility.select(material_id, resources)? else {
            warn!(
                material_id,
                demands_count = demands.len(),
                "无可用批处理炉台，跳过该材料组"
            );
            result.unfulfilled.extend(
                demands
                    .into_iter()
                    .map(|d| unfulfilled(d, UnfulfilledReason::NoEligibleResource, None)),
            );
            return Ok(());
        };
        result.capacity_warnings.extend(selection.warnings);

        // 贪心组批（上下限取第一台可用炉台）
        let built = self.builder.build(demands, selection.bounds);
        debug!(
            material_id,
            batches_count = built.batches.len(),
            eligible_resources = selection.resources.len(),
            "材料组组批完成"
        );

        // 轮转分配（每个材料组新建分配器）
        let mut rotator = ResourceRotator::new();
        for batch in built.batches {
            let Some(resource) = rotator.assign(&selection.resources) else {
                warn!(
                    material_id,
                    batch_total_qty = batch.total_qty(),
                    "炉台周期配额已用尽，批次未分配"
                );
                let total = batch.total_qty();
                result.unfulfilled.extend(
                    batch
                        .demands
                        .into_iter()
                        .map(|d| unfulfilled(d, UnfulfilledReason::QuotaExhausted, Some(total))),
                );
                continue;
            };

            // 封批批次非空
            if let Some(work_order) = create_work_order(batch, resource, id_generator.next_id()) {
                debug!(
                    wo_id = %work_order.wo_id,
                    resource_id = %work_order.resource_id,
                    total_qty = work_order.total_qty,
                    status = %work_order.status,
                    "生成工单"
                );
                result.work_orders.push(work_order);
            }
        }

        result.unfulfilled.extend(
            built
                .zero_quantity_tail
                .into_iter()
                .map(|d| unfulfilled(d, UnfulfilledReason::ZeroQuantity, None)),
        );

        Ok(())
    }
}

impl Default for BatchingOrchestrator {
    fn default() -> Self {
        Self::new(BatchingConfig::default())
    }
}

// ==========================================
// 辅助函数
// ==========================================

/// 需求排序比较（总序，保证确定性）
fn compare_demands(a: &Demand, b: &Demand) -> Ordering {
    a.material_id
        .cmp(&b.material_id)
        .then_with(|| a.priority.cmp(&b.priority))
        .then_with(|| a.original_committed_at.cmp(&b.original_committed_at))
        .then_with(|| a.so_line_id.cmp(&b.so_line_id))
}

/// 按材料分组（输入已按材料排序，保持组内顺序与组出现顺序）
fn group_by_material(demands: Vec<Demand>) -> Vec<(String, Vec<Demand>)> {
    let mut groups: Vec<(String, Vec<Demand>)> = Vec::new();
    for demand in demands {
        match groups.last_mut() {
            Some((material_id, group)) if *material_id == demand.material_id => group.push(demand),
            _ => groups.push((demand.material_id.clone(), vec![demand])),
        }
    }
    groups
}

/// 生成工单与明细
///
/// 状态: 总量 >= 所分配炉台 min_batch_qty 为 Ready，否则 OnHold-Underfill。
/// 齐套日期取成员需求中最晚的日期。
fn create_work_order(batch: BatchCandidate, resource: &Resource, wo_id: String) -> Option<WorkOrder> {
    let batch_fullkit_date = batch.latest_fullkit_date()?;
    let total_qty = batch.total_qty();

    let details = batch
        .demands
        .into_iter()
        .map(|d| WorkOrderDetail {
            wo_id: wo_id.clone(),
            so_line_id: d.so_line_id,
            allocated_qty: d.batch_qty_kg,
        })
        .collect();

    Some(WorkOrder {
        wo_id,
        resource_id: resource.resource_id.clone(),
        material_id: batch.material_id,
        total_qty,
        status: WorkOrderStatus::from_fill(total_qty, resource.min_batch_qty),
        batch_fullkit_date,
        details,
    })
}

fn unfulfilled(demand: Demand, reason: UnfulfilledReason, batch_total_qty: Option<i64>) -> UnfulfilledDemand {
    UnfulfilledDemand {
        so_line_id: demand.so_line_id,
        material_id: demand.material_id,
        batch_qty_kg: demand.batch_qty_kg,
        reason,
        batch_total_qty,
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CapacityBoundsPolicy, WorkOrderIdStrategy};
    use crate::domain::material::{material_table, Material};
    use crate::engine::id_generator::SequentialIdGenerator;
    use chrono::NaiveDate;

    fn so(id: &str, material_id: &str, qty: i64, committed_day: u32, priority: i32, fullkit_day: u32) -> SalesOrderLine {
        SalesOrderLine::new(
            id,
            material_id,
            qty,
            NaiveDate::from_ymd_opt(2025, 1, committed_day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            priority,
            NaiveDate::from_ymd_opt(2025, 1, fullkit_day).unwrap(),
        )
    }

    fn steel_a() -> MaterialTable {
        material_table(vec![Material::new("STEEL-A", 100.0, 80.0)])
    }

    fn furnaces() -> Vec<Resource> {
        vec![
            Resource::new("FURNACE-1", true, 1000, 2000, 2, &["STEEL-A"]),
            Resource::new("FURNACE-2", true, 1000, 2000, 1, &["STEEL-A"]),
        ]
    }

    fn sequential(prefix: &str) -> BatchingOrchestrator {
        BatchingOrchestrator::new(BatchingConfig {
            work_order_id: WorkOrderIdStrategy::Sequential {
                prefix: prefix.to_string(),
            },
            ..Default::default()
        })
    }

    #[test]
    fn test_basic_example() {
        let lines = vec![
            so("SO-1", "STEEL-A", 10, 5, 1, 3),
            so("SO-2", "STEEL-A", 8, 6, 2, 7),
            so("SO-3", "STEEL-A", 6, 10, 3, 20),
        ];

        let result = sequential("T").run(&lines, &steel_a(), &furnaces()).unwrap();

        assert_eq!(result.work_orders.len(), 2);
        let first = &result.work_orders[0];
        assert_eq!(first.wo_id, "T-000001");
        assert_eq!(first.resource_id, "FURNACE-1");
        assert_eq!(first.total_qty, 1250);
        assert_eq!(first.status, WorkOrderStatus::Ready);
        assert_eq!(first.batch_fullkit_date, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());

        let second = &result.work_orders[1];
        assert_eq!(second.resource_id, "FURNACE-2");
        assert_eq!(second.total_qty, 1750);
        assert_eq!(second.status, WorkOrderStatus::Ready);
        // 取最晚齐套日期
        assert_eq!(second.batch_fullkit_date, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        assert!(second.details.iter().all(|d| d.wo_id == "T-000002"));
        assert!(result.unfulfilled.is_empty());
    }

    #[test]
    fn test_sort_priority_then_commit_then_id() {
        let lines = vec![
            so("SO-C", "STEEL-A", 1, 5, 2, 3),
            so("SO-B", "STEEL-A", 1, 4, 2, 3),
            so("SO-A", "STEEL-A", 1, 4, 2, 3),
            so("SO-Z", "STEEL-A", 1, 9, 1, 3),
        ];

        let result = sequential("T").run(&lines, &steel_a(), &furnaces()).unwrap();

        let order: Vec<&str> = result.work_orders[0]
            .details
            .iter()
            .map(|d| d.so_line_id.as_str())
            .collect();
        assert_eq!(order, vec!["SO-Z", "SO-A", "SO-B", "SO-C"]);
    }

    #[test]
    fn test_underfill_status() {
        let lines = vec![so("SO-1", "STEEL-A", 2, 5, 1, 3)]; // 250kg

        let result = sequential("T").run(&lines, &steel_a(), &furnaces()).unwrap();

        assert_eq!(result.work_orders[0].status, WorkOrderStatus::OnHoldUnderfill);
        assert_eq!(result.summary.underfill_count, 1);
    }

    #[test]
    fn test_no_eligible_resource_reported() {
        let mut materials = steel_a();
        materials.insert("ALU-C".to_string(), Material::new("ALU-C", 60.0, 90.0));
        let lines = vec![so("SO-1", "STEEL-A", 10, 5, 1, 3), so("SO-7", "ALU-C", 10, 6, 1, 4)];

        let result = sequential("T").run(&lines, &materials, &furnaces()).unwrap();

        assert_eq!(result.work_orders.len(), 1);
        assert_eq!(result.unfulfilled.len(), 1);
        assert_eq!(result.unfulfilled[0].so_line_id, "SO-7");
        assert_eq!(result.unfulfilled[0].reason, UnfulfilledReason::NoEligibleResource);
        assert_eq!(result.unfulfilled[0].batch_qty_kg, 667);
    }

    #[test]
    fn test_rotation_resets_per_material_group() {
        let materials = material_table(vec![
            Material::new("STEEL-A", 100.0, 80.0),
            Material::new("STEEL-B", 100.0, 80.0),
        ]);
        let resources = vec![
            Resource::new("FURNACE-1", true, 0, 2000, 1, &["STEEL-A", "STEEL-B"]),
            Resource::new("FURNACE-2", true, 0, 2000, 1, &["STEEL-A", "STEEL-B"]),
        ];
        let lines = vec![so("SO-1", "STEEL-A", 10, 5, 1, 3), so("SO-2", "STEEL-B", 10, 5, 1, 3)];

        let result = sequential("T").run(&lines, &materials, &resources).unwrap();

        // 组间不共享指针与计数: 两组都从 FURNACE-1 开始
        assert_eq!(result.work_orders[0].resource_id, "FURNACE-1");
        assert_eq!(result.work_orders[1].resource_id, "FURNACE-1");
    }

    #[test]
    fn test_fatal_error_returns_no_output() {
        let mut materials = steel_a();
        materials.insert("BAD".to_string(), Material::new("BAD", 100.0, 0.0));
        let lines = vec![so("SO-1", "STEEL-A", 10, 5, 1, 3), so("SO-2", "BAD", 1, 5, 1, 3)];

        let result = BatchingOrchestrator::default().run(&lines, &materials, &furnaces());
        assert!(matches!(result, Err(BatchingError::InvalidYieldPercent { .. })));
    }

    #[test]
    fn test_require_uniform_bounds() {
        let mut resources = furnaces();
        resources[1].max_batch_qty = 2500;
        let lines = vec![so("SO-1", "STEEL-A", 10, 5, 1, 3)];

        let lenient = BatchingOrchestrator::default().run(&lines, &steel_a(), &resources).unwrap();
        assert_eq!(lenient.capacity_warnings.len(), 1);
        assert_eq!(lenient.capacity_warnings[0].resource_id, "FURNACE-2");

        let strict = BatchingOrchestrator::new(BatchingConfig {
            capacity_bounds_policy: CapacityBoundsPolicy::RequireUniform,
            ..Default::default()
        });
        let result = strict.run(&lines, &steel_a(), &resources);
        assert!(matches!(result, Err(BatchingError::DivergentCapacityBounds { .. })));
    }

    #[test]
    fn test_injected_id_generator() {
        let lines = vec![so("SO-1", "STEEL-A", 10, 5, 1, 3)];
        let mut generator = SequentialIdGenerator::new("INJ");

        let result = BatchingOrchestrator::default()
            .run_with_id_generator(&lines, &steel_a(), &furnaces(), &mut generator)
            .unwrap();

        assert_eq!(result.work_orders[0].wo_id, "INJ-000001");
    }

    #[test]
    fn test_empty_input() {
        let result = BatchingOrchestrator::default().run(&[], &steel_a(), &furnaces()).unwrap();
        assert!(result.work_orders.is_empty());
        assert!(result.unfulfilled.is_empty());
        assert_eq!(result.summary.demand_count, 0);
    }

    #[test]
    fn test_huge_demands_do_not_overflow_capacity_check() {
        // 5e16 件 x 100kg / 80% = 6.25e18 kg，两条相加超出 i64
        let lines = vec![
            so("SO-1", "STEEL-A", 50_000_000_000_000_000, 5, 1, 3),
            so("SO-2", "STEEL-A", 50_000_000_000_000_000, 6, 2, 4),
        ];

        let result = sequential("T").run(&lines, &steel_a(), &furnaces()).unwrap();

        // 各自单独成批（超限批），不合并
        assert_eq!(result.work_orders.len(), 2);
        assert_eq!(result.work_orders[0].total_qty, 6_250_000_000_000_000_000);
        assert_eq!(result.work_orders[0].details.len(), 1);
        assert_eq!(result.work_orders[1].total_qty, 6_250_000_000_000_000_000);
        assert_eq!(result.summary.scheduled_qty_kg, i64::MAX);
    }

    #[test]
    fn test_weight_out_of_range_aborts_run() {
        let lines = vec![so("SO-1", "STEEL-A", 100_000_000_000_000_000, 5, 1, 3)];
        let result = sequential("T").run(&lines, &steel_a(), &furnaces());
        assert!(matches!(result, Err(BatchingError::QuantityOutOfRange { .. })));
    }

    #[test]
    fn test_zero_weight_tail_reported_once() {
        // SO-1 2500kg 超限单独成批；SO-2/SO-3 为 0 件，尾批累计为 0 不封批
        let lines = vec![
            so("SO-1", "STEEL-A", 20, 5, 1, 3),
            so("SO-2", "STEEL-A", 0, 6, 2, 4),
            so("SO-3", "STEEL-A", 0, 7, 3, 5),
        ];

        let result = sequential("T").run(&lines, &steel_a(), &furnaces()).unwrap();

        assert_eq!(result.work_orders.len(), 1);
        assert_eq!(result.work_orders[0].total_qty, 2500);
        let ids: Vec<&str> = result.work_orders[0]
            .details
            .iter()
            .map(|d| d.so_line_id.as_str())
            .collect();
        assert_eq!(ids, vec!["SO-1"]);

        let unfulfilled: Vec<(&str, UnfulfilledReason)> = result
            .unfulfilled
            .iter()
            .map(|u| (u.so_line_id.as_str(), u.reason))
            .collect();
        assert_eq!(
            unfulfilled,
            vec![
                ("SO-2", UnfulfilledReason::ZeroQuantity),
                ("SO-3", UnfulfilledReason::ZeroQuantity),
            ]
        );
        assert!(result.unfulfilled.iter().all(|u| u.batch_qty_kg == 0 && u.batch_total_qty.is_none()));
        assert_eq!(result.summary.demand_count, 3);
        assert_eq!(result.summary.unfulfilled_count, 2);
    }

    #[test]
    fn test_all_zero_group_produces_no_work_order() {
        let lines = vec![so("SO-1", "STEEL-A", 0, 5, 1, 3)];

        let result = sequential("T").run(&lines, &steel_a(), &furnaces()).unwrap();

        assert!(result.work_orders.is_empty());
        assert_eq!(result.unfulfilled.len(), 1);
        assert_eq!(result.unfulfilled[0].reason, UnfulfilledReason::ZeroQuantity);
    }

    #[test]
    fn test_zero_weight_before_oversized_seals_empty_weight_batch() {
        // [0kg, 2500kg]: 第二条加入会超限，0kg 候选批次被封批
        let lines = vec![
            so("SO-1", "STEEL-A", 0, 5, 1, 3),
            so("SO-2", "STEEL-A", 20, 6, 2, 4),
        ];

        let result = sequential("T").run(&lines, &steel_a(), &furnaces()).unwrap();

        assert_eq!(result.work_orders.len(), 2);
        let zero = &result.work_orders[0];
        assert_eq!(zero.resource_id, "FURNACE-1");
        assert_eq!(zero.total_qty, 0);
        assert_eq!(zero.status, WorkOrderStatus::OnHoldUnderfill);
        assert_eq!(zero.details[0].so_line_id, "SO-1");

        let oversized = &result.work_orders[1];
        assert_eq!(oversized.resource_id, "FURNACE-2");
        assert_eq!(oversized.total_qty, 2500);
        assert_eq!(oversized.status, WorkOrderStatus::Ready);
        assert!(result.unfulfilled.is_empty());
    }
}
