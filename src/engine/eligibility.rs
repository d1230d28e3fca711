// ==========================================
// 炉批自动组批系统 - 炉台准入引擎
// ==========================================
// 红线: 只有批处理型且可加工该材料的炉台参与组批
// ==========================================
// 职责: 可用炉台筛选 + 组批上下限选取
// 输入: 材料代码 + 全部炉台
// 输出: 可用炉台 (按炉台代码升序) + 组批上下限 + 上下限不一致告警
// ==========================================

use crate::config::CapacityBoundsPolicy;
use crate::domain::resource::{BatchBounds, Resource};
use crate::engine::error::BatchingError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// 上下限不一致告警（FIRST_ELIGIBLE 策略下记录，不中止）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityBoundsWarning {
    pub material_id: String,
    pub governing_resource_id: String,
    pub governing_bounds: BatchBounds,
    pub resource_id: String,
    pub bounds: BatchBounds,
}

/// 材料组的炉台准入结果
#[derive(Debug, Clone)]
pub struct ResourceSelection {
    /// 可用炉台（按炉台代码升序）
    pub resources: Vec<Resource>,
    /// 组批使用的上下限（取第一台）
    pub bounds: BatchBounds,
    pub warnings: Vec<CapacityBoundsWarning>,
}

// ==========================================
// ResourceEligibility - 炉台准入引擎
// ==========================================
pub struct ResourceEligibility {
    policy: CapacityBoundsPolicy,
}

impl ResourceEligibility {
    pub fn new(policy: CapacityBoundsPolicy) -> Self {
        Self { policy }
    }

    /// 筛选可用炉台
    ///
    /// # 返回
    /// - Ok(None): 无可用炉台（覆盖缺口，非错误）
    /// - Ok(Some(selection)): 可用炉台与组批上下限
    /// - Err: REQUIRE_UNIFORM 策略下上下限不一致
    #[instrument(skip(self, resources), fields(resources_count = resources.len()))]
    pub fn select(
        &self,
        material_id: &str,
        resources: &[Resource],
    ) -> Result<Option<ResourceSelection>, BatchingError> {
        let mut eligible: Vec<Resource> = resources
            .iter()
            .filter(|r| r.can_batch(material_id))
            .cloned()
            .collect();
        eligible.sort_by(|a, b| a.resource_id.cmp(&b.resource_id));

        let Some(governing) = eligible.first() else {
            return Ok(None);
        };
        let bounds = governing.bounds();

        let mut warnings = Vec::new();
        for other in eligible.iter().skip(1) {
            if other.bounds() == bounds {
                continue;
            }

            match self.policy {
                CapacityBoundsPolicy::RequireUniform => {
                    return Err(BatchingError::DivergentCapacityBounds {
                        material_id: material_id.to_string(),
                        baseline_resource_id: governing.resource_id.clone(),
                        baseline_min: bounds.min_batch_qty,
                        baseline_max: bounds.max_batch_qty,
                        resource_id: other.resource_id.clone(),
                        min_batch_qty: other.min_batch_qty,
                        max_batch_qty: other.max_batch_qty,
                    });
                }
                CapacityBoundsPolicy::FirstEligible => {
                    warn!(
                        material_id,
                        governing_resource_id = %governing.resource_id,
                        resource_id = %other.resource_id,
                        "可用炉台批量上下限不一致，按第一台组批"
                    );
                    warnings.push(CapacityBoundsWarning {
                        material_id: material_id.to_string(),
                        governing_resource_id: governing.resource_id.clone(),
                        governing_bounds: bounds,
                        resource_id: other.resource_id.clone(),
                        bounds: other.bounds(),
                    });
                }
            }
        }

        Ok(Some(ResourceSelection {
            resources: eligible,
            bounds,
            warnings,
        }))
    }
}
