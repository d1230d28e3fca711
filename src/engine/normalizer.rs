// ==========================================
// 炉批自动组批系统 - 需求归一化引擎
// ==========================================
// 职责: 订单行剩余件数 -> 投料重量 (kg)
// 公式: finish_kg = 剩余件数 × 单件成品重量
//       batch_qty_kg = ceil(finish_kg × 100 / 成材率%)
// 红线: 一律向上取整,向下取整会导致欠产
// ==========================================

use crate::domain::batch::Demand;
use crate::domain::material::{Material, MaterialTable};
use crate::domain::sales_order::SalesOrderLine;
use crate::engine::error::BatchingError;

// ==========================================
// DemandNormalizer - 需求归一化引擎
// ==========================================
pub struct DemandNormalizer {
    // 无状态引擎，纯函数
}

impl DemandNormalizer {
    pub fn new() -> Self {
        Self {}
    }

    /// 归一化单条订单行
    ///
    /// # 参数
    /// - `line`: 订单行
    /// - `material`: 已解析的材料主数据
    ///
    /// # 返回
    /// - Ok(Demand): 齐套日期与优先级原样带出
    /// - Err: 成材率 <= 0 / 换算系数非法 / 剩余数量为负 / 投料重量超出 i64 范围
    pub fn normalize(
        &self,
        line: &SalesOrderLine,
        material: &Material,
    ) -> Result<Demand, BatchingError> {
        Self::validate_material(material)?;

        if line.remaining_quantity < 0 {
            return Err(BatchingError::NegativeQuantity {
                so_line_id: line.so_line_id.clone(),
                quantity: line.remaining_quantity,
            });
        }

        let finish_kg = line.remaining_quantity as f64 * material.kg_per_unit_finish_weight;
        let raw_qty_kg = (finish_kg * 100.0 / material.material_yield_percent).ceil();
        // i64::MAX as f64 == 2^63，必须严格小于
        if !raw_qty_kg.is_finite() || raw_qty_kg >= i64::MAX as f64 {
            return Err(BatchingError::QuantityOutOfRange {
                so_line_id: line.so_line_id.clone(),
                material_id: line.material_id.clone(),
                batch_qty_kg: raw_qty_kg,
            });
        }
        let batch_qty_kg = raw_qty_kg as i64;

        Ok(Demand {
            so_line_id: line.so_line_id.clone(),
            material_id: line.material_id.clone(),
            batch_qty_kg,
            fullkit_date: line.earliest_fullkit_date,
            priority: line.priority_no,
            original_committed_at: line.original_committed_at,
        })
    }

    /// 归一化全部订单行（任一行失败则整体失败，不返回部分结果）
    pub fn normalize_all(
        &self,
        lines: &[SalesOrderLine],
        materials: &MaterialTable,
    ) -> Result<Vec<Demand>, BatchingError> {
        lines
            .iter()
            .map(|line| {
                let material = materials.get(&line.material_id).ok_or_else(|| {
                    BatchingError::MaterialNotFound {
                        so_line_id: line.so_line_id.clone(),
                        material_id: line.material_id.clone(),
                    }
                })?;
                self.normalize(line, material)
            })
            .collect()
    }

    fn validate_material(material: &Material) -> Result<(), BatchingError> {
        let yield_percent = material.material_yield_percent;
        if !yield_percent.is_finite() || yield_percent <= 0.0 {
            return Err(BatchingError::InvalidYieldPercent {
                material_id: material.material_id.clone(),
                yield_percent,
            });
        }

        let kg_per_unit = material.kg_per_unit_finish_weight;
        if !kg_per_unit.is_finite() || kg_per_unit < 0.0 {
            return Err(BatchingError::InvalidConversionFactor {
                material_id: material.material_id.clone(),
                kg_per_unit,
            });
        }

        Ok(())
    }
}

impl Default for DemandNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
