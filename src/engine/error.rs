// ==========================================
// 炉批自动组批系统 - 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 配置类错误整批中止,不产出部分工单
// ==========================================

use thiserror::Error;

/// 组批引擎错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BatchingError {
    // ===== 输入/配置错误 (致命) =====
    #[error("材料未找到: so_line_id={so_line_id}, material_id={material_id}")]
    MaterialNotFound {
        so_line_id: String,
        material_id: String,
    },

    #[error("成材率非法: material_id={material_id}, yield_percent={yield_percent}（必须 > 0）")]
    InvalidYieldPercent {
        material_id: String,
        yield_percent: f64,
    },

    #[error("单件成品重量非法: material_id={material_id}, kg_per_unit={kg_per_unit}（必须 >= 0）")]
    InvalidConversionFactor {
        material_id: String,
        kg_per_unit: f64,
    },

    #[error("剩余数量为负: so_line_id={so_line_id}, quantity={quantity}")]
    NegativeQuantity { so_line_id: String, quantity: i64 },

    #[error("投料重量超出范围: so_line_id={so_line_id}, material_id={material_id}, batch_qty_kg={batch_qty_kg}")]
    QuantityOutOfRange {
        so_line_id: String,
        material_id: String,
        batch_qty_kg: f64,
    },

    #[error(
        "可用炉台批量上下限不一致: material_id={material_id}, 基准={baseline_resource_id}({baseline_min}-{baseline_max}), 冲突={resource_id}({min_batch_qty}-{max_batch_qty})"
    )]
    DivergentCapacityBounds {
        material_id: String,
        baseline_resource_id: String,
        baseline_min: i64,
        baseline_max: i64,
        resource_id: String,
        min_batch_qty: i64,
        max_batch_qty: i64,
    },
}
