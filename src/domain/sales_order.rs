// ==========================================
// 炉批自动组批系统 - 销售订单行领域模型
// ==========================================
// 红线: 输入快照,引擎只读不改
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// SalesOrderLine - 销售订单行 (外部输入)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderLine {
    pub so_line_id: String,                  // 订单行号
    pub material_id: String,                 // 材料代码
    pub remaining_quantity: i64,             // 剩余数量 (成品件数)
    pub original_committed_at: NaiveDateTime, // 原始承诺时间
    pub priority_no: i32,                    // 优先级 (越小越优先)
    pub earliest_fullkit_date: NaiveDate,    // 最早齐套日期
}

impl SalesOrderLine {
    pub fn new(
        so_line_id: &str,
        material_id: &str,
        remaining_quantity: i64,
        original_committed_at: NaiveDateTime,
        priority_no: i32,
        earliest_fullkit_date: NaiveDate,
    ) -> Self {
        Self {
            so_line_id: so_line_id.to_string(),
            material_id: material_id.to_string(),
            remaining_quantity,
            original_committed_at,
            priority_no,
            earliest_fullkit_date,
        }
    }
}
