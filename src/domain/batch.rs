// ==========================================
// 炉批自动组批系统 - 组批内部模型
// ==========================================
// 用途: 单次运行内的派生对象,不跨运行保留
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// Demand - 归一化需求 (与订单行 1:1)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub so_line_id: String,
    pub material_id: String,
    pub batch_qty_kg: i64,                    // 投料重量 (向上取整)
    pub fullkit_date: NaiveDate,              // 齐套日期 (沿用订单行)
    pub priority: i32,                        // 优先级 (沿用订单行)
    pub original_committed_at: NaiveDateTime, // 排序键
}

// ==========================================
// BatchCandidate - 候选批次
// ==========================================
// 组批期间可变,封批后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCandidate {
    pub material_id: String,
    pub demands: Vec<Demand>,
    total_qty: i64,
}

impl BatchCandidate {
    pub fn new(material_id: &str) -> Self {
        Self {
            material_id: material_id.to_string(),
            demands: Vec::new(),
            total_qty: 0,
        }
    }

    pub fn push(&mut self, demand: Demand) {
        self.total_qty = self.total_qty.saturating_add(demand.batch_qty_kg);
        self.demands.push(demand);
    }

    /// 批次总量 = 各需求投料重量之和
    pub fn total_qty(&self) -> i64 {
        self.total_qty
    }

    pub fn is_empty(&self) -> bool {
        self.demands.is_empty()
    }

    /// 批次齐套日期: 取成员需求中最晚的齐套日期
    pub fn latest_fullkit_date(&self) -> Option<NaiveDate> {
        self.demands.iter().map(|d| d.fullkit_date).max()
    }
}
