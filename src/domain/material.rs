// ==========================================
// 炉批自动组批系统 - 材料领域模型
// ==========================================
// 用途: 成品件数 -> 投料重量 的换算参数
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// Material - 材料主数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub material_id: String,             // 材料代码
    pub kg_per_unit_finish_weight: f64,  // 单件成品重量 (kg)
    pub material_yield_percent: f64,     // 成材率 (0-100)
}

impl Material {
    pub fn new(material_id: &str, kg_per_unit_finish_weight: f64, material_yield_percent: f64) -> Self {
        Self {
            material_id: material_id.to_string(),
            kg_per_unit_finish_weight,
            material_yield_percent,
        }
    }
}

/// 材料查找表: material_id -> Material
pub type MaterialTable = HashMap<String, Material>;

/// 由材料列表构建查找表（后出现的同名材料覆盖先出现的）
pub fn material_table<I>(materials: I) -> MaterialTable
where
    I: IntoIterator<Item = Material>,
{
    materials
        .into_iter()
        .map(|m| (m.material_id.clone(), m))
        .collect()
}
