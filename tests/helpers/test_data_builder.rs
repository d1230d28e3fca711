// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{Duration, NaiveDate};
use furnace_batching::domain::material::{material_table, Material, MaterialTable};
use furnace_batching::domain::resource::Resource;
use furnace_batching::domain::sales_order::SalesOrderLine;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// SalesOrderLine 构建器
// ==========================================

pub struct SalesOrderLineBuilder {
    so_line_id: String,
    material_id: String,
    remaining_quantity: i64,
    committed_on: NaiveDate,
    priority_no: i32,
    fullkit_date: NaiveDate,
}

impl SalesOrderLineBuilder {
    pub fn new(so_line_id: &str, material_id: &str) -> Self {
        Self {
            so_line_id: so_line_id.to_string(),
            material_id: material_id.to_string(),
            remaining_quantity: 1,
            committed_on: date(2025, 1, 1),
            priority_no: 1,
            fullkit_date: date(2025, 1, 1),
        }
    }

    pub fn qty(mut self, qty: i64) -> Self {
        self.remaining_quantity = qty;
        self
    }

    pub fn committed(mut self, day: NaiveDate) -> Self {
        self.committed_on = day;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority_no = priority;
        self
    }

    pub fn fullkit(mut self, day: NaiveDate) -> Self {
        self.fullkit_date = day;
        self
    }

    pub fn build(self) -> SalesOrderLine {
        SalesOrderLine::new(
            &self.so_line_id,
            &self.material_id,
            self.remaining_quantity,
            self.committed_on.and_hms_opt(0, 0, 0).unwrap(),
            self.priority_no,
            self.fullkit_date,
        )
    }
}

/// 简写: (订单行, 材料, 件数, 承诺日, 优先级, 齐套日), 日期均为 2025-01
pub fn so(id: &str, material_id: &str, qty: i64, committed_day: u32, priority: i32, fullkit_day: u32) -> SalesOrderLine {
    SalesOrderLineBuilder::new(id, material_id)
        .qty(qty)
        .committed(date(2025, 1, committed_day))
        .priority(priority)
        .fullkit(date(2025, 1, fullkit_day))
        .build()
}

pub fn furnace(id: &str, min: i64, max: i64, quota: u32, materials: &[&str]) -> Resource {
    Resource::new(id, true, min, max, quota, materials)
}

// ==========================================
// 场景数据
// ==========================================

/// 基本场景: 单材料、两台炉
pub fn case_single_material() -> (Vec<SalesOrderLine>, MaterialTable, Vec<Resource>) {
    let materials = material_table(vec![Material::new("STEEL-A", 100.0, 80.0)]);
    let lines = vec![
        so("SO-1", "STEEL-A", 10, 5, 1, 3),
        so("SO-2", "STEEL-A", 8, 6, 2, 7),
        so("SO-3", "STEEL-A", 6, 10, 3, 20),
    ];
    let resources = vec![
        furnace("FURNACE-1", 1000, 2000, 2, &["STEEL-A"]),
        furnace("FURNACE-2", 1000, 2000, 1, &["STEEL-A"]),
    ];
    (lines, materials, resources)
}

/// 两种材料共用一台炉
pub fn case_two_materials_shared_furnace() -> (Vec<SalesOrderLine>, MaterialTable, Vec<Resource>) {
    let materials = material_table(vec![
        Material::new("STEEL-A", 100.0, 80.0),
        Material::new("STEEL-B", 120.0, 85.0),
    ]);
    let lines = vec![
        so("SO-1", "STEEL-A", 5, 5, 1, 3),
        so("SO-2", "STEEL-A", 7, 6, 2, 4),
        so("SO-3", "STEEL-A", 4, 8, 3, 6),
        so("SO-4", "STEEL-B", 6, 7, 1, 5),
        so("SO-5", "STEEL-B", 9, 9, 2, 8),
        so("SO-6", "STEEL-B", 3, 12, 3, 10),
    ];
    let resources = vec![furnace("FURNACE-1", 800, 2000, 2, &["STEEL-A", "STEEL-B"])];
    (lines, materials, resources)
}

/// 三种材料、专用炉，铝材炉配额不足
pub fn case_three_materials() -> (Vec<SalesOrderLine>, MaterialTable, Vec<Resource>) {
    let materials = material_table(vec![
        Material::new("STEEL-A", 100.0, 80.0),
        Material::new("STEEL-B", 110.0, 82.0),
        Material::new("ALU-C", 60.0, 90.0),
    ]);
    let lines = vec![
        so("SO-1", "STEEL-A", 6, 4, 1, 2),
        so("SO-2", "STEEL-A", 8, 5, 2, 3),
        so("SO-3", "STEEL-A", 4, 6, 3, 4),
        so("SO-4", "STEEL-B", 7, 7, 1, 5),
        so("SO-5", "STEEL-B", 5, 8, 2, 6),
        so("SO-6", "STEEL-B", 9, 9, 3, 7),
        so("SO-7", "ALU-C", 10, 6, 1, 4),
        so("SO-8", "ALU-C", 6, 7, 2, 5),
        so("SO-9", "ALU-C", 8, 10, 3, 8),
        so("SO-10", "ALU-C", 4, 12, 4, 10),
    ];
    let resources = vec![
        furnace("FURNACE-STEEL", 1000, 2500, 2, &["STEEL-A", "STEEL-B"]),
        furnace("FURNACE-ALU", 600, 1500, 1, &["ALU-C"]),
    ];
    (lines, materials, resources)
}

/// 大批量: 12 条订单行交替两种材料，单炉配额 3
pub fn case_high_volume() -> (Vec<SalesOrderLine>, MaterialTable, Vec<Resource>) {
    let materials = material_table(vec![
        Material::new("STEEL-X", 95.0, 78.0),
        Material::new("STEEL-Y", 105.0, 83.0),
    ]);
    let lines = (1..=12)
        .map(|i: i64| {
            SalesOrderLineBuilder::new(
                &format!("SO-{}", i),
                if i % 2 == 0 { "STEEL-X" } else { "STEEL-Y" },
            )
            .qty(5 + i)
            .committed(date(2025, 1, 5) + Duration::days(i))
            .priority(i as i32)
            .fullkit(date(2025, 1, 3) + Duration::days(i - 1))
            .build()
        })
        .collect();
    let resources = vec![furnace("FURNACE-MAIN", 1200, 3000, 3, &["STEEL-X", "STEEL-Y"])];
    (lines, materials, resources)
}

/// 零件数订单行: 超限单批后的零重量尾批 + 零重量在超限需求之前
pub fn case_zero_quantity() -> (Vec<SalesOrderLine>, MaterialTable, Vec<Resource>) {
    let materials = material_table(vec![
        Material::new("STEEL-A", 100.0, 80.0),
        Material::new("STEEL-B", 120.0, 85.0),
    ]);
    let lines = vec![
        so("SO-1", "STEEL-A", 20, 5, 1, 3),
        so("SO-2", "STEEL-A", 0, 6, 2, 4),
        so("SO-3", "STEEL-A", 0, 7, 3, 5),
        so("SO-4", "STEEL-B", 0, 5, 1, 6),
        so("SO-5", "STEEL-B", 20, 6, 2, 7),
    ];
    let resources = vec![
        furnace("FURNACE-1", 1000, 2000, 2, &["STEEL-A", "STEEL-B"]),
        furnace("FURNACE-2", 1000, 2000, 1, &["STEEL-A", "STEEL-B"]),
    ];
    (lines, materials, resources)
}
