// ==========================================
// 炉批自动组批系统 - 计划快照导入器
// ==========================================
// 输入: 订单行 / 材料 / 炉台 三个 CSV 文件
// 输出: PlanningSnapshot (引擎输入边界)
// ==========================================

use crate::domain::material::MaterialTable;
use crate::domain::resource::Resource;
use crate::domain::sales_order::SalesOrderLine;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::CsvParser;
use anyhow::{anyhow, Context};
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

pub const SALES_ORDER_LINES_FILE: &str = "sales_order_lines.csv";
pub const MATERIALS_FILE: &str = "materials.csv";
pub const RESOURCES_FILE: &str = "resources.csv";

/// 一次组批运行的完整输入快照
#[derive(Debug, Clone, Default)]
pub struct PlanningSnapshot {
    pub sales_order_lines: Vec<SalesOrderLine>,
    pub materials: MaterialTable,
    pub resources: Vec<Resource>,
}

// ==========================================
// SnapshotImporter
// ==========================================
pub struct SnapshotImporter {
    parser: CsvParser,
}

impl SnapshotImporter {
    pub fn new() -> Self {
        Self { parser: CsvParser }
    }

    /// 从目录加载快照（固定文件名）
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub fn load_snapshot<P: AsRef<Path>>(&self, dir: P) -> ImportResult<PlanningSnapshot> {
        let dir = dir.as_ref();
        let metadata = fs::metadata(dir)
            .with_context(|| format!("快照目录不可访问: {}", dir.display()))?;
        if !metadata.is_dir() {
            return Err(anyhow!("快照路径不是目录: {}", dir.display()).into());
        }

        let snapshot = PlanningSnapshot {
            sales_order_lines: self.load_sales_order_lines(dir.join(SALES_ORDER_LINES_FILE))?,
            materials: self.load_materials(dir.join(MATERIALS_FILE))?,
            resources: self.load_resources(dir.join(RESOURCES_FILE))?,
        };

        info!(
            lines_count = snapshot.sales_order_lines.len(),
            materials_count = snapshot.materials.len(),
            resources_count = snapshot.resources.len(),
            "计划快照导入完成"
        );
        Ok(snapshot)
    }

    pub fn load_sales_order_lines<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<SalesOrderLine>> {
        let path = path.as_ref();
        let mapper = FieldMapper::new(&file_label(path));
        self.parser
            .parse_to_raw_records(path)?
            .iter()
            .map(|record| mapper.map_sales_order_line(record))
            .collect()
    }

    /// 材料代码重复视为导入错误
    pub fn load_materials<P: AsRef<Path>>(&self, path: P) -> ImportResult<MaterialTable> {
        let path = path.as_ref();
        let label = file_label(path);
        let mapper = FieldMapper::new(&label);

        let mut materials = MaterialTable::new();
        for record in self.parser.parse_to_raw_records(path)? {
            let material = mapper.map_material(&record)?;
            if materials.contains_key(&material.material_id) {
                return Err(ImportError::DuplicateKey {
                    file: label,
                    row: record.row,
                    key: material.material_id,
                });
            }
            materials.insert(material.material_id.clone(), material);
        }
        Ok(materials)
    }

    pub fn load_resources<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<Resource>> {
        let path = path.as_ref();
        let mapper = FieldMapper::new(&file_label(path));
        self.parser
            .parse_to_raw_records(path)?
            .iter()
            .map(|record| mapper.map_resource(record))
            .collect()
    }
}

impl Default for SnapshotImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
