// ==========================================
// 炉批自动组批系统 - 导入层
// ==========================================
// 职责: 外部 CSV 快照 -> 引擎输入
// 支持: CSV
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod snapshot_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, RawRecord};
pub use snapshot_importer::{
    PlanningSnapshot, SnapshotImporter, MATERIALS_FILE, RESOURCES_FILE, SALES_ORDER_LINES_FILE,
};
