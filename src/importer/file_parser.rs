// ==========================================
// 炉批自动组批系统 - CSV 文件解析器
// ==========================================
// 输出: 行号 + 表头->值 的原始记录
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始记录: 文件行号（含表头行计数）+ 字段映射
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub row: usize,
    pub fields: HashMap<String, String>,
}

// ==========================================
// CsvParser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    pub fn parse_to_raw_records(&self, path: &Path) -> ImportResult<Vec<RawRecord>> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .trim(Trim::All)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let fields: HashMap<String, String> = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.clone(), v.to_string()))
                .collect();

            // 跳过完全空白的行
            if fields.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(RawRecord {
                row: row_idx + 2,
                fields,
            });
        }

        Ok(records)
    }
}
