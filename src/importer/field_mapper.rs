// ==========================================
// 炉批自动组批系统 - 字段映射器
// ==========================================
// 职责: 原始记录 -> 领域对象 + 类型转换
// 红线: 只做格式校验,业务规则校验留给引擎
// ==========================================

use crate::domain::material::Material;
use crate::domain::resource::Resource;
use crate::domain::sales_order::SalesOrderLine;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRecord;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub struct FieldMapper {
    file: String,
}

impl FieldMapper {
    /// `file` 仅用于错误信息定位
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
        }
    }

    pub fn map_sales_order_line(&self, record: &RawRecord) -> ImportResult<SalesOrderLine> {
        Ok(SalesOrderLine {
            so_line_id: self.get_string(record, "so_line_id")?,
            material_id: self.get_string(record, "material_id")?,
            remaining_quantity: self.parse_number(record, "remaining_quantity")?,
            original_committed_at: self.parse_datetime(record, "original_committed_at")?,
            priority_no: self.parse_number(record, "priority_no")?,
            earliest_fullkit_date: self.parse_date(record, "earliest_fullkit_date")?,
        })
    }

    pub fn map_material(&self, record: &RawRecord) -> ImportResult<Material> {
        Ok(Material {
            material_id: self.get_string(record, "material_id")?,
            kg_per_unit_finish_weight: self.parse_number(record, "kg_per_unit_finish_weight")?,
            material_yield_percent: self.parse_number(record, "material_yield_percent")?,
        })
    }

    pub fn map_resource(&self, record: &RawRecord) -> ImportResult<Resource> {
        Ok(Resource {
            resource_id: self.get_string(record, "resource_id")?,
            is_batch_type: self.parse_bool(record, "is_batch_type")?,
            min_batch_qty: self.parse_number(record, "min_batch_qty")?,
            max_batch_qty: self.parse_number(record, "max_batch_qty")?,
            n_per_cycle: self.parse_number(record, "n_per_cycle")?,
            eligible_materials: self.parse_list(record, "eligible_materials"),
        })
    }

    // ==========================================
    // 类型转换
    // ==========================================

    fn get_string(&self, record: &RawRecord, field: &str) -> ImportResult<String> {
        match record.fields.get(field).map(|v| v.trim()) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(ImportError::MissingField {
                file: self.file.clone(),
                row: record.row,
                field: field.to_string(),
            }),
        }
    }

    fn parse_number<T>(&self, record: &RawRecord, field: &str) -> ImportResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.get_string(record, field)?;
        raw.parse::<T>()
            .map_err(|e| self.field_error(record, field, format!("{} ({})", e, raw)))
    }

    fn parse_bool(&self, record: &RawRecord, field: &str) -> ImportResult<bool> {
        let raw = self.get_string(record, field)?;
        match raw.to_uppercase().as_str() {
            "TRUE" | "1" | "Y" | "YES" => Ok(true),
            "FALSE" | "0" | "N" | "NO" => Ok(false),
            _ => Err(self.field_error(record, field, format!("无法识别的布尔值: {}", raw))),
        }
    }

    fn parse_date(&self, record: &RawRecord, field: &str) -> ImportResult<NaiveDate> {
        let raw = self.get_string(record, field)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|_| {
            self.field_error(record, field, format!("期望 YYYY-MM-DD，实际 {}", raw))
        })
    }

    /// 支持纯日期（按 00:00:00）或日期时间
    fn parse_datetime(&self, record: &RawRecord, field: &str) -> ImportResult<NaiveDateTime> {
        let raw = self.get_string(record, field)?;
        for format in DATETIME_FORMATS {
            if let Ok(value) = NaiveDateTime::parse_from_str(&raw, format) {
                return Ok(value);
            }
        }
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| {
                self.field_error(
                    record,
                    field,
                    format!("期望 YYYY-MM-DD 或 YYYY-MM-DD HH:MM:SS，实际 {}", raw),
                )
            })
    }

    /// 逗号/分号/竖线分隔的列表，空值视为空集
    fn parse_list(&self, record: &RawRecord, field: &str) -> BTreeSet<String> {
        record
            .fields
            .get(field)
            .map(|raw| {
                raw.split([',', ';', '|'])
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn field_error(&self, record: &RawRecord, field: &str, message: String) -> ImportError {
        ImportError::FieldError {
            file: self.file.clone(),
            row: record.row,
            field: field.to_string(),
            message,
        }
    }
}
