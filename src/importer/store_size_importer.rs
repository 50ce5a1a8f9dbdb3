// ==========================================
// 门店补货需求计算服务 - 门店规模种子导入
// ==========================================
// 格式: store,size (size ∈ xs/s/m/l/xl), 首行为表头
// ==========================================

use crate::domain::types::StoreSizeClass;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{RawRow, UniversalFileParser};
use std::path::Path;
use tracing::info;

const STORE_SIZE_FIELD_COUNT: usize = 2;

/// 单行转换为 (门店ID, 规模)
pub fn parse_store_size_row(raw: &RawRow) -> ImportResult<(String, StoreSizeClass)> {
    if raw.fields.len() != STORE_SIZE_FIELD_COUNT {
        return Err(ImportError::FieldCountError {
            row: raw.row,
            expected: STORE_SIZE_FIELD_COUNT,
            actual: raw.fields.len(),
        });
    }

    let store_id = raw.fields[0].trim();
    if store_id.is_empty() {
        return Err(ImportError::EmptyField {
            row: raw.row,
            field: "store".to_string(),
        });
    }

    let size = raw.fields[1]
        .parse::<StoreSizeClass>()
        .map_err(|e| ImportError::TypeConversionError {
            row: raw.row,
            field: "size".to_string(),
            message: e.to_string(),
        })?;

    Ok((store_id.to_string(), size))
}

/// 从文件加载门店规模种子登记
pub fn load_store_sizes<P: AsRef<Path>>(
    file_path: P,
) -> ImportResult<Vec<(String, StoreSizeClass)>> {
    let path = file_path.as_ref();
    let entries = UniversalFileParser
        .parse(path)?
        .iter()
        .map(parse_store_size_row)
        .collect::<ImportResult<Vec<_>>>()?;

    info!("加载门店规模种子登记: {} 条 ({})", entries.len(), path.display());
    Ok(entries)
}
