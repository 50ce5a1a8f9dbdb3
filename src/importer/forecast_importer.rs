// ==========================================
// 门店补货需求计算服务 - 预测数据导入器
// ==========================================
// 流程: 文件解析 → 行校验/类型转换 → 构建预测表
// 红线: 任一行非法 / 零条记录 → 整体失败, 服务拒绝启动
// ==========================================

use crate::domain::forecast::ForecastRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{RawRow, UniversalFileParser};
use crate::repository::forecast_catalog::ForecastCatalog;
use std::path::Path;
use tracing::{info, instrument};

/// 预测行列数: 月份, 区域, 商品, 基准需求
pub const FORECAST_FIELD_COUNT: usize = 4;

const FIELD_NAMES: [&str; FORECAST_FIELD_COUNT] = ["month", "region", "product", "base_need"];

/// 单行转换为预测记录
///
/// # 规则
/// - 列数必须恰好为 4
/// - 月份/区域/商品不能为空
/// - 基准需求必须是非负整数
pub fn parse_forecast_row(raw: &RawRow) -> ImportResult<ForecastRecord> {
    if raw.fields.len() != FORECAST_FIELD_COUNT {
        return Err(ImportError::FieldCountError {
            row: raw.row,
            expected: FORECAST_FIELD_COUNT,
            actual: raw.fields.len(),
        });
    }

    let month = required_field(raw, 0)?;
    let region = required_field(raw, 1)?;
    let product = required_field(raw, 2)?;
    let base_need_raw = required_field(raw, 3)?;

    let base_need = base_need_raw
        .parse::<u32>()
        .map_err(|e| ImportError::TypeConversionError {
            row: raw.row,
            field: FIELD_NAMES[3].to_string(),
            message: format!("'{}' 不是非负整数: {}", base_need_raw, e),
        })?;

    Ok(ForecastRecord::new(product, month, region, base_need))
}

fn required_field(raw: &RawRow, idx: usize) -> ImportResult<&str> {
    let value = raw.fields[idx].trim();
    if value.is_empty() {
        return Err(ImportError::EmptyField {
            row: raw.row,
            field: FIELD_NAMES[idx].to_string(),
        });
    }
    Ok(value)
}

// ==========================================
// ForecastImporter - 预测数据导入器
// ==========================================
pub struct ForecastImporter {
    parser: UniversalFileParser,
}

impl ForecastImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
        }
    }

    /// 从文件加载预测表（.csv / .xlsx / .xls）
    ///
    /// # 返回
    /// - Ok(ForecastCatalog): 完整加载的只读预测表
    /// - Err(ImportError): 文件/行错误，或加载结果为空
    #[instrument(skip_all)]
    pub fn load<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ForecastCatalog> {
        let path = file_path.as_ref();
        info!("开始加载预测数据: {}", path.display());

        let rows = self.parser.parse(path)?;
        let row_count = rows.len();
        let catalog = ForecastCatalog::from_rows(rows)?;

        if catalog.is_empty() {
            return Err(ImportError::EmptyCatalog(path.display().to_string()));
        }

        info!(
            rows = row_count,
            records = catalog.len(),
            "预测数据加载完成"
        );
        Ok(catalog)
    }
}

impl Default for ForecastImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn row(fields: &[&str]) -> RawRow {
        RawRow::new(2, fields.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_parse_valid_row() {
        let record = parse_forecast_row(&row(&["December", "extreme_north", "Bisleri-1L", "55"]))
            .unwrap();
        assert_eq!(record.product, "Bisleri-1L");
        assert_eq!(record.month, "December");
        assert_eq!(record.region, "extreme_north");
        assert_eq!(record.base_need, 55);
    }

    #[test]
    fn test_parse_row_wrong_field_count() {
        let err = parse_forecast_row(&row(&["December", "north", "Bisleri-1L"])).unwrap_err();
        assert!(matches!(
            err,
            ImportError::FieldCountError {
                row: 2,
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_parse_row_non_numeric_need() {
        let err = parse_forecast_row(&row(&["December", "north", "Bisleri-1L", "lots"]))
            .unwrap_err();
        assert!(matches!(
            err,
            ImportError::TypeConversionError { ref field, .. } if field == "base_need"
        ));
    }

    #[test]
    fn test_parse_row_negative_need_rejected() {
        let err =
            parse_forecast_row(&row(&["December", "north", "Bisleri-1L", "-3"])).unwrap_err();
        assert!(matches!(err, ImportError::TypeConversionError { .. }));
    }

    #[test]
    fn test_parse_row_empty_product_rejected() {
        let err = parse_forecast_row(&row(&["December", "north", "", "3"])).unwrap_err();
        assert!(matches!(err, ImportError::EmptyField { ref field, .. } if field == "product"));
    }

    #[test]
    fn test_load_header_only_file_is_empty_catalog() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "month,region,product,base_need").unwrap();

        let result = ForecastImporter::new().load(temp_file.path());
        assert!(matches!(result, Err(ImportError::EmptyCatalog(_))));
    }
}
