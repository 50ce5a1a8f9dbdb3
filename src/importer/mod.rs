// ==========================================
// 门店补货需求计算服务 - 导入层
// ==========================================
// 职责: 外部预测数据导入, 构建只读预测表
// 支持: Excel, CSV
// ==========================================

pub mod error;
pub mod file_parser;
pub mod forecast_importer;
pub mod store_size_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRow, UniversalFileParser};
pub use forecast_importer::{parse_forecast_row, ForecastImporter, FORECAST_FIELD_COUNT};
pub use store_size_importer::{load_store_sizes, parse_store_size_row};
