// ==========================================
// 门店补货需求计算服务 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 约定: 首行为表头,按列位置取值 (月份, 区域, 商品, 基准需求)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawRow - 原始行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 文件中的行号（表头为第 1 行）
    pub row: usize,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(row: usize, fields: Vec<String>) -> Self {
        Self { row, fields }
    }

    fn is_blank(&self) -> bool {
        self.fields.iter().all(|v| v.is_empty())
    }
}

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行（已跳过表头与空白行，字段已 trim）
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        // 检查扩展名
        if let Some(ext) = file_path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 列数校验交给行解析阶段，以便报告行号
            .from_reader(file);

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let row_no = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 2);
            let row = RawRow::new(
                row_no,
                record.iter().map(|v| v.trim().to_string()).collect(),
            );

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // range 从首个非空单元格开始; 行号需换算回工作表中的绝对行
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

        // 第一行为表头
        let rows = range
            .rows()
            .enumerate()
            .skip(1)
            .map(|(idx, cells)| {
                RawRow::new(
                    first_row + idx + 1,
                    cells.iter().map(|c| c.to_string().trim().to_string()).collect(),
                )
            })
            .filter(|row| !row.is_blank())
            .collect();

        Ok(rows)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRow>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_to_raw_rows(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_rows(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    #[test]
    fn test_csv_parser_skips_header() {
        let temp_file = csv_file(&[
            "month,region,product,base_need",
            "December,extreme_north,Bisleri-1L,55",
            "January, south ,Bisleri-1L,40",
        ]);

        let rows = CsvParser.parse_to_raw_rows(temp_file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 2);
        assert_eq!(rows[0].fields[3], "55");
        assert_eq!(rows[1].fields[1], "south");
    }

    #[test]
    fn test_csv_parser_skip_blank_rows() {
        let temp_file = csv_file(&[
            "month,region,product,base_need",
            "December,extreme_north,Bisleri-1L,55",
            ",,,",
            "May,west,Kinley-500ml,12",
        ]);

        let rows = CsvParser.parse_to_raw_rows(temp_file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].row, 4);
    }

    #[test]
    fn test_csv_parser_keeps_short_rows_for_validation() {
        let temp_file = csv_file(&["month,region,product,base_need", "December,north"]);

        let rows = CsvParser.parse_to_raw_rows(temp_file.path()).unwrap();
        assert_eq!(rows[0].fields.len(), 2);
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_raw_rows(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures/datasets")
            .join(name)
    }

    #[test]
    fn test_excel_parser_reports_sheet_row_numbers() {
        // 表头位于第 3 行，前两行为空
        let rows = ExcelParser
            .parse_to_raw_rows(&fixture("forecast_sample.xlsx"))
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 4);
        assert_eq!(
            rows[0].fields,
            vec!["December", "extreme_north", "Bisleri-1L", "55"]
        );
        assert_eq!(rows[1].row, 5);
        assert_eq!(rows[1].fields[1], "south");
    }

    #[test]
    fn test_excel_parser_rejects_non_excel_extension() {
        let temp_file = csv_file(&["month,region,product,base_need"]);
        let result = ExcelParser.parse_to_raw_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "csv"));
    }

    #[test]
    fn test_excel_parser_corrupt_workbook() {
        let mut temp_file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        temp_file.write_all(b"this is not a zip archive").unwrap();

        let result = ExcelParser.parse_to_raw_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));

        let result = UniversalFileParser.parse(temp_file.path());
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let result = UniversalFileParser.parse("forecast.json");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "json"));
    }
}
