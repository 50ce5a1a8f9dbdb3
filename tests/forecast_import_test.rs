// ==========================================
// 预测数据导入集成测试
// ==========================================
// 覆盖: CSV/Excel 加载 → 预测目录; 行级错误; 启动装配失败
// ==========================================


use std::path::PathBuf;

use chrono::NaiveDate;
use need_calculation::app::AppState;
use need_calculation::config::ServiceConfig;
use need_calculation::domain::need::{NeedCalculationRequest, StoreRef};
use need_calculation::domain::types::StoreSizeClass;
use need_calculation::importer::{ForecastImporter, ImportError};
use test_helpers::{write_forecast_csv, write_store_sizes_csv, TEST_SEED};

fn service_config(forecast_path: PathBuf, store_sizes_path: Option<PathBuf>) -> ServiceConfig {
    ServiceConfig {
        forecast_path,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        store_sizes_path,
        random_seed: Some(TEST_SEED),
    }
}

#[test]
fn test_load_catalog_from_csv() {
    let file = write_forecast_csv(&[
        "December,extreme_north,Bisleri-1L,55",
        "",
        " May , south , Kinley-500ml , 8 ",
        "December,south,Bisleri-1L,0",
    ])
    .unwrap();

    let catalog = ForecastImporter::new().load(file.path()).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog
            .lookup("Kinley-500ml", "May", "south")
            .map(|r| r.base_need),
        Some(8)
    );
    assert_eq!(catalog.distinct_months(), vec!["December", "May"]);
}

#[test]
fn test_duplicate_key_last_row_wins() {
    let file = write_forecast_csv(&[
        "December,extreme_north,Bisleri-1L,55",
        "December,extreme_north,Bisleri-1L,60",
    ])
    .unwrap();

    let catalog = ForecastImporter::new().load(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog
            .lookup("Bisleri-1L", "December", "extreme_north")
            .map(|r| r.base_need),
        Some(60)
    );
}

#[test]
fn test_malformed_row_rejects_whole_file() {
    let file = write_forecast_csv(&[
        "December,extreme_north,Bisleri-1L,55",
        "December,south,Bisleri-1L",
    ])
    .unwrap();

    let result = ForecastImporter::new().load(file.path());
    assert!(matches!(
        result,
        Err(ImportError::FieldCountError { expected: 4, actual: 3, .. })
    ));
}

#[test]
fn test_non_numeric_need_rejected() {
    let file = write_forecast_csv(&["December,south,Bisleri-1L,lots"]).unwrap();

    let result = ForecastImporter::new().load(file.path());
    assert!(matches!(result, Err(ImportError::TypeConversionError { .. })));
}

#[test]
fn test_header_only_file_is_empty_catalog() {
    let file = write_forecast_csv(&[]).unwrap();

    let result = ForecastImporter::new().load(file.path());
    assert!(matches!(result, Err(ImportError::EmptyCatalog(_))));
}

#[test]
fn test_app_state_refuses_missing_forecast() {
    let config = service_config(PathBuf::from("/definitely/missing/forecast.csv"), None);
    assert!(AppState::new(&config).is_err());
}

#[test]
fn test_app_state_uses_store_sizes_file() {
    let forecast = write_forecast_csv(&["December,extreme_north,Bisleri-1L,55"]).unwrap();
    let sizes = write_store_sizes_csv(&["north-01,xl", "str1,xs"]).unwrap();

    let state = AppState::new(&service_config(
        forecast.path().to_path_buf(),
        Some(sizes.path().to_path_buf()),
    ))
    .unwrap();

    let assignments = state.need_api.list_store_assignments();
    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments.get("north-01"), Some(&StoreSizeClass::XL));

    let request = NeedCalculationRequest {
        product_name: "Bisleri-1L".to_string(),
        stores: vec![
            StoreRef::new("north-01", "extreme_north"),
            StoreRef::new("str1", "extreme_north"),
        ],
        month: Some("December".to_string()),
    };
    let response = state
        .need_api
        .calculate_on(&request, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
        .unwrap();

    let needs: Vec<u64> = response.need_per_sku.iter().map(|e| e.need).collect();
    assert_eq!(needs, vec![275, 55]);
}

fn excel_fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/datasets")
        .join(name)
}

#[test]
fn test_load_catalog_from_excel() {
    let catalog = ForecastImporter::new()
        .load(excel_fixture("forecast_sample.xlsx"))
        .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog
            .lookup("Bisleri-1L", "December", "extreme_north")
            .map(|r| r.base_need),
        Some(55)
    );
    assert_eq!(catalog.distinct_regions(), vec!["extreme_north", "south"]);
}

#[test]
fn test_excel_row_error_reports_sheet_row() {
    // 表头在第 3 行; 第 5 行缺少基准需求
    let result = ForecastImporter::new().load(excel_fixture("forecast_missing_need.xlsx"));
    assert!(matches!(
        result,
        Err(ImportError::EmptyField { row: 5, .. })
    ));
}
