// ==========================================
// 门店补货需求计算服务 - 需求计算 API
// ==========================================
// 职责: 请求校验 → 需求计算; 配置发现; 门店规模管理
// ==========================================

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::validate_calculation_request;
use crate::domain::need::{NeedCalculationRequest, NeedCalculationResponse};
use crate::domain::types::StoreSizeClass;
use crate::engine::NeedCalculator;
use crate::repository::StoreSizeRegistry;

// ==========================================
// ConfigurationView - 配置发现结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationView {
    pub available_months: Vec<String>,
    pub available_regions: Vec<String>,
    pub available_products: Vec<String>,
    pub store_sizes: Vec<String>,
}

// ==========================================
// StoreAssignmentView - 门店规模登记结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAssignmentView {
    pub store_id: String,
    pub size: StoreSizeClass,
    pub previous: Option<StoreSizeClass>,
}

// ==========================================
// NeedApi - 需求计算 API
// ==========================================
pub struct NeedApi {
    calculator: Arc<NeedCalculator>,
    store_sizes: Arc<StoreSizeRegistry>,
}

impl NeedApi {
    /// 创建新的NeedApi实例
    ///
    /// # 参数
    /// - calculator: 需求计算引擎
    /// - store_sizes: 门店规模登记表（与引擎共享同一实例）
    pub fn new(calculator: Arc<NeedCalculator>, store_sizes: Arc<StoreSizeRegistry>) -> Self {
        Self {
            calculator,
            store_sizes,
        }
    }

    // ==========================================
    // 需求计算
    // ==========================================

    /// 计算需求（月份缺省取当前月）
    pub fn calculate(
        &self,
        request: &NeedCalculationRequest,
    ) -> ApiResult<NeedCalculationResponse> {
        self.calculate_on(request, Local::now().date_naive())
    }

    /// 以指定日期为“今天”计算
    ///
    /// # 返回
    /// - Ok(NeedCalculationResponse): 每个输入门店一条 SKU 需求
    /// - Err(ApiError::ValidationFailed): 请求不合法（未进入计算）
    pub fn calculate_on(
        &self,
        request: &NeedCalculationRequest,
        today: NaiveDate,
    ) -> ApiResult<NeedCalculationResponse> {
        validate_calculation_request(request)?;

        let request_id = Uuid::new_v4();
        let span = info_span!("calculate_needs", %request_id, product = %request.product_name);
        let _guard = span.enter();

        info!("收到需求计算请求: {} 家门店", request.stores.len());

        let need_per_sku = self.calculator.calculate_on(
            &request.product_name,
            &request.stores,
            request.month.as_deref(),
            today,
        );

        Ok(NeedCalculationResponse { need_per_sku })
    }

    // ==========================================
    // 配置发现
    // ==========================================

    pub fn available_months(&self) -> Vec<String> {
        self.calculator.available_months()
    }

    pub fn available_regions(&self) -> Vec<String> {
        self.calculator.available_regions()
    }

    pub fn available_products(&self) -> Vec<String> {
        self.calculator.available_products()
    }

    /// 汇总配置发现信息
    pub fn get_configuration(&self) -> ConfigurationView {
        ConfigurationView {
            available_months: self.available_months(),
            available_regions: self.available_regions(),
            available_products: self.available_products(),
            store_sizes: StoreSizeClass::codes()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    // ==========================================
    // 门店规模管理
    // ==========================================

    /// 登记/覆盖门店规模
    ///
    /// # 参数
    /// - store_id: 门店ID
    /// - size_code: xs / s / m / l / xl（忽略大小写）
    pub fn update_store_assignment(
        &self,
        store_id: &str,
        size_code: &str,
    ) -> ApiResult<StoreAssignmentView> {
        let store_id = store_id.trim();
        if store_id.is_empty() {
            return Err(ApiError::InvalidInput("门店ID不能为空".to_string()));
        }

        let size = size_code.parse::<StoreSizeClass>()?;
        let previous = self.store_sizes.update(store_id, size);

        Ok(StoreAssignmentView {
            store_id: store_id.to_string(),
            size,
            previous,
        })
    }

    /// 当前门店规模登记快照
    pub fn list_store_assignments(&self) -> BTreeMap<String, StoreSizeClass> {
        self.store_sizes.all_assignments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::ForecastRecord;
    use crate::domain::need::{SkuNeedEntry, StoreRef};
    use crate::repository::{ForecastCatalog, DEFAULT_STORE_SIZES};

    fn build_api() -> NeedApi {
        let catalog = Arc::new(ForecastCatalog::from_records(vec![
            ForecastRecord::new("Bisleri-1L", "December", "extreme_north", 55),
            ForecastRecord::new("Kinley-500ml", "May", "south", 8),
        ]));
        let registry = Arc::new(StoreSizeRegistry::with_seed(DEFAULT_STORE_SIZES, 5));
        let calculator = Arc::new(NeedCalculator::new(catalog, registry.clone()));
        NeedApi::new(calculator, registry)
    }

    fn december() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
    }

    #[test]
    fn test_calculate_valid_request() {
        let api = build_api();
        let request = NeedCalculationRequest {
            product_name: "Bisleri-1L".to_string(),
            stores: vec![StoreRef::new("str1", "extreme_north")],
            month: Some("December".to_string()),
        };

        let response = api.calculate_on(&request, december()).unwrap();
        assert_eq!(
            response.need_per_sku,
            vec![SkuNeedEntry::new("Bisleri-1L", "str1", 83)]
        );
    }

    #[test]
    fn test_calculate_invalid_request_not_processed() {
        let api = build_api();
        let request = NeedCalculationRequest {
            product_name: String::new(),
            stores: vec![StoreRef::new("never-seen", "")],
            month: None,
        };

        let result = api.calculate_on(&request, december());
        assert!(matches!(result, Err(ApiError::ValidationFailed { .. })));
        // 未进入计算 → 未触发随机登记
        assert!(!api.list_store_assignments().contains_key("never-seen"));
    }

    #[test]
    fn test_update_store_assignment_affects_calculation() {
        let api = build_api();
        let view = api.update_store_assignment("str1", "XL").unwrap();
        assert_eq!(view.size, StoreSizeClass::XL);
        assert_eq!(view.previous, Some(StoreSizeClass::S));

        let request = NeedCalculationRequest {
            product_name: "Bisleri-1L".to_string(),
            stores: vec![StoreRef::new("str1", "extreme_north")],
            month: Some("december".to_string()),
        };
        let response = api.calculate_on(&request, december()).unwrap();
        assert_eq!(response.need_per_sku[0].need, 275);
    }

    #[test]
    fn test_padded_store_id_shares_assignment() {
        let api = build_api();
        api.update_store_assignment(" str1 ", "xs").unwrap();

        let request = NeedCalculationRequest {
            product_name: "Bisleri-1L".to_string(),
            stores: vec![
                StoreRef::new(" str1", "extreme_north"),
                StoreRef::new("str1 ", "extreme_north"),
            ],
            month: Some("December".to_string()),
        };
        let response = api.calculate_on(&request, december()).unwrap();

        let needs: Vec<u64> = response.need_per_sku.iter().map(|e| e.need).collect();
        assert_eq!(needs, vec![55, 55]);
        assert_eq!(api.list_store_assignments().len(), DEFAULT_STORE_SIZES.len());
    }

    #[test]
    fn test_update_store_assignment_rejects_bad_code() {
        let api = build_api();
        assert!(matches!(
            api.update_store_assignment("str1", "xxl"),
            Err(ApiError::InvalidStoreSize(_))
        ));
        assert!(matches!(
            api.update_store_assignment("  ", "m"),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_get_configuration() {
        let config = build_api().get_configuration();
        assert_eq!(config.available_months, vec!["December", "May"]);
        assert_eq!(config.available_regions, vec!["extreme_north", "south"]);
        assert_eq!(config.available_products, vec!["Bisleri-1L", "Kinley-500ml"]);
        assert_eq!(config.store_sizes, vec!["xs", "s", "m", "l", "xl"]);
    }
}
