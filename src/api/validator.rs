// ==========================================
// 门店补货需求计算服务 - 请求校验器
// ==========================================
// 职责: 在进入计算引擎前校验请求
// 红线: 一次性报告全部违规字段, 不做部分处理
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::need::NeedCalculationRequest;

/// 校验需求计算请求
///
/// # 规则
/// - productName 非空白
/// - stores 非空
/// - 每个门店 storeName / region 非空白
pub fn validate_calculation_request(request: &NeedCalculationRequest) -> ApiResult<()> {
    let mut violations = Vec::new();

    if request.product_name.trim().is_empty() {
        violations.push(ValidationViolation::new(
            "productName",
            "Product name is required",
        ));
    }

    if request.stores.is_empty() {
        violations.push(ValidationViolation::new(
            "stores",
            "At least one store is required",
        ));
    }

    for (idx, store) in request.stores.iter().enumerate() {
        if store.store_name.trim().is_empty() {
            violations.push(ValidationViolation::new(
                format!("stores[{}].storeName", idx),
                "Store name is required",
            ));
        }
        if store.region.trim().is_empty() {
            violations.push(ValidationViolation::new(
                format!("stores[{}].region", idx),
                "Region is required",
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        tracing::warn!("请求校验失败: {} 项违规", violations.len());
        Err(ApiError::ValidationFailed { violations })
    }
}
