// ==========================================
// 门店补货需求计算服务 - API 层
// ==========================================
// 职责: 业务接口 (校验 + 编排), 供 HTTP 层调用
// ==========================================

pub mod error;
pub mod need_api;
pub mod validator;

// 重导出
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use need_api::{ConfigurationView, NeedApi, StoreAssignmentView};
pub use validator::validate_calculation_request;
