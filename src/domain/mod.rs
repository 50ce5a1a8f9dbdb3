// ==========================================
// 门店补货需求计算服务 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod forecast;
pub mod need;
pub mod types;

// 重导出核心类型
pub use forecast::{forecast_key, ForecastRecord};
pub use need::{sku_key, NeedCalculationRequest, NeedCalculationResponse, SkuNeedEntry, StoreRef};
pub use types::{InvalidSizeCode, StoreSizeClass};
