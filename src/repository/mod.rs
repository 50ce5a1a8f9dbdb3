// ==========================================
// 门店补货需求计算服务 - 数据仓储层
// ==========================================
// 职责: 预测表(只读) + 门店规模登记表(可写)
// 红线: 仅内存结构, 不做结果持久化
// ==========================================

pub mod forecast_catalog;
pub mod store_size_registry;

// 重导出
pub use forecast_catalog::ForecastCatalog;
pub use store_size_registry::{StoreSizeRegistry, DEFAULT_STORE_SIZES};
