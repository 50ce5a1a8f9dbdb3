// ==========================================
// 门店补货需求计算服务 - 核心库
// ==========================================
// 技术栈: Rust + axum + tokio
// 系统定位: 按预测基准需求与门店规模计算 SKU 补货需求
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 预测目录与门店规模登记
pub mod repository;

// 引擎层 - 需求计算规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 服务配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::StoreSizeClass;

// 领域实体
pub use domain::{
    ForecastRecord, NeedCalculationRequest, NeedCalculationResponse, SkuNeedEntry, StoreRef,
};

// 数据仓储
pub use repository::{ForecastCatalog, StoreSizeRegistry};

// 引擎
pub use engine::{NeedCalculator, StoreNeedOutcome};

// API
pub use api::NeedApi;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "门店补货需求计算服务";

// 对外服务名
pub const SERVICE_NAME: &str = "Need Calculation Service";

// 对外服务描述
pub const SERVICE_DESCRIPTION: &str = "Service to calculate product needs based on forecast data";
