// ==========================================
// 门店补货需求计算服务 - 引擎层
// ==========================================
// 职责: 需求计算规则 (月份判定 / 规模系数 / 单门店降级)
// 红线: 引擎不持有全局状态, 依赖通过构造函数注入
// ==========================================

pub mod error;
pub mod month;
pub mod need_calculator;
pub mod sources;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use month::{month_name, normalize_month, resolve_month};
pub use need_calculator::{scaled_need, NeedCalculator, StoreNeedOutcome};
pub use sources::{ForecastSource, StoreSizeResolver};
