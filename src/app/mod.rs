// ==========================================
// 门店补货需求计算服务 - 应用层
// ==========================================
// 职责: HTTP 集成, 连接调用方与API层
// ==========================================

pub mod http;
pub mod state;

// 重导出
pub use http::build_router;
pub use state::AppState;
