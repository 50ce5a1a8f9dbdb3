// ==========================================
// 门店补货需求计算服务 - 配置层
// ==========================================
// 职责: 服务启动配置 (数据源路径 / 监听地址 / 随机种子)
// 存储: 环境变量
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, default_forecast_path, ConfigError, ConfigManager, ConfigResult, ServiceConfig,
};
