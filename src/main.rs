// ==========================================
// 门店补货需求计算服务 - HTTP 主入口
// ==========================================
// 技术栈: Rust + axum + tokio
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use need_calculation::app::{build_router, AppState};
use need_calculation::config::ConfigManager;
use need_calculation::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", need_calculation::APP_NAME);
    tracing::info!("系统版本: {}", need_calculation::VERSION);
    tracing::info!("==================================================");

    // 读取配置
    let config = ConfigManager::from_env()
        .load()
        .context("服务配置无效")?;

    // 创建AppState（预测数据加载失败即退出）
    tracing::info!("正在初始化AppState...");
    let app_state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("AppState初始化失败: {:#}", e);
            return Err(e);
        }
    };
    tracing::info!("AppState初始化成功");

    let app = build_router(Arc::new(app_state));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("无法监听地址: {}", config.bind_addr))?;
    tracing::info!("HTTP 服务监听于 {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("HTTP 服务异常退出")?;

    Ok(())
}
