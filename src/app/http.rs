// ==========================================
// 门店补货需求计算服务 - HTTP 路由
// ==========================================
// 基础路径: /api/v1/need-calculation
// ==========================================

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app::state::AppState;

mod common;
mod need;
mod service;
mod stores;

pub use common::ErrorBody;

/// 接口基础路径
pub const BASE_PATH: &str = "/api/v1/need-calculation";

/// 构建服务路由
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        // ==========================================
        // 需求计算
        // ==========================================
        .route("/calculate", post(need::calculate_needs))
        .route("/config", get(need::get_configuration))
        // ==========================================
        // 门店规模管理
        // ==========================================
        .route("/stores", get(stores::list_store_assignments))
        .route("/stores/{store_id}/size", put(stores::update_store_size))
        // ==========================================
        // 服务信息
        // ==========================================
        .route("/health", get(service::health))
        .route("/info", get(service::info));

    Router::new()
        .nest(BASE_PATH, api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
