use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::api::error::{ApiError, ApiResult};
use crate::api::need_api::ConfigurationView;
use crate::app::state::AppState;
use crate::domain::need::{NeedCalculationRequest, NeedCalculationResponse};

// ==========================================
// 需求计算相关接口
// ==========================================

/// POST /calculate
///
/// 计算在线程池中执行，避免阻塞异步运行时
pub(super) async fn calculate_needs(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NeedCalculationRequest>, JsonRejection>,
) -> ApiResult<Json<NeedCalculationResponse>> {
    let Json(request) = payload?;
    let api = state.need_api.clone();
    let response = tokio::task::spawn_blocking(move || api.calculate(&request))
        .await
        .map_err(|e| ApiError::InternalError(format!("计算任务异常终止: {}", e)))??;

    Ok(Json(response))
}

/// GET /config
pub(super) async fn get_configuration(
    State(state): State<Arc<AppState>>,
) -> Json<ConfigurationView> {
    Json(state.need_api.get_configuration())
}
