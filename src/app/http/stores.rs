use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;

use crate::api::error::ApiResult;
use crate::api::need_api::StoreAssignmentView;
use crate::app::state::AppState;
use crate::domain::types::StoreSizeClass;

// ==========================================
// 门店规模管理接口
// ==========================================

/// 门店规模更新请求
#[derive(Debug, Deserialize)]
pub(super) struct StoreSizeUpdate {
    pub size: String,
}

/// PUT /stores/{store_id}/size
pub(super) async fn update_store_size(
    State(state): State<Arc<AppState>>,
    Path(store_id): Path<String>,
    payload: Result<Json<StoreSizeUpdate>, JsonRejection>,
) -> ApiResult<Json<StoreAssignmentView>> {
    let Json(update) = payload?;
    let view = state
        .need_api
        .update_store_assignment(&store_id, &update.size)?;
    Ok(Json(view))
}

/// GET /stores
pub(super) async fn list_store_assignments(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, StoreSizeClass>> {
    Json(state.need_api.list_store_assignments())
}
