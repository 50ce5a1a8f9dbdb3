use axum::Json;
use serde_json::{json, Value};

use crate::{SERVICE_DESCRIPTION, SERVICE_NAME, VERSION};

use super::BASE_PATH;

// ==========================================
// 服务信息接口
// ==========================================

/// GET /health
pub(super) async fn health() -> Json<Value> {
    Json(json!({
        "status": "UP",
        "service": SERVICE_NAME,
    }))
}

/// GET /info
pub(super) async fn info() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": VERSION,
        "description": SERVICE_DESCRIPTION,
        "endpoints": {
            "calculate": format!("POST {}/calculate", BASE_PATH),
            "config": format!("GET {}/config", BASE_PATH),
            "health": format!("GET {}/health", BASE_PATH),
            "info": format!("GET {}/info", BASE_PATH),
            "stores": format!("GET {}/stores", BASE_PATH),
            "storeSize": format!("PUT {}/stores/{{storeId}}/size", BASE_PATH),
        },
    }))
}
