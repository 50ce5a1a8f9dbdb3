use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

// ==========================================
// 公共工具：错误映射
// ==========================================

/// 错误响应体（返回给调用方）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 发生时间 (RFC 3339)
    pub timestamp: String,

    /// HTTP 状态码
    pub status: u16,

    /// 错误类别
    pub error: String,

    /// 错误消息（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// 字段级校验错误（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ErrorBody {
    fn new(status: StatusCode, error: &str) -> Self {
        Self {
            timestamp: chrono::Local::now().to_rfc3339(),
            status: status.as_u16(),
            error: error.to_string(),
            message: None,
            errors: None,
        }
    }
}

/// 将ApiError映射为HTTP状态码与JSON错误体
fn map_api_error(err: &ApiError) -> (StatusCode, ErrorBody) {
    match err {
        ApiError::ValidationFailed { violations } => {
            let errors = violations
                .iter()
                .map(|v| (v.field.clone(), v.message.clone()))
                .collect::<BTreeMap<_, _>>();
            tracing::warn!("Validation error: {:?}", errors);

            let mut body = ErrorBody::new(StatusCode::BAD_REQUEST, "Validation Failed");
            body.errors = Some(errors);
            (StatusCode::BAD_REQUEST, body)
        }
        ApiError::InvalidInput(_) | ApiError::InvalidStoreSize(_) => {
            tracing::warn!("Invalid request: {}", err);

            let mut body = ErrorBody::new(StatusCode::BAD_REQUEST, "Invalid Request");
            body.message = Some(err.to_string());
            (StatusCode::BAD_REQUEST, body)
        }
        ApiError::InternalError(_) => {
            tracing::error!("Unexpected error: {}", err);

            let mut body =
                ErrorBody::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
            body.message = Some("An unexpected error occurred".to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, body)
        }
    }
}

/// 请求体无法解析为 JSON 时按调用方错误处理
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = map_api_error(&self);
        (status, Json(body)).into_response()
    }
}
