// ==========================================
// 门店补货需求计算服务 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换下层错误为用户友好的错误消息
// 红线: 校验错误必须列出全部失败字段
// ==========================================

use crate::domain::types::InvalidSizeCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    /// 请求校验失败（带全部违规字段）
    #[error("请求校验失败: {}", summarize(.violations))]
    ValidationFailed { violations: Vec<ValidationViolation> },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("无效的门店规模: {0}")]
    InvalidStoreSize(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

fn summarize(violations: &[ValidationViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}={}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<InvalidSizeCode> for ApiError {
    fn from(err: InvalidSizeCode) -> Self {
        ApiError::InvalidStoreSize(err.0)
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// 字段路径（如 stores[0].region）
    pub field: String,
    /// 违规原因
    pub message: String,
}

impl ValidationViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
