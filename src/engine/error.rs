// ==========================================
// 门店补货需求计算服务 - 引擎层错误类型
// ==========================================
// 用途: 单门店计算过程中协作方的失败
// 红线: 只在单门店边界内传播, 不中断整批计算
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("门店规模解析失败 (store={store_id}): {message}")]
    SizeResolution { store_id: String, message: String },

    /// 协作方在计算过程中 panic
    #[error("内部错误: {0}")]
    InternalError(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
