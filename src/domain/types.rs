// ==========================================
// 门店补货需求计算服务 - 领域类型定义
// ==========================================
// 门店规模等级 + 需求放大系数
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 门店规模等级 (Store Size Class)
// ==========================================
// 顺序: XS < S < M < L < XL
// 系数为固定常量表,不随配置变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreSizeClass {
    XS, // 超小店
    S,  // 小店
    M,  // 中店
    L,  // 大店
    XL, // 超大店
}

impl StoreSizeClass {
    /// 全部规模等级（按从小到大排列）
    pub const ALL: [StoreSizeClass; 5] = [
        StoreSizeClass::XS,
        StoreSizeClass::S,
        StoreSizeClass::M,
        StoreSizeClass::L,
        StoreSizeClass::XL,
    ];

    /// 需求放大系数（相对 XS 的基准需求）
    pub fn multiplier(&self) -> f64 {
        match self {
            StoreSizeClass::XS => 1.0,
            StoreSizeClass::S => 1.5,
            StoreSizeClass::M => 2.0,
            StoreSizeClass::L => 3.0,
            StoreSizeClass::XL => 5.0,
        }
    }

    /// 对外编码（xs / s / m / l / xl）
    pub fn code(&self) -> &'static str {
        match self {
            StoreSizeClass::XS => "xs",
            StoreSizeClass::S => "s",
            StoreSizeClass::M => "m",
            StoreSizeClass::L => "l",
            StoreSizeClass::XL => "xl",
        }
    }

    /// 从编码解析（忽略大小写与首尾空白）
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|size| size.code() == normalized)
    }

    /// 全部对外编码，供配置发现接口使用
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|size| size.code()).collect()
    }
}

impl fmt::Display for StoreSizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreSizeClass::XS => write!(f, "XS"),
            StoreSizeClass::S => write!(f, "S"),
            StoreSizeClass::M => write!(f, "M"),
            StoreSizeClass::L => write!(f, "L"),
            StoreSizeClass::XL => write!(f, "XL"),
        }
    }
}

/// 非法规模编码
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("无效的门店规模编码: {0}（仅支持 xs/s/m/l/xl）")]
pub struct InvalidSizeCode(pub String);

impl FromStr for StoreSizeClass {
    type Err = InvalidSizeCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| InvalidSizeCode(s.to_string()))
    }
}
