// ==========================================
// 门店补货需求计算服务 - 预测记录实体
// ==========================================
// 主键: product#month#region
// 生命周期: 启动时一次性加载,之后只读
// ==========================================

use serde::{Deserialize, Serialize};

/// 复合主键分隔符
pub const FORECAST_KEY_SEPARATOR: char = '#';

// ==========================================
// ForecastRecord - 预测记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub product: String,
    pub month: String, // 英文月份全称, 如 "December"
    pub region: String,
    pub base_need: u32, // XS 门店的基准需求
}

impl ForecastRecord {
    pub fn new(
        product: impl Into<String>,
        month: impl Into<String>,
        region: impl Into<String>,
        base_need: u32,
    ) -> Self {
        Self {
            product: product.into(),
            month: month.into(),
            region: region.into(),
            base_need,
        }
    }

    /// 该记录的复合主键
    pub fn key(&self) -> String {
        forecast_key(&self.product, &self.month, &self.region)
    }
}

/// 生成复合主键 product#month#region
pub fn forecast_key(product: &str, month: &str, region: &str) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        product,
        month,
        region,
        sep = FORECAST_KEY_SEPARATOR
    )
}
