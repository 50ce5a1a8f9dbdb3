// ==========================================
// 门店补货需求计算服务 - 计算引擎的数据来源 Trait
// ==========================================
// Engine 层定义 trait, Repository 层实现
// 测试可注入确定性/故障实现
// ==========================================

use crate::domain::forecast::ForecastRecord;
use crate::domain::types::StoreSizeClass;
use crate::engine::error::EngineResult;
use crate::repository::{ForecastCatalog, StoreSizeRegistry};

// ==========================================
// StoreSizeResolver Trait
// ==========================================
// 实现者: StoreSizeRegistry
pub trait StoreSizeResolver: Send + Sync {
    /// 解析门店规模
    fn resolve_size(&self, store_id: &str) -> EngineResult<StoreSizeClass>;
}

impl StoreSizeResolver for StoreSizeRegistry {
    fn resolve_size(&self, store_id: &str) -> EngineResult<StoreSizeClass> {
        Ok(self.resolve(store_id))
    }
}

// ==========================================
// ForecastSource Trait
// ==========================================
// 实现者: ForecastCatalog
pub trait ForecastSource: Send + Sync {
    /// 精确查找 (product, month, region)，未命中返回 Ok(None)
    fn find_forecast(
        &self,
        product: &str,
        month: &str,
        region: &str,
    ) -> EngineResult<Option<ForecastRecord>>;

    fn available_months(&self) -> Vec<String>;

    fn available_regions(&self) -> Vec<String>;

    fn available_products(&self) -> Vec<String>;
}

impl ForecastSource for ForecastCatalog {
    fn find_forecast(
        &self,
        product: &str,
        month: &str,
        region: &str,
    ) -> EngineResult<Option<ForecastRecord>> {
        Ok(self.lookup(product, month, region).cloned())
    }

    fn available_months(&self) -> Vec<String> {
        self.distinct_months()
    }

    fn available_regions(&self) -> Vec<String> {
        self.distinct_regions()
    }

    fn available_products(&self) -> Vec<String> {
        self.distinct_products()
    }
}
