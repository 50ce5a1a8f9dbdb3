// ==========================================
// 门店补货需求计算服务 - 需求计算引擎
// ==========================================
// 流程: 判定月份 → 逐门店(解析规模 → 查预测 → 乘系数取整)
//       → 按输入顺序汇总
// 红线: 输出条数 = 输入门店数, 顺序与重复均保持
// 红线: 单门店失败只降级该门店(need=0), 不影响其他门店
// ==========================================

use crate::domain::need::{SkuNeedEntry, StoreRef};
use crate::domain::types::StoreSizeClass;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::month::resolve_month;
use crate::engine::sources::{ForecastSource, StoreSizeResolver};
use crate::repository::{ForecastCatalog, StoreSizeRegistry};
use chrono::{Local, NaiveDate};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 基准需求 × 规模系数，四舍五入（0.5 进位）
pub fn scaled_need(base_need: u32, size: StoreSizeClass) -> u64 {
    round_half_up(base_need as f64 * size.multiplier())
}

fn round_half_up(value: f64) -> u64 {
    (value + 0.5).floor() as u64
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("计算过程 panic: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("计算过程 panic: {}", message)
    } else {
        "计算过程 panic".to_string()
    }
}

// ==========================================
// StoreNeedOutcome - 单门店计算结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum StoreNeedOutcome {
    /// 命中预测，正常计算
    Computed {
        size: StoreSizeClass,
        base_need: u32,
        need: u64,
    },
    /// 无对应预测（预期内的未命中）
    NoForecast { size: StoreSizeClass },
    /// 协作方失败，降级为 0
    Degraded { reason: String },
}

impl StoreNeedOutcome {
    pub fn need(&self) -> u64 {
        match self {
            StoreNeedOutcome::Computed { need, .. } => *need,
            StoreNeedOutcome::NoForecast { .. } | StoreNeedOutcome::Degraded { .. } => 0,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, StoreNeedOutcome::Degraded { .. })
    }
}

// ==========================================
// NeedCalculator - 需求计算引擎
// ==========================================
pub struct NeedCalculator<F = ForecastCatalog, R = StoreSizeRegistry>
where
    F: ForecastSource,
    R: StoreSizeResolver,
{
    forecasts: Arc<F>,
    store_sizes: Arc<R>,
}

impl<F, R> NeedCalculator<F, R>
where
    F: ForecastSource,
    R: StoreSizeResolver,
{
    /// 创建需求计算引擎
    ///
    /// # 参数
    /// - forecasts: 预测数据来源
    /// - store_sizes: 门店规模解析器
    pub fn new(forecasts: Arc<F>, store_sizes: Arc<R>) -> Self {
        Self {
            forecasts,
            store_sizes,
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算各门店的 SKU 需求（月份缺省时取当前月）
    pub fn calculate(
        &self,
        product: &str,
        stores: &[StoreRef],
        month_override: Option<&str>,
    ) -> Vec<SkuNeedEntry> {
        self.calculate_on(product, stores, month_override, Local::now().date_naive())
    }

    /// 以指定日期为“今天”计算
    #[instrument(skip(self, stores), fields(stores = stores.len()))]
    pub fn calculate_on(
        &self,
        product: &str,
        stores: &[StoreRef],
        month_override: Option<&str>,
        today: NaiveDate,
    ) -> Vec<SkuNeedEntry> {
        let month = resolve_month(month_override, today);
        info!(
            "计算需求: product={}, month={}, stores={}",
            product,
            month,
            stores.len()
        );

        let outcomes = self.evaluate_stores(product, &month, stores);

        let degraded = outcomes.iter().filter(|o| o.is_degraded()).count();
        if degraded > 0 {
            warn!("{} 家门店计算失败，已降级为 0", degraded);
        }

        stores
            .iter()
            .zip(outcomes)
            .map(|(store, outcome)| {
                let entry = SkuNeedEntry::new(product, &store.store_name, outcome.need());
                debug!(sku = %entry.sku, need = entry.need, "SKU 需求");
                entry
            })
            .collect()
    }

    /// 逐门店计算，结果按输入位置返回
    pub fn evaluate_stores(
        &self,
        product: &str,
        month: &str,
        stores: &[StoreRef],
    ) -> Vec<StoreNeedOutcome> {
        #[cfg(feature = "parallel")]
        {
            // par_iter + collect 保持输入位置
            stores
                .par_iter()
                .map(|store| self.evaluate_store(product, month, store))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            stores
                .iter()
                .map(|store| self.evaluate_store(product, month, store))
                .collect()
        }
    }

    /// 单门店计算（错误边界）
    ///
    /// 协作方返回错误或 panic 时，该门店降级为 0，其余门店不受影响
    pub fn evaluate_store(
        &self,
        product: &str,
        month: &str,
        store: &StoreRef,
    ) -> StoreNeedOutcome {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.try_evaluate_store(product, month, store)
        }))
        .unwrap_or_else(|payload| Err(EngineError::InternalError(panic_message(&*payload))));

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    store = %store.store_name,
                    region = %store.region,
                    "门店需求计算失败: {}",
                    e
                );
                StoreNeedOutcome::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn try_evaluate_store(
        &self,
        product: &str,
        month: &str,
        store: &StoreRef,
    ) -> EngineResult<StoreNeedOutcome> {
        // 1. 解析门店规模
        let size = self.store_sizes.resolve_size(&store.store_name)?;

        // 2. 查询预测
        let forecast = self.forecasts.find_forecast(product, month, &store.region)?;

        // 3. 未命中 → 0 (非错误)
        let Some(record) = forecast else {
            warn!(
                "未找到预测数据: product={}, month={}, region={}",
                product, month, store.region
            );
            return Ok(StoreNeedOutcome::NoForecast { size });
        };

        // 4. 乘系数取整
        Ok(StoreNeedOutcome::Computed {
            size,
            base_need: record.base_need,
            need: scaled_need(record.base_need, size),
        })
    }

    // ==========================================
    // 配置发现查询
    // ==========================================

    /// 可用月份（去重，字典序）
    pub fn available_months(&self) -> Vec<String> {
        self.forecasts.available_months()
    }

    /// 可用区域（去重，排序）
    pub fn available_regions(&self) -> Vec<String> {
        self.forecasts.available_regions()
    }

    /// 可用商品（去重，排序）
    pub fn available_products(&self) -> Vec<String> {
        self.forecasts.available_products()
    }
}
