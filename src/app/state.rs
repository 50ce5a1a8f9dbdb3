// ==========================================
// 门店补货需求计算服务 - 应用状态
// ==========================================
// 职责: 启动时装配数据源、引擎与API实例
// 红线: 预测数据加载失败即拒绝启动
// ==========================================

use std::sync::Arc;

use anyhow::Context;

use crate::api::NeedApi;
use crate::config::ServiceConfig;
use crate::domain::types::StoreSizeClass;
use crate::engine::NeedCalculator;
use crate::importer::{load_store_sizes, ForecastImporter};
use crate::repository::{ForecastCatalog, StoreSizeRegistry, DEFAULT_STORE_SIZES};

/// 应用状态
///
/// 在 HTTP 层中作为共享状态 (Arc<AppState>) 注入各个 handler
pub struct AppState {
    /// 需求计算API
    pub need_api: Arc<NeedApi>,
}

impl AppState {
    /// 按服务配置装配应用状态
    ///
    /// # 参数
    /// - config: 服务启动配置
    ///
    /// # 返回
    /// - Ok(AppState): 预测目录已加载、门店规模已登记
    /// - Err: 预测文件或门店规模文件无法加载
    pub fn new(config: &ServiceConfig) -> anyhow::Result<Self> {
        tracing::info!("加载预测数据: {}", config.forecast_path.display());
        let catalog = ForecastImporter::new()
            .load(&config.forecast_path)
            .with_context(|| {
                format!("无法加载预测数据: {}", config.forecast_path.display())
            })?;

        let seed_entries: Vec<(String, StoreSizeClass)> = match &config.store_sizes_path {
            Some(path) => {
                tracing::info!("加载门店规模种子: {}", path.display());
                load_store_sizes(path)
                    .with_context(|| format!("无法加载门店规模文件: {}", path.display()))?
            }
            None => DEFAULT_STORE_SIZES
                .iter()
                .map(|(store_id, size)| (store_id.to_string(), *size))
                .collect(),
        };

        let registry = match config.random_seed {
            Some(seed) => StoreSizeRegistry::with_seed(seed_entries, seed),
            None => StoreSizeRegistry::new(seed_entries),
        };

        tracing::info!(
            "应用状态初始化完成: 预测记录 {} 条, 门店规模登记 {} 家",
            catalog.len(),
            registry.len()
        );

        Ok(Self::from_parts(catalog, registry))
    }

    /// 由现成的目录与登记表装配（测试/嵌入场景）
    pub fn from_parts(catalog: ForecastCatalog, registry: StoreSizeRegistry) -> Self {
        let catalog = Arc::new(catalog);
        let registry = Arc::new(registry);
        let calculator = Arc::new(NeedCalculator::new(catalog, registry.clone()));

        Self {
            need_api: Arc::new(NeedApi::new(calculator, registry)),
        }
    }
}
