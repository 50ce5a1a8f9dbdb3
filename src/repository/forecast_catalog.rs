// ==========================================
// 门店补货需求计算服务 - 预测表
// ==========================================
// 主键: product#month#region (精确匹配, 不做大小写归一)
// 生命周期: 启动时原子构建, 之后只读 → 并发读无需加锁
// ==========================================

use crate::domain::forecast::{forecast_key, ForecastRecord};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::RawRow;
use crate::importer::forecast_importer::parse_forecast_row;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

// ==========================================
// ForecastCatalog - 只读预测表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ForecastCatalog {
    records: HashMap<String, ForecastRecord>,
}

impl ForecastCatalog {
    /// 由记录构建，重复主键后者覆盖前者
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ForecastRecord>,
    {
        let mut map = HashMap::new();
        for record in records {
            if let Some(previous) = map.insert(record.key(), record) {
                debug!(key = %previous.key(), "预测主键重复，保留后者");
            }
        }
        Self { records: map }
    }

    /// 由原始行构建
    ///
    /// 任一行非法即返回错误，不会产出部分加载的预测表
    pub fn from_rows<I>(rows: I) -> ImportResult<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let records = rows
            .into_iter()
            .map(|row| parse_forecast_row(&row))
            .collect::<ImportResult<Vec<_>>>()?;
        Ok(Self::from_records(records))
    }

    /// 精确查找 (product, month, region)
    pub fn lookup(&self, product: &str, month: &str, region: &str) -> Option<&ForecastRecord> {
        self.records.get(&forecast_key(product, month, region))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 全部记录（按主键排序，输出稳定）
    pub fn all_records(&self) -> Vec<ForecastRecord> {
        let mut records: Vec<ForecastRecord> = self.records.values().cloned().collect();
        records.sort_by(|a, b| {
            (&a.product, &a.month, &a.region).cmp(&(&b.product, &b.month, &b.region))
        });
        records
    }

    /// 去重排序后的区域列表
    pub fn distinct_regions(&self) -> Vec<String> {
        self.distinct_by(|r| &r.region)
    }

    /// 去重排序后的商品列表
    pub fn distinct_products(&self) -> Vec<String> {
        self.distinct_by(|r| &r.product)
    }

    /// 去重后按字典序排列的月份列表（非日历顺序）
    pub fn distinct_months(&self) -> Vec<String> {
        self.distinct_by(|r| &r.month)
    }

    fn distinct_by<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&ForecastRecord) -> &String,
    {
        self.records
            .values()
            .map(|r| field(r).as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
