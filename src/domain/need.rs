// ==========================================
// 门店补货需求计算服务 - 需求计算请求/结果
// ==========================================
// 输入: 商品 + 门店列表 + 可选月份
// 输出: 每个门店一条 SKU 需求 (保持输入顺序与重复)
// ==========================================

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// SKU 标识分隔符
pub const SKU_SEPARATOR: char = '@';

/// 生成 SKU 标识 product@storeId
pub fn sku_key(product: &str, store_id: &str) -> String {
    format!("{}{}{}", product, SKU_SEPARATOR, store_id)
}

/// 显式 null 与缺失字段同样取默认值，交由校验器报告
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 门店列表中的 null 元素视为空门店
fn stores_with_nulls<'de, D>(deserializer: D) -> Result<Vec<StoreRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let stores = Option::<Vec<Option<StoreRef>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(stores.into_iter().map(Option::unwrap_or_default).collect())
}

// ==========================================
// StoreRef - 请求中的门店
// ==========================================
/// 门店规模对调用方未知，由门店规模登记表解析
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub store_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
}

impl StoreRef {
    pub fn new(store_name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            region: region.into(),
        }
    }
}

// ==========================================
// NeedCalculationRequest - 计算请求
// ==========================================
/// 字段均带默认值，缺失或为 null 的字段交由校验器统一报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedCalculationRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(default, deserialize_with = "stores_with_nulls")]
    pub stores: Vec<StoreRef>,
    #[serde(default)]
    pub month: Option<String>,
}

// ==========================================
// SkuNeedEntry - 单个 SKU 的需求
// ==========================================
/// 序列化为 `{"<product>@<store>": {"need": n}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuNeedEntry {
    pub sku: String,
    pub need: u64,
}

impl SkuNeedEntry {
    pub fn new(product: &str, store_id: &str, need: u64) -> Self {
        Self {
            sku: sku_key(product, store_id),
            need,
        }
    }
}

#[derive(Serialize)]
struct SkuNeed {
    need: u64,
}

impl Serialize for SkuNeedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.sku, &SkuNeed { need: self.need })?;
        map.end()
    }
}

// ==========================================
// NeedCalculationResponse - 计算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedCalculationResponse {
    #[serde(rename = "needPerSKU")]
    pub need_per_sku: Vec<SkuNeedEntry>,
}
