// ==========================================
// 门店补货需求计算服务 - 门店规模登记表
// ==========================================
// 规则: 命中 → 返回登记值
//       未命中 → 均匀随机选一个等级, 先落表再返回 (首次解析即固定)
// 并发: 分片并发 Map, 按 key 原子 insert-if-absent; 仅固定种子模式在未命中时加锁
// 门店ID: 登记、解析、覆盖均先去除首尾空白
// ==========================================

use crate::domain::types::StoreSizeClass;
use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};
use std::collections::BTreeMap;
use std::sync::Mutex;
use tracing::{info, warn};

/// 内置种子登记（无外部登记文件时使用）
pub const DEFAULT_STORE_SIZES: [(&str, StoreSizeClass); 10] = [
    ("str1", StoreSizeClass::S),
    ("str2", StoreSizeClass::M),
    ("str3", StoreSizeClass::XS),
    ("str4", StoreSizeClass::L),
    ("str5", StoreSizeClass::XL),
    ("str6", StoreSizeClass::M),
    ("str7", StoreSizeClass::S),
    ("str8", StoreSizeClass::L),
    ("str9", StoreSizeClass::XS),
    ("str10", StoreSizeClass::XL),
];

/// 门店ID归一（去除首尾空白）
pub fn normalize_store_id(store_id: &str) -> &str {
    store_id.trim()
}

/// 未命中时的随机数来源
enum SizePicker {
    /// 线程本地熵源，无共享锁
    ThreadLocal,
    /// 固定种子（可复现），未命中时加锁
    Seeded(Mutex<StdRng>),
}

impl SizePicker {
    fn pick(&self) -> StoreSizeClass {
        let picked = match self {
            SizePicker::ThreadLocal => StoreSizeClass::ALL.choose(&mut thread_rng()).copied(),
            SizePicker::Seeded(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                let picked = StoreSizeClass::ALL.choose(&mut *rng).copied();
                picked
            }
        };
        picked.unwrap_or(StoreSizeClass::XS)
    }
}

// ==========================================
// StoreSizeRegistry - 门店规模登记表
// ==========================================
pub struct StoreSizeRegistry {
    assignments: DashMap<String, StoreSizeClass>,
    picker: SizePicker,
}

impl StoreSizeRegistry {
    /// 使用熵源随机数创建
    pub fn new<I, K>(seed_entries: I) -> Self
    where
        I: IntoIterator<Item = (K, StoreSizeClass)>,
        K: Into<String>,
    {
        Self::with_picker(seed_entries, SizePicker::ThreadLocal)
    }

    /// 使用固定随机种子创建（可复现）
    pub fn with_seed<I, K>(seed_entries: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = (K, StoreSizeClass)>,
        K: Into<String>,
    {
        Self::with_picker(
            seed_entries,
            SizePicker::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
        )
    }

    /// 内置种子登记 + 熵源随机数
    pub fn with_default_seeds() -> Self {
        Self::new(DEFAULT_STORE_SIZES)
    }

    fn with_picker<I, K>(seed_entries: I, picker: SizePicker) -> Self
    where
        I: IntoIterator<Item = (K, StoreSizeClass)>,
        K: Into<String>,
    {
        let assignments = DashMap::new();
        for (store_id, size) in seed_entries {
            let store_id: String = store_id.into();
            assignments.insert(normalize_store_id(&store_id).to_string(), size);
        }
        info!("初始化门店规模登记表: {} 家门店", assignments.len());

        Self {
            assignments,
            picker,
        }
    }

    /// 解析门店规模（永不失败）
    ///
    /// 未登记的门店会被随机分配一个等级并立即登记，
    /// 之后的解析结果保持不变。
    /// 并发首次解析同一门店时只保留一个随机结果，
    /// 所有调用方都返回该结果。
    pub fn resolve(&self, store_id: &str) -> StoreSizeClass {
        let store_id = normalize_store_id(store_id);
        if let Some(size) = self.assignments.get(store_id) {
            return *size;
        }

        let candidate = self.picker.pick();
        let size = *self
            .assignments
            .entry(store_id.to_string())
            .or_insert(candidate);

        if size == candidate {
            warn!(
                store_id = %store_id,
                size = %size,
                "门店未登记，已随机分配规模"
            );
        }
        size
    }

    /// 强制登记/覆盖门店规模
    ///
    /// # 返回
    /// 覆盖前的登记值（若有）
    pub fn update(&self, store_id: &str, size: StoreSizeClass) -> Option<StoreSizeClass> {
        let store_id = normalize_store_id(store_id);
        let previous = self.assignments.insert(store_id.to_string(), size);
        info!(
            store_id = %store_id,
            size = %size,
            previous = ?previous,
            "更新门店规模登记"
        );
        previous
    }

    /// 当前登记快照（防御性拷贝，按门店 ID 排序）
    pub fn all_assignments(&self) -> BTreeMap<String, StoreSizeClass> {
        self.assignments
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl Default for StoreSizeRegistry {
    fn default() -> Self {
        Self::with_default_seeds()
    }
}
