// ==========================================
// 门店补货需求计算服务 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、默认值管理
// 来源: 环境变量 (NEED_CALC_*), 空白值视为未设置
// ==========================================

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ServiceConfig - 服务启动配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// 预测数据文件 (.csv / .xlsx / .xls)
    pub forecast_path: PathBuf,
    /// HTTP 监听地址
    pub bind_addr: SocketAddr,
    /// 门店规模种子文件（None → 内置种子）
    pub store_sizes_path: Option<PathBuf>,
    /// 未登记门店随机分配的种子（None → 熵源）
    pub random_seed: Option<u64>,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 从进程环境变量创建
    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars().filter(|(k, _)| k.starts_with(config_keys::PREFIX)))
    }

    /// 从键值对创建（测试/嵌入场景）
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 读取配置值（空白视为未设置）
    pub fn get_config_value(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .unwrap_or_else(|| default.to_string())
    }

    // ===== 数据源配置 =====

    /// 预测数据文件路径
    pub fn get_forecast_path(&self) -> PathBuf {
        self.get_config_value(config_keys::FORECAST_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(default_forecast_path)
    }

    /// 门店规模种子文件路径
    pub fn get_store_sizes_path(&self) -> Option<PathBuf> {
        self.get_config_value(config_keys::STORE_SIZES_PATH)
            .map(PathBuf::from)
    }

    // ===== 服务配置 =====

    /// HTTP 监听地址
    pub fn get_bind_addr(&self) -> ConfigResult<SocketAddr> {
        let value = self.get_config_or_default(config_keys::BIND_ADDR, defaults::BIND_ADDR);
        value
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ConfigValueError {
                key: config_keys::BIND_ADDR.to_string(),
                value: value.clone(),
                message: e.to_string(),
            })
    }

    /// 随机分配种子
    pub fn get_random_seed(&self) -> ConfigResult<Option<u64>> {
        match self.get_config_value(config_keys::RANDOM_SEED) {
            None => Ok(None),
            Some(value) => value
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::ConfigValueError {
                    key: config_keys::RANDOM_SEED.to_string(),
                    value,
                    message: e.to_string(),
                }),
        }
    }

    // ===== 日志配置 =====

    /// 是否输出 JSON 行日志（值为 json 时启用，忽略大小写）
    pub fn get_log_json(&self) -> bool {
        self.get_config_value(config_keys::LOG_FORMAT)
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    /// 汇总为服务启动配置
    pub fn load(&self) -> ConfigResult<ServiceConfig> {
        Ok(ServiceConfig {
            forecast_path: self.get_forecast_path(),
            bind_addr: self.get_bind_addr()?,
            store_sizes_path: self.get_store_sizes_path(),
            random_seed: self.get_random_seed()?,
        })
    }
}

/// 默认预测数据路径
///
/// 优先使用用户数据目录，拿不到时回退到工作目录下的 data/
pub fn default_forecast_path() -> PathBuf {
    match dirs::data_dir() {
        Some(data_dir) => data_dir
            .join(defaults::DATA_DIR_NAME)
            .join(defaults::FORECAST_FILE_NAME),
        None => PathBuf::from("./data").join(defaults::FORECAST_FILE_NAME),
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const PREFIX: &str = "NEED_CALC_";

    // 数据源
    pub const FORECAST_PATH: &str = "NEED_CALC_FORECAST_PATH";
    pub const STORE_SIZES_PATH: &str = "NEED_CALC_STORE_SIZES_PATH";

    // 服务
    pub const BIND_ADDR: &str = "NEED_CALC_BIND_ADDR";

    // 门店规模随机分配
    pub const RANDOM_SEED: &str = "NEED_CALC_RANDOM_SEED";

    // 日志
    pub const LOG_FORMAT: &str = "NEED_CALC_LOG_FORMAT";
}

// ==========================================
// 默认值
// ==========================================
pub mod defaults {
    pub const BIND_ADDR: &str = "0.0.0.0:8080";
    pub const DATA_DIR_NAME: &str = "need-calculation";
    pub const FORECAST_FILE_NAME: &str = "forecast_data.csv";
}
