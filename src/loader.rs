//! Loader Module
//!
//! 数据源编排：把「远程接口 → 本地缓存」的回落顺序和
//! 「两份 Excel 源表 → 合并记录序列」的提取任务组合起来。
//! 单个数据源缺失是可容忍的；所有数据源合计零记录才算失败。

use log::warn;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::CacheStore;
use crate::error::DeltaModError;
use crate::parser::{parse_daozai_workbook, parse_weapon_master_workbook};
#[cfg(feature = "remote")]
use crate::remote::ApiClient;
use crate::types::WeaponCode;

/// 刀仔源表的默认文件名
pub const DAOZAI_FILE_NAME: &str = "刀仔三角洲枪械改装.xlsx";

/// 武器大师源表的默认文件名
pub const WEAPON_MASTER_FILE_NAME: &str = "武器大师地板的改枪码合集.xlsx";

/// 数据源配置
#[derive(Debug, Clone)]
pub struct DataSourceConfig {
    /// 是否使用本地缓存
    pub use_local_cache: bool,

    /// 显式缓存路径；`None` 时自动探测
    pub local_cache_path: Option<PathBuf>,

    /// 远程接口基地址；`None` 时禁用远程拉取
    pub api_base_url: Option<String>,

    /// 本地缓存的有效寿命；`None` 表示永不过期
    pub cache_max_age: Option<Duration>,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            use_local_cache: true,
            local_cache_path: None,
            api_base_url: None,
            cache_max_age: Some(Duration::from_secs(24 * 60 * 60)),
        }
    }
}

/// 多数据源加载器
///
/// 加载顺序：远程接口（已配置且缓存过期时）→ 本地缓存。
/// 远程拉取成功后同步回写缓存，回写失败只记警告。
pub struct WeaponCodeLoader {
    cache: CacheStore,
    config: DataSourceConfig,
    #[cfg(feature = "remote")]
    api: Option<ApiClient>,
}

impl WeaponCodeLoader {
    /// 使用默认配置的加载器（仅本地缓存，24 小时寿命）
    pub fn new() -> Self {
        Self {
            cache: CacheStore::new(),
            config: DataSourceConfig::default(),
            #[cfg(feature = "remote")]
            api: None,
        }
    }

    /// 使用自定义配置的加载器
    pub fn with_config(config: DataSourceConfig) -> Result<Self, DeltaModError> {
        let cache = match &config.local_cache_path {
            Some(path) => CacheStore::with_path(path),
            None => CacheStore::new(),
        };

        #[cfg(feature = "remote")]
        let api = match &config.api_base_url {
            Some(url) => Some(ApiClient::new(url.clone())?),
            None => None,
        };

        #[cfg(not(feature = "remote"))]
        {
            if config.api_base_url.is_some() {
                return Err(DeltaModError::Config(
                    "api_base_url set but the `remote` feature is disabled".to_string(),
                ));
            }
        }

        Ok(Self {
            cache,
            config,
            #[cfg(feature = "remote")]
            api,
        })
    }

    /// 当前使用的缓存存取器
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// 按配置的回落顺序加载改枪码
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<WeaponCode>)` - 任一数据源产出的记录
    /// * `Err(DeltaModError::NoData)` - 所有数据源都不可用
    pub fn load(&self) -> Result<Vec<WeaponCode>, DeltaModError> {
        #[cfg(feature = "remote")]
        {
            if let Some(api) = &self.api {
                let should_refresh = match (self.config.use_local_cache, self.config.cache_max_age)
                {
                    (true, Some(max_age)) => self.cache.is_expired(max_age).unwrap_or(true),
                    _ => true,
                };

                if should_refresh {
                    match api.fetch(None) {
                        Ok(codes) => {
                            if self.config.use_local_cache {
                                if let Err(e) = self.cache.save(&codes, "api") {
                                    warn!("failed to update cache after API fetch: {e}");
                                }
                            }
                            return Ok(codes);
                        }
                        Err(e) => warn!("API fetch failed: {e}, falling back to cache"),
                    }
                }
            }
        }

        if self.config.use_local_cache {
            match self.cache.load() {
                Ok(Some(codes)) => return Ok(codes),
                Ok(None) => {}
                Err(e) => warn!("cache load failed: {e}"),
            }
        }

        Err(DeltaModError::NoData)
    }
}

impl Default for WeaponCodeLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// 从两份 Excel 源表提取全部改枪码
///
/// 两个源表相互独立，各自持有自己的序号计数器与续用状态，
/// 并行解析；输出按「刀仔在前、武器大师在后」拼接。
/// 单个源表打开失败降级为该来源缺席（记警告），
/// 两个来源合计零记录时返回 [`DeltaModError::NoData`]。
pub fn extract_all(
    daozai_path: &Path,
    weapon_master_path: &Path,
) -> Result<Vec<WeaponCode>, DeltaModError> {
    let (daozai, weapon_master) = rayon::join(
        || {
            File::open(daozai_path)
                .map_err(DeltaModError::from)
                .and_then(parse_daozai_workbook)
        },
        || {
            File::open(weapon_master_path)
                .map_err(DeltaModError::from)
                .and_then(parse_weapon_master_workbook)
        },
    );

    let mut all = Vec::new();
    match daozai {
        Ok(codes) => all.extend(codes),
        Err(e) => warn!("刀仔 source unavailable: {e}"),
    }
    match weapon_master {
        Ok(codes) => all.extend(codes),
        Err(e) => warn!("武器大师 source unavailable: {e}"),
    }

    if all.is_empty() {
        return Err(DeltaModError::NoData);
    }
    Ok(all)
}

/// 在常见数据目录中定位源表文件
///
/// 依次检查：工作目录 data 子目录、可执行文件目录 data 子目录、
/// 上一级目录的 data 子目录。
pub fn locate_data_file(file_name: &str) -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("data").join(file_name)];

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            candidates.push(exe_dir.join("data").join(file_name));
            if let Some(parent) = exe_dir.parent() {
                candidates.push(parent.join("data").join(file_name));
            }
        }
    }

    candidates.into_iter().find(|p| p.exists())
}

/// 按来源标签过滤记录
pub fn filter_by_source(codes: &[WeaponCode], source: &str) -> Vec<WeaponCode> {
    codes
        .iter()
        .filter(|code| code.source == source)
        .cloned()
        .collect()
}
