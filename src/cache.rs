//! Cache Store Module
//!
//! 改枪码的本地 JSON 缓存。生产环境不随附 Excel 源表，
//! 应用只读预生成的缓存文件；缓存带版本号与生成时间戳，
//! 版本不匹配时降级为警告而不是拒绝加载。

use chrono::Local;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::error::DeltaModError;
use crate::types::WeaponCode;

/// 当前缓存格式版本
pub const CACHE_VERSION: &str = "1.0.0";

/// 缓存文件名
pub const CACHE_FILE_NAME: &str = "weapon_codes.json";

/// 缓存文件的顶层结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    /// 缓存格式版本
    pub version: String,

    /// 生成时间（`%Y-%m-%d %H:%M:%S`）
    pub last_updated: String,

    /// 记录总数
    pub total_count: usize,

    /// 数据来源标记（"local-excel"、"api" 等）
    pub data_source: String,

    /// 记录本体
    pub weapon_codes: Vec<WeaponCode>,
}

/// 本地缓存存取器
///
/// # 使用示例
///
/// ```rust,no_run
/// use deltamod::CacheStore;
///
/// # fn main() -> Result<(), deltamod::DeltaModError> {
/// let store = CacheStore::new();
/// if let Some(codes) = store.load()? {
///     println!("{} cached codes", codes.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    /// 新建存取器，自动探测缓存文件位置
    pub fn new() -> Self {
        Self {
            path: discover_cache_path(),
        }
    }

    /// 使用显式路径的存取器（测试和缓存生成工具使用）
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 当前使用的缓存文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载缓存
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(codes))` - 缓存存在且可解码
    /// * `Ok(None)` - 缓存文件不存在
    /// * `Err(DeltaModError)` - 缓存存在但读取或解码失败
    pub fn load(&self) -> Result<Option<Vec<WeaponCode>>, DeltaModError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path)?;
        let cache: CacheFile = serde_json::from_str(&data)?;

        if cache.version != CACHE_VERSION {
            warn!(
                "cache version mismatch: expected {}, got {}",
                CACHE_VERSION, cache.version
            );
        }

        info!(
            "loaded {} weapon codes from cache (version {}, updated {})",
            cache.weapon_codes.len(),
            cache.version,
            cache.last_updated
        );

        Ok(Some(cache.weapon_codes))
    }

    /// 写入缓存
    ///
    /// 自动创建目标目录；输出为带缩进的 JSON，便于人工查看与 diff。
    pub fn save(&self, codes: &[WeaponCode], data_source: &str) -> Result<(), DeltaModError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let cache = CacheFile {
            version: CACHE_VERSION.to_string(),
            last_updated: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            total_count: codes.len(),
            data_source: data_source.to_string(),
            weapon_codes: codes.to_vec(),
        };

        let data = serde_json::to_string_pretty(&cache)?;
        fs::write(&self.path, data)?;

        info!(
            "saved {} weapon codes to cache: {}",
            codes.len(),
            self.path.display()
        );

        Ok(())
    }

    /// 判断缓存是否超过给定寿命
    ///
    /// 以文件修改时间计算；缓存文件不存在视为已过期。
    pub fn is_expired(&self, max_age: Duration) -> Result<bool, DeltaModError> {
        let meta = match fs::metadata(&self.path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(true),
            Err(e) => return Err(e.into()),
        };

        let age = SystemTime::now()
            .duration_since(meta.modified()?)
            .unwrap_or_default();
        Ok(age > max_age)
    }

    /// 删除缓存文件（不存在时静默成功）
    pub fn clear(&self) -> Result<(), DeltaModError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("cache file removed: {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 探测缓存文件位置
///
/// 依次检查：工作目录 data 子目录、工作目录本身、可执行文件目录、
/// 可执行文件目录的 data 子目录、上一级目录的 data 子目录。
/// 全部不存在时回落到工作目录的 data 子目录（写入时自动创建）。
fn discover_cache_path() -> PathBuf {
    let mut candidates = vec![
        PathBuf::from("data").join(CACHE_FILE_NAME),
        PathBuf::from(CACHE_FILE_NAME),
    ];

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            candidates.push(exe_dir.join(CACHE_FILE_NAME));
            candidates.push(exe_dir.join("data").join(CACHE_FILE_NAME));
            if let Some(parent) = exe_dir.parent() {
                candidates.push(parent.join("data").join(CACHE_FILE_NAME));
            }
        }
    }

    for candidate in &candidates {
        if candidate.exists() {
            return candidate.clone();
        }
    }

    PathBuf::from("data").join(CACHE_FILE_NAME)
}
