//! deltamod - 三角洲行动改枪码提取与本地缓存
//!
//! 本 crate 从两份由社区人工维护的 Excel 表格中提取结构化的
//! 武器改装码记录，并把它们规范化为统一的 [`WeaponCode`] 模型，
//! 供缓存与查询使用。两份源表版式互不兼容且夹杂大量噪声
//! （广告行、水印、合并单元格的名称续用等），
//! 提取器负责在没有模式定义的情况下还原这些隐式布局约定。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use deltamod::{parse_daozai_workbook, parse_weapon_master_workbook};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 两个解析器各自独立：序号计数器与名称续用状态互不串扰
//!     let daozai = parse_daozai_workbook(File::open("data/刀仔三角洲枪械改装.xlsx")?)?;
//!     let master = parse_weapon_master_workbook(File::open("data/武器大师地板的改枪码合集.xlsx")?)?;
//!
//!     println!("{} + {} codes", daozai.len(), master.len());
//!     Ok(())
//! }
//! ```
//!
//! # 提取并写入缓存
//!
//! ```rust,no_run
//! use deltamod::{extract_all, CacheStore};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), deltamod::DeltaModError> {
//! let codes = extract_all(
//!     Path::new("data/刀仔三角洲枪械改装.xlsx"),
//!     Path::new("data/武器大师地板的改枪码合集.xlsx"),
//! )?;
//! CacheStore::new().save(&codes, "local-excel")?;
//! # Ok(())
//! # }
//! ```
//!
//! # 生产环境加载
//!
//! 生产构建不随附 Excel 源表，应用通过 [`WeaponCodeLoader`]
//! 按「远程接口 → 本地缓存」的顺序加载：
//!
//! ```rust,no_run
//! use deltamod::WeaponCodeLoader;
//!
//! # fn main() -> Result<(), deltamod::DeltaModError> {
//! let codes = WeaponCodeLoader::new().load()?;
//! println!("{} codes available", codes.len());
//! # Ok(())
//! # }
//! ```

mod assembler;
mod cache;
mod error;
mod fields;
mod grid;
mod loader;
mod noise;
mod parser;
#[cfg(feature = "remote")]
mod remote;
mod types;

// 公开API
pub use cache::{CacheFile, CacheStore, CACHE_FILE_NAME, CACHE_VERSION};
pub use error::DeltaModError;
pub use loader::{
    extract_all, filter_by_source, locate_data_file, DataSourceConfig, WeaponCodeLoader,
    DAOZAI_FILE_NAME, WEAPON_MASTER_FILE_NAME,
};
pub use parser::{parse_daozai_workbook, parse_weapon_master_workbook};
#[cfg(feature = "remote")]
pub use remote::ApiClient;
pub use types::{
    Mode, WeaponCode, DEFAULT_BUILD_FULLSCALE, DEFAULT_BUILD_WARZONE, MAX_NAME_CHARS,
    SOURCE_DAOZAI, SOURCE_WEAPON_MASTER, UNCLASSIFIED_TIER,
};
