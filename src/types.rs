//! Types Module
//!
//! 定义整个 crate 共用的核心数据类型：游戏模式、改枪码记录及其规范化常量。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 改装描述缺失时的占位文本（烽火地带）
pub const DEFAULT_BUILD_WARZONE: &str = "标准改装";

/// 改装描述缺失时的占位文本（全面战场）
pub const DEFAULT_BUILD_FULLSCALE: &str = "标准配置";

/// 无法归类时的枪械类型占位符
pub const UNCLASSIFIED_TIER: &str = "-";

/// 枪械名称允许的最大字符数
pub const MAX_NAME_CHARS: usize = 50;

/// 刀仔数据源的来源标签
pub const SOURCE_DAOZAI: &str = "刀仔";

/// 武器大师数据源的来源标签
pub const SOURCE_WEAPON_MASTER: &str = "武器大师";

/// 改枪码适用的游戏模式
///
/// 两种模式对应两套不同的规范字段集合：烽火地带记录可携带价格、
/// 射程和更新时间；全面战场记录只有名称、类型、描述和代码。
///
/// 序列化时使用中文标签，与缓存文件及远程接口的线上格式保持一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// 烽火地带
    #[serde(rename = "烽火地带")]
    Warzone,

    /// 全面战场
    #[serde(rename = "全面战场")]
    FullScale,
}

impl Mode {
    /// 返回模式的中文标签
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Warzone => "烽火地带",
            Mode::FullScale => "全面战场",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 单条武器改装码记录
///
/// 解析器的唯一输出实体。记录在组装完成后不再被修改，
/// 生命周期归返回的序列所有。
///
/// # 不变量
///
/// - `code` 非空；`name` 非空且不超过 [`MAX_NAME_CHARS`] 个字符
/// - `id` 是单次解析调用内按产出顺序分配的连续序号（从 "0" 开始），
///   不保证跨调用全局唯一
/// - 数值字段缺失时为 `None`，而不是哨兵值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponCode {
    /// 产出顺序序号（字符串形式的十进制数字）
    pub id: String,

    /// 适用的游戏模式
    pub mode: Mode,

    /// 枪械显示名称
    pub name: String,

    /// 枪械类型标签，无法归类时为 `"-"`
    pub tier: String,

    /// 改装价格（万），无数据时为 `None`
    pub price: Option<u32>,

    /// 改装描述（自由文本）
    pub build: String,

    /// 改枪码本体
    pub code: String,

    /// 有效射程（米），仅刀仔烽火地带区域填充
    pub range: Option<u32>,

    /// 更新时间（自由文本），仅刀仔烽火地带区域填充
    pub update_time: Option<String>,

    /// 数据来源标签（[`SOURCE_DAOZAI`] 或 [`SOURCE_WEAPON_MASTER`]）
    pub source: String,
}
