//! Field Parsers Module
//!
//! 单元格级字段解析：价格、射程与枪械类型推断。
//! 源表格的写法相当随意（"85w"、"85W"、"52米"、纯数字……），
//! 这里的解析一律静默失败：解析不出就返回 `None`，不产生错误。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::UNCLASSIFIED_TIER;

/// 价格写法：数字后紧跟单位字母 w（先小写化再匹配）
static PRICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)w").unwrap());

/// 价格单位片段（用于从价格+描述混合单元格中剔除价格部分）
static PRICE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+[wW]").unwrap());

/// 任意位置的第一段连续数字
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").unwrap());

/// 类型推断规则表：(名称关键词, 类型标签)，自上而下求值，首个命中即返回。
///
/// 关键词按长度从长到短排列，保证更具体的类别先于其子串命中，
/// 求值顺序固定，推断结果可重现。
const TIER_RULES: &[(&str, &str)] = &[
    ("冲锋枪", "冲锋枪"),
    ("霰弹枪", "霰弹枪"),
    ("发射器", "发射器"),
    ("连狙", "连狙"),
    ("狙击", "狙击"),
    ("手枪", "手枪"),
    ("步枪", "步枪"),
    ("机枪", "机枪"),
    ("弓", "弓弩"),
];

/// 解析价格单元格（单位：万）
///
/// 依次尝试：
/// 1. 小写化后匹配 `数字w`（如 "85w"、"85W改"）
/// 2. 整个修剪后的字符串按纯整数解析
///
/// 两者都失败时返回 `None`。
pub(crate) fn parse_price(s: &str) -> Option<u32> {
    let lowered = s.trim().to_lowercase();

    if let Some(caps) = PRICE_RE.captures(&lowered) {
        if let Ok(val) = caps[1].parse::<u32>() {
            return Some(val);
        }
    }

    lowered.parse::<u32>().ok()
}

/// 从价格+描述混合单元格中剔除价格片段
///
/// 剔除所有 `数字w`/`数字W` 片段并修剪（"22W青春版" → "青春版"）。
pub(crate) fn strip_price_token(s: &str) -> String {
    PRICE_TOKEN_RE.replace_all(s, "").trim().to_string()
}

/// 提取字符串中第一段连续数字
///
/// 用于射程解析（"52米" → 52）以及全面战场混合单元格的价格提取。
pub(crate) fn parse_leading_number(s: &str) -> Option<u32> {
    DIGITS_RE
        .captures(s.trim())
        .and_then(|caps| caps[1].parse::<u32>().ok())
}

/// 解析射程单元格（单位：米）
pub(crate) fn parse_range(s: &str) -> Option<u32> {
    parse_leading_number(s)
}

/// 从混合单元格中剔除第一段连续数字
///
/// 全面战场写法是「价格数字 + 描述」（"30腰射" → "腰射"）。
pub(crate) fn strip_leading_number(s: &str) -> String {
    DIGITS_RE.replace_all(s, "").trim().to_string()
}

/// 根据枪械名称推断类型标签
///
/// 小写化名称后按 [`TIER_RULES`] 的固定顺序做子串匹配，
/// 无命中时返回 [`UNCLASSIFIED_TIER`]。
pub(crate) fn infer_tier(name: &str) -> String {
    let lowered = name.to_lowercase();
    for (keyword, tier) in TIER_RULES {
        if lowered.contains(keyword) {
            return (*tier).to_string();
        }
    }
    UNCLASSIFIED_TIER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_with_unit() {
        assert_eq!(parse_price("85w"), Some(85));
        assert_eq!(parse_price("85W"), Some(85));
        assert_eq!(parse_price(" 22W青春版 "), Some(22));
    }

    #[test]
    fn test_parse_price_plain_number() {
        assert_eq!(parse_price("120"), Some(120));
        assert_eq!(parse_price(" 7 "), Some(7));
    }

    #[test]
    fn test_parse_price_failure() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("未知"), None);
        assert_eq!(parse_price("w85"), None);
    }

    #[test]
    fn test_strip_price_token() {
        assert_eq!(strip_price_token("22W青春版"), "青春版");
        assert_eq!(strip_price_token("22w青春版"), "青春版");
        assert_eq!(strip_price_token("标准改装"), "标准改装");
        assert_eq!(strip_price_token("22W"), "");
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("52米"), Some(52));
        assert_eq!(parse_range("约52米"), Some(52));
        assert_eq!(parse_range("52"), Some(52));
        assert_eq!(parse_range("未测"), None);
        assert_eq!(parse_range(""), None);
    }

    #[test]
    fn test_strip_leading_number() {
        assert_eq!(strip_leading_number("30腰射"), "腰射");
        assert_eq!(strip_leading_number("60"), "");
        assert_eq!(strip_leading_number("腰射"), "腰射");
    }

    #[test]
    fn test_infer_tier_basic() {
        assert_eq!(infer_tier("AWM狙击枪"), "狙击");
        assert_eq!(infer_tier("MP5冲锋枪"), "冲锋枪");
        assert_eq!(infer_tier("M750霰弹枪"), "霰弹枪");
        assert_eq!(infer_tier("复合弓"), "弓弩");
        assert_eq!(infer_tier("M4A1"), UNCLASSIFIED_TIER);
    }

    #[test]
    fn test_infer_tier_priority_is_deterministic() {
        // 更长的关键词先命中：包含「冲锋枪」的名称不会落到「枪」类子串上，
        // 同时「连狙」优先于「狙击」规则之前求值
        assert_eq!(infer_tier("SR-9连狙"), "连狙");
        assert_eq!(infer_tier("连狙狙击两用"), "连狙");
    }

    #[test]
    fn test_infer_tier_lowercases_name() {
        // 拉丁字母部分大小写不影响中文关键词匹配
        assert_eq!(infer_tier("QBZ95式步枪"), "步枪");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// 字段解析器对任意输入都不 panic，且解析成功时值可逆推
            #[test]
            fn test_field_parsers_never_panic(s in ".{0,200}") {
                let _ = parse_price(&s);
                let _ = parse_range(&s);
                let _ = infer_tier(&s);
                let _ = strip_price_token(&s);
                let _ = strip_leading_number(&s);
            }

            /// 纯数字输入总能按原值解析
            #[test]
            fn test_parse_price_plain_digits(n in 0u32..1_000_000) {
                prop_assert_eq!(parse_price(&n.to_string()), Some(n));
                prop_assert_eq!(parse_range(&n.to_string()), Some(n));
            }
        }
    }
}
