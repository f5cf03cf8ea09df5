//! Noise Classifier Module
//!
//! 广告与表头内容的识别谓词。两份社区表格里混杂着频道推广、
//! 水印短语和失效链接提示，这些内容必须在字段解析之前被过滤掉。
//! 所有谓词均为纯函数；漏判（false negative）只降低输出质量，
//! 不影响正确性。

/// 单元格长度超过该字符数即视为广告
pub(crate) const AD_CELL_MAX_CHARS: usize = 100;

/// 单元格级广告关键词（匹配小写化后的文本）
const AD_CELL_KEYWORDS: &[&str] = &[
    "抖音",
    "刀仔",
    "武器大师",
    "地板",
    "改枪码大全",
    "每次使用点链接",
    "在线文档",
    "失效",
    "保存好链接",
    "永久更新",
    "s7最新版",
    "被抄袭",
    "被超越",
    "屏息",
    "射手步枪以及狙击步枪",
    "霰弹枪以及其它",
    "高手版",
    "陈泽杯",
];

/// 行级广告关键词（较短的一组，任一单元格命中即整行作废）
const AD_ROW_KEYWORDS: &[&str] = &["抖音搜", "画质调整", "刀仔", "关注", "群", "频道"];

/// 刀仔表的名称列表头标签
const HEADER_NAME_LABEL: &str = "枪械名称";

/// 判断单元格是否为广告内容
///
/// 超长内容（> [`AD_CELL_MAX_CHARS`] 个字符）无条件视为广告，
/// 否则对小写化文本做关键词匹配。
pub(crate) fn is_advertisement_cell(cell: &str) -> bool {
    if cell.chars().count() > AD_CELL_MAX_CHARS {
        return true;
    }

    let lowered = cell.to_lowercase();
    AD_CELL_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// 判断一行是否为广告行
///
/// 行级关键词比单元格级更激进：命中任意一格即认为整行是推广内容，
/// 该行的所有区域都不再产出记录。
pub(crate) fn is_advertisement_row(row: &[String]) -> bool {
    row.iter().any(|cell| {
        let lowered = cell.to_lowercase();
        AD_ROW_KEYWORDS.iter().any(|kw| lowered.contains(kw))
    })
}

/// 判断名称/代码单元格是否为表头标记
///
/// `code_label` 是该区域代码列的表头文字（两个区域的表头写法不同）。
pub(crate) fn is_header_cell(name: &str, code: &str, code_label: &str) -> bool {
    name.contains(HEADER_NAME_LABEL) || code.contains(code_label)
}
