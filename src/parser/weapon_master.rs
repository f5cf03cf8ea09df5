//! Weapon Master Format Parser
//!
//! 武器大师表解析器：按游戏模式分表的三联列版式。每个模式一张工作表，
//! 每个物理行重复三组「名称 / 价格+描述 / 改枪码」列（中间隔一列空白），
//! 数据起始行不固定，由 A 列前几行中的类别锚点文字探测。
//!
//! 该表的改枪码有稳定的形状约定（固定前缀、固定长度），
//! 形状不符的三联组整组丢弃，不保留部分字段。

use std::io::{Read, Seek};

use crate::assembler::RecordAssembler;
use crate::error::DeltaModError;
use crate::fields::{
    infer_tier, parse_leading_number, parse_price, strip_leading_number, strip_price_token,
};
use crate::grid::SheetGrid;
use crate::noise::is_advertisement_cell;
use crate::parser::open_xlsx;
use crate::types::{
    Mode, WeaponCode, DEFAULT_BUILD_FULLSCALE, DEFAULT_BUILD_WARZONE, SOURCE_WEAPON_MASTER,
};

/// 模式到工作表的映射，按固定顺序扫描
const SHEETS: [(&str, Mode); 2] = [
    ("烽火地带", Mode::Warzone),
    ("全面战场", Mode::FullScale),
];

/// 数据起始行探测：在 A 列前几行中寻找类别锚点文字
const ANCHOR_KEYWORD: &str = "步枪";
const ANCHOR_SCAN_ROWS: u32 = 10;

/// 扫描窗口下界（1 起始，含）
const DATA_END_ROW: u32 = 500;

/// 三组重复列的布局（0 起始：名称、价格+描述、改枪码）
const TRIADS: [[usize; 3]; 3] = [[0, 1, 2], [4, 5, 6], [8, 9, 10]];

/// 改枪码的形状约定
const CODE_PREFIX: char = '6';
const CODE_CHARS: usize = 21;

/// 解析武器大师版式的工作簿
///
/// 两张模式工作表共用同一个序号计数器，按 [`SHEETS`] 的固定顺序扫描，
/// 输出顺序可重现。
///
/// # 参数
///
/// * `reader` - 工作簿数据（`Read + Seek`）
///
/// # 返回值
///
/// * `Ok(Vec<WeaponCode>)` - 按表序、行序、三联组序产出的记录序列
/// * `Err(DeltaModError)` - 仅当工作簿或某张模式工作表无法打开时
pub fn parse_weapon_master_workbook<R: Read + Seek>(
    reader: R,
) -> Result<Vec<WeaponCode>, DeltaModError> {
    let mut workbook = open_xlsx(reader)?;
    let mut assembler = RecordAssembler::new();

    for (sheet_name, mode) in SHEETS {
        let grid = SheetGrid::load(&mut workbook, sheet_name)?;
        parse_mode_sheet(&grid, mode, &mut assembler);
    }

    Ok(assembler.into_records())
}

/// 探测数据起始行（1 起始）
///
/// A 列第一个包含锚点文字的行之后一行即数据起点；
/// 未找到锚点时从第 1 行开始。
fn detect_data_start(grid: &SheetGrid) -> u32 {
    for row_num in 1..=ANCHOR_SCAN_ROWS {
        if grid.cell(row_num - 1, 0).contains(ANCHOR_KEYWORD) {
            return row_num + 1;
        }
    }
    1
}

/// 扫描单张模式工作表
fn parse_mode_sheet(grid: &SheetGrid, mode: Mode, assembler: &mut RecordAssembler) {
    let data_start = detect_data_start(grid);

    for row_num in data_start..=DATA_END_ROW {
        for triad in TRIADS {
            let name = grid.cell(row_num - 1, triad[0] as u32);
            let combined = grid.cell(row_num - 1, triad[1] as u32);
            let code = grid.cell(row_num - 1, triad[2] as u32);

            parse_triad(&name, &combined, &code, mode, assembler);
        }
    }
}

/// 校验并解析一个三联组
///
/// 拒绝条件（整组丢弃，不产出部分字段）：
/// 代码为空、代码是广告内容、代码前缀或长度不符、名称为空。
fn parse_triad(
    name: &str,
    combined: &str,
    code: &str,
    mode: Mode,
    assembler: &mut RecordAssembler,
) {
    if code.is_empty() || is_advertisement_cell(code) {
        return;
    }
    if !code.starts_with(CODE_PREFIX) || code.chars().count() != CODE_CHARS {
        return;
    }
    if name.is_empty() {
        return;
    }

    // 价格与描述挤在同一个单元格里，两种模式的写法不同：
    // 烽火地带是「85w描述」，全面战场是「30描述」（纯数字开头）
    let (price, build) = match mode {
        Mode::Warzone => {
            let build = strip_price_token(combined);
            let build = if build.is_empty() {
                DEFAULT_BUILD_WARZONE.to_string()
            } else {
                build
            };
            (parse_price(combined), build)
        }
        Mode::FullScale => {
            let build = strip_leading_number(combined);
            let build = if build.is_empty() {
                DEFAULT_BUILD_FULLSCALE.to_string()
            } else {
                build
            };
            (parse_leading_number(combined), build)
        }
    };

    assembler.emit(WeaponCode {
        id: String::new(),
        mode,
        name: name.to_string(),
        tier: infer_tier(name),
        price,
        build,
        code: code.to_string(),
        range: None,
        update_time: None,
        source: SOURCE_WEAPON_MASTER.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNCLASSIFIED_TIER;

    fn collect(name: &str, combined: &str, code: &str, mode: Mode) -> Vec<WeaponCode> {
        let mut asm = RecordAssembler::new();
        parse_triad(name, combined, code, mode, &mut asm);
        asm.into_records()
    }

    const VALID_CODE: &str = "6IDP1280B97T7MULLRJ3C";

    #[test]
    fn test_triad_warzone_splits_combined_cell() {
        let records = collect("MK47", "22W青春版", VALID_CODE, Mode::Warzone);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, Some(22));
        assert_eq!(records[0].build, "青春版");
        assert_eq!(records[0].code, VALID_CODE);
    }

    #[test]
    fn test_triad_fullscale_splits_combined_cell() {
        let records = collect("M4A1", "60腰射", VALID_CODE, Mode::FullScale);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, Some(60));
        assert_eq!(records[0].build, "腰射");
    }

    #[test]
    fn test_triad_empty_combined_cell_uses_defaults() {
        let warzone = collect("MK47", "", VALID_CODE, Mode::Warzone);
        assert_eq!(warzone[0].price, None);
        assert_eq!(warzone[0].build, DEFAULT_BUILD_WARZONE);

        let fullscale = collect("M4A1", "", VALID_CODE, Mode::FullScale);
        assert_eq!(fullscale[0].price, None);
        assert_eq!(fullscale[0].build, DEFAULT_BUILD_FULLSCALE);
    }

    #[test]
    fn test_triad_rejects_bad_code_shape() {
        // 长度差一位
        assert!(collect("MK47", "22W", "6IDP1280B97T7MULLRJ3", Mode::Warzone).is_empty());
        // 前缀不符
        assert!(collect("MK47", "22W", "7IDP1280B97T7MULLRJ3C", Mode::Warzone).is_empty());
        // 代码为空
        assert!(collect("MK47", "22W", "", Mode::Warzone).is_empty());
    }

    #[test]
    fn test_triad_rejects_missing_name() {
        assert!(collect("", "22W", VALID_CODE, Mode::Warzone).is_empty());
    }

    #[test]
    fn test_triad_rejects_advertisement_code_cell() {
        let ad = "每次使用点链接，防失效".to_string() + VALID_CODE;
        assert!(collect("MK47", "22W", &ad, Mode::Warzone).is_empty());
    }

    #[test]
    fn test_triad_tier_comes_from_name_only() {
        let records = collect("QBZ95式步枪", "", VALID_CODE, Mode::Warzone);
        assert_eq!(records[0].tier, "步枪");

        // 无法归类时保留占位符，不做别的回落
        let records = collect("M4A1", "", VALID_CODE, Mode::Warzone);
        assert_eq!(records[0].tier, UNCLASSIFIED_TIER);
    }
}
