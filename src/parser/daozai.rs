//! DaoZai Format Parser
//!
//! 刀仔表解析器：单工作表的密集双区域版式。每个物理行在两段互不相交的
//! 列区间里各编码一个逻辑实体——左侧是烽火地带区域（含价格、射程、
//! 更新时间），右侧是全面战场区域（只有名称、描述和代码）。
//! 两个区域各自独立地使用合并单元格的名称续用约定。
//!
//! 行列范围和表头文字是对特定表格模板的硬耦合，集中为模块顶部的
//! 命名常量，模板漂移时只需改这里。

use std::io::{Read, Seek};

use crate::assembler::{NameCarry, RecordAssembler};
use crate::error::DeltaModError;
use crate::fields::{infer_tier, parse_price, parse_range};
use crate::grid::SheetGrid;
use crate::noise::{is_advertisement_cell, is_advertisement_row, is_header_cell};
use crate::parser::open_xlsx;
use crate::types::{
    Mode, WeaponCode, DEFAULT_BUILD_FULLSCALE, DEFAULT_BUILD_WARZONE, MAX_NAME_CHARS,
    SOURCE_DAOZAI, UNCLASSIFIED_TIER,
};

/// 数据所在的工作表名称
const SHEET_NAME: &str = "工作表1";

/// 数据扫描窗口（1 起始的行号，含两端）
const DATA_START_ROW: u32 = 11;
const DATA_END_ROW: u32 = 500;

/// 表头所在行（落在扫描窗口内，需显式跳过）
const HEADER_ROW: u32 = 11;

/// 每行读取的列数（A–L）
const ROW_WIDTH: u32 = 12;

/// 烽火地带区域的列布局（0 起始）
const WZ_NAME_COL: usize = 0;
const WZ_TIER_COL: usize = 1;
const WZ_PRICE_COL: usize = 2;
const WZ_BUILD_COL: usize = 3;
const WZ_CODE_COL: usize = 4;
const WZ_RANGE_COL: usize = 5;
const WZ_TIME_COL: usize = 6;

/// 全面战场区域的列布局（0 起始）
const FS_NAME_COL: usize = 8;
const FS_BUILD_COL: usize = 9;
const FS_CODE_COL: usize = 10;

/// 两个区域各自的代码列表头文字
const WZ_CODE_LABEL: &str = "枪械代码";
const FS_CODE_LABEL: &str = "改枪码";

/// 解析刀仔版式的工作簿
///
/// # 参数
///
/// * `reader` - 工作簿数据（`Read + Seek`，文件或内存游标均可）
///
/// # 返回值
///
/// * `Ok(Vec<WeaponCode>)` - 按行序、区域序产出的记录序列（可能为空）
/// * `Err(DeltaModError)` - 仅当工作簿或工作表无法打开时
///
/// # 使用示例
///
/// ```rust,no_run
/// use std::fs::File;
/// use deltamod::parse_daozai_workbook;
///
/// # fn main() -> Result<(), deltamod::DeltaModError> {
/// let file = File::open("data/刀仔三角洲枪械改装.xlsx")?;
/// let codes = parse_daozai_workbook(file)?;
/// println!("{} codes", codes.len());
/// # Ok(())
/// # }
/// ```
pub fn parse_daozai_workbook<R: Read + Seek>(
    reader: R,
) -> Result<Vec<WeaponCode>, DeltaModError> {
    let mut workbook = open_xlsx(reader)?;
    let grid = SheetGrid::load(&mut workbook, SHEET_NAME)?;

    let mut assembler = RecordAssembler::new();
    let mut warzone_carry = NameCarry::default();
    let mut fullscale_carry = NameCarry::default();

    for row_num in DATA_START_ROW..=DATA_END_ROW {
        let row = grid.read_row(row_num - 1, ROW_WIDTH);

        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        if is_advertisement_row(&row) {
            continue;
        }
        if row_num == HEADER_ROW {
            continue;
        }

        // 同一物理行的两个区域相互独立：可能各出一条记录、只出一条或都不出
        parse_warzone_region(&row, &mut warzone_carry, &mut assembler);
        parse_fullscale_region(&row, &mut fullscale_carry, &mut assembler);
    }

    Ok(assembler.into_records())
}

/// 解析烽火地带区域（列 A–G）
fn parse_warzone_region(row: &[String], carry: &mut NameCarry, assembler: &mut RecordAssembler) {
    let raw_name = row[WZ_NAME_COL].as_str();
    let code = row[WZ_CODE_COL].as_str();

    // 无代码的行连名称续用状态都不推进：名称要等到配上代码才算生效
    if code.is_empty() {
        return;
    }

    let name = carry.resolve(raw_name).to_string();
    if name.is_empty() {
        return;
    }

    if is_header_cell(&name, code, WZ_CODE_LABEL) {
        return;
    }
    if name.chars().count() > MAX_NAME_CHARS || is_advertisement_cell(&name) {
        return;
    }

    carry.remember(raw_name);

    let tier = if row[WZ_TIER_COL].is_empty() {
        UNCLASSIFIED_TIER.to_string()
    } else {
        row[WZ_TIER_COL].clone()
    };

    let price = if row[WZ_PRICE_COL].is_empty() {
        None
    } else {
        parse_price(&row[WZ_PRICE_COL])
    };

    let build = if row[WZ_BUILD_COL].is_empty() {
        DEFAULT_BUILD_WARZONE.to_string()
    } else {
        row[WZ_BUILD_COL].clone()
    };

    let range = if row[WZ_RANGE_COL].is_empty() {
        None
    } else {
        parse_range(&row[WZ_RANGE_COL])
    };

    let update_time = if row[WZ_TIME_COL].is_empty() {
        None
    } else {
        Some(row[WZ_TIME_COL].clone())
    };

    assembler.emit(WeaponCode {
        id: String::new(),
        mode: Mode::Warzone,
        name,
        tier,
        price,
        build,
        code: code.to_string(),
        range,
        update_time,
        source: SOURCE_DAOZAI.to_string(),
    });
}

/// 解析全面战场区域（列 I–K）
///
/// 类型不取自任何列，始终由名称关键词推断；
/// 价格、射程、更新时间在该区域恒为缺失。
fn parse_fullscale_region(row: &[String], carry: &mut NameCarry, assembler: &mut RecordAssembler) {
    let raw_name = row[FS_NAME_COL].as_str();
    let code = row[FS_CODE_COL].as_str();

    if code.is_empty() {
        return;
    }

    let name = carry.resolve(raw_name).to_string();
    if name.is_empty() {
        return;
    }

    if is_header_cell(&name, code, FS_CODE_LABEL) {
        return;
    }
    if name.chars().count() > MAX_NAME_CHARS || is_advertisement_cell(&name) {
        return;
    }

    carry.remember(raw_name);

    let build = if row[FS_BUILD_COL].is_empty() {
        DEFAULT_BUILD_FULLSCALE.to_string()
    } else {
        row[FS_BUILD_COL].clone()
    };

    assembler.emit(WeaponCode {
        id: String::new(),
        mode: Mode::FullScale,
        name: name.clone(),
        tier: infer_tier(&name),
        price: None,
        build,
        code: code.to_string(),
        range: None,
        update_time: None,
        source: SOURCE_DAOZAI.to_string(),
    });
}

// 解析行为的测试在集成测试（tests/）中实现：
// 区域校验依赖真实的 XLSX 工作簿，由 rust_xlsxwriter 生成。
