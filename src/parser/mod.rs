//! Parser Module
//!
//! 两种社区表格版式的提取器。两份表格由不同作者手工维护，
//! 记录同一类实体却使用完全不同的布局约定，因此各有一个专用解析器：
//!
//! - 刀仔表：单工作表、每个物理行含两个独立数据区域（见 `daozai`）
//! - 武器大师表：按模式分表、每行三组重复列（见 `weapon_master`）
//!
//! 两个解析器只在工作簿/工作表无法打开时返回错误；
//! 行级、区域级的内容问题一律静默跳过。

mod daozai;
mod weapon_master;

pub use daozai::parse_daozai_workbook;
pub use weapon_master::parse_weapon_master_workbook;

use calamine::{open_workbook_auto_from_rs, Sheets, Xlsx};
use std::io::{Cursor, Read, Seek};

use crate::error::DeltaModError;

/// 打开 XLSX 工作簿
///
/// 仅支持 XLSX 格式；其它格式（XLS、ODS 等）视为配置错误。
pub(crate) fn open_xlsx<R: Read + Seek>(
    mut reader: R,
) -> Result<Xlsx<Cursor<Vec<u8>>>, DeltaModError> {
    // calamine 的 open_workbook_auto_from_rs 要求 reader 实现 Clone，
    // 而 File 不可 Clone；按 teacher 的做法先读入内存缓冲，再用 Cursor 打开。
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    let sheets = open_workbook_auto_from_rs(Cursor::new(buffer)).map_err(DeltaModError::Parse)?;
    match sheets {
        Sheets::Xlsx(workbook) => Ok(workbook),
        _ => Err(DeltaModError::Config(
            "Only XLSX format is supported".to_string(),
        )),
    }
}
