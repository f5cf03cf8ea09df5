//! Grid Module
//!
//! 提供对单个工作表的矩形单元格窗口读取。
//! 任何读取失败（越界、错误值、不可转文本的变体）都表现为空字符串，
//! 把「缺格」和「空格」统一交给上层的形状校验处理。

use calamine::{Data, Range, Reader, Xlsx};
use std::io::{Read, Seek};

use crate::error::DeltaModError;

/// 单个工作表的只读单元格网格
///
/// calamine `Range` 的薄封装。坐标一律为 0 起始的绝对行列号，
/// 与工作表左上角对齐（`Range` 自身的起始偏移在内部抵消）。
pub(crate) struct SheetGrid {
    range: Range<Data>,
}

impl SheetGrid {
    /// 从工作簿加载指定名称的工作表
    ///
    /// # 参数
    ///
    /// * `workbook` - 已打开的 XLSX 工作簿
    /// * `sheet_name` - 工作表名称
    ///
    /// # 返回值
    ///
    /// * `Ok(SheetGrid)` - 工作表存在且可读
    /// * `Err(DeltaModError::Parse)` - 工作表缺失或读取失败（唯一的致命路径）
    pub fn load<R: Read + Seek>(
        workbook: &mut Xlsx<R>,
        sheet_name: &str,
    ) -> Result<Self, DeltaModError> {
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| DeltaModError::Parse(e.into()))?;
        Ok(Self { range })
    }

    /// 读取单个单元格的修剪后文本
    ///
    /// 越界或空单元格返回空字符串。
    pub fn cell(&self, row: u32, col: u32) -> String {
        match self.range.get_value((row, col)) {
            Some(data) => data_to_string(data),
            None => String::new(),
        }
    }

    /// 把一整行读入定宽字符串缓冲区
    ///
    /// # 参数
    ///
    /// * `row` - 0 起始的绝对行号
    /// * `cols` - 缓冲区宽度（列数）
    pub fn read_row(&self, row: u32, cols: u32) -> Vec<String> {
        (0..cols).map(|col| self.cell(row, col)).collect()
    }
}

/// 把 calamine 单元格值转换为修剪后的文本
///
/// 整数值浮点数渲染为不带小数点的形式（`85.0` → `"85"`）。
/// 错误值与其余变体（日期序列值等）一律视为空。
fn data_to_string(data: &Data) -> String {
    match data {
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::String(s) => s.trim().to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(_) => String::new(),
        Data::Empty => String::new(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_to_string_trims_text() {
        assert_eq!(data_to_string(&Data::String("  AK12  ".to_string())), "AK12");
        assert_eq!(data_to_string(&Data::String("".to_string())), "");
    }

    #[test]
    fn test_data_to_string_integral_float() {
        assert_eq!(data_to_string(&Data::Float(85.0)), "85");
        assert_eq!(data_to_string(&Data::Float(8.5)), "8.5");
        assert_eq!(data_to_string(&Data::Int(42)), "42");
    }

    #[test]
    fn test_data_to_string_empty_variants() {
        assert_eq!(data_to_string(&Data::Empty), "");
        assert_eq!(
            data_to_string(&Data::Error(calamine::CellErrorType::Div0)),
            ""
        );
    }

    // 针对真实工作簿的读取行为在集成测试中覆盖
    // （需要 rust_xlsxwriter 生成的 XLSX 文件）。
}
