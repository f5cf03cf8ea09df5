//! Record Assembler Module
//!
//! 记录组装与序号分配。序号计数器和跨行名称续用状态都以显式对象
//! 的形式在单次解析调用内传递，不跨文件、不跨数据源泄漏。

use crate::types::WeaponCode;

/// 单次解析调用的记录组装器
///
/// 持有单调递增的序号计数器和输出序列。序号在记录通过全部校验、
/// 即将进入输出序列的那一刻分配——被跳过的行不消耗序号，
/// 因此 `id` 在产出顺序上构成无间断的 0,1,2,… 序列。
pub(crate) struct RecordAssembler {
    next_id: u32,
    records: Vec<WeaponCode>,
}

impl RecordAssembler {
    /// 新建组装器，序号从 0 开始
    pub fn new() -> Self {
        Self {
            next_id: 0,
            records: Vec::new(),
        }
    }

    /// 接收一条已通过校验的记录，分配序号并加入输出序列
    ///
    /// 传入记录的 `id` 字段会被覆盖；调用方无须预填。
    pub fn emit(&mut self, mut record: WeaponCode) {
        record.id = self.next_id.to_string();
        self.next_id += 1;
        self.records.push(record);
    }

    /// 结束组装，交出输出序列的所有权
    pub fn into_records(self) -> Vec<WeaponCode> {
        self.records
    }
}

/// 单个区域的跨行名称续用状态
///
/// 合并单元格约定：名称列为空表示「与上一个非空名称行是同一把枪」。
/// 每个逻辑区域各自持有一份状态，互不串扰。
#[derive(Default)]
pub(crate) struct NameCarry {
    last_name: String,
}

impl NameCarry {
    /// 解析当前行的有效名称
    ///
    /// 名称单元格非空时返回该值；为空时回落到最近一次记住的名称
    /// （仍可能为空串，由调用方据此跳过该区域）。
    pub fn resolve<'a>(&'a self, cell: &'a str) -> &'a str {
        if cell.is_empty() {
            &self.last_name
        } else {
            cell
        }
    }

    /// 当前行自带新名称时更新续用状态
    ///
    /// 只有名称单元格本身非空（即该行引入了新名称，而不是续用）
    /// 才会推进状态。
    pub fn remember(&mut self, cell: &str) {
        if !cell.is_empty() {
            self.last_name = cell.to_string();
        }
    }
}
