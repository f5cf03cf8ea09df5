//! 解析性能基准
//!
//! 用 rust_xlsxwriter 在内存中生成填满整个扫描窗口（500 行）的
//! 两种版式工作簿，测量单次完整解析的耗时。
//! 目标：单份源表的解析应在数十毫秒量级完成，
//! 足以支撑应用启动时的同步缓存生成。

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_xlsxwriter::Workbook;
use std::io::Cursor;

use deltamod::{parse_daozai_workbook, parse_weapon_master_workbook};

const VALID_CODE: &str = "6IDP1280B97T7MULLRJ3C";

/// 生成填满扫描窗口的刀仔版式工作簿
fn full_daozai_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("工作表1").unwrap();

    for row in 11..500u32 {
        sheet.write_string(row, 0, format!("枪械{row}")).unwrap();
        sheet.write_string(row, 1, "S").unwrap();
        sheet.write_string(row, 2, "85w").unwrap();
        sheet.write_string(row, 3, "战备改装").unwrap();
        sheet.write_string(row, 4, format!("CODE{row}")).unwrap();
        sheet.write_string(row, 5, "52米").unwrap();
        sheet.write_string(row, 6, "2024-01-01").unwrap();
        sheet.write_string(row, 8, format!("枪械{row}")).unwrap();
        sheet.write_string(row, 9, "突击配置").unwrap();
        sheet.write_string(row, 10, format!("FULL{row}")).unwrap();
    }

    workbook.save_to_buffer().unwrap()
}

/// 生成填满扫描窗口的武器大师版式工作簿
fn full_weapon_master_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();

    for sheet_name in ["烽火地带", "全面战场"] {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name).unwrap();
        sheet.write_string(0, 0, "一、突击步枪改码").unwrap();

        for row in 1..500u32 {
            for start_col in [0u16, 4, 8] {
                sheet
                    .write_string(row, start_col, format!("枪械{row}"))
                    .unwrap();
                sheet
                    .write_string(row, start_col + 1, "22W青春版")
                    .unwrap();
                sheet.write_string(row, start_col + 2, VALID_CODE).unwrap();
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

fn benchmark_daozai(c: &mut Criterion) {
    let data = full_daozai_workbook();

    let mut group = c.benchmark_group("daozai");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.sample_size(20);

    group.bench_function("parse_full_window", |b| {
        b.iter(|| {
            let records = parse_daozai_workbook(Cursor::new(black_box(&data))).unwrap();
            black_box(records)
        });
    });

    group.finish();
}

fn benchmark_weapon_master(c: &mut Criterion) {
    let data = full_weapon_master_workbook();

    let mut group = c.benchmark_group("weapon_master");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.sample_size(20);

    group.bench_function("parse_full_window", |b| {
        b.iter(|| {
            let records = parse_weapon_master_workbook(Cursor::new(black_box(&data))).unwrap();
            black_box(records)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_daozai, benchmark_weapon_master);
criterion_main!(benches);
