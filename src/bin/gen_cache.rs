//! 缓存生成工具
//!
//! 开发期从两份 Excel 源表提取改枪码并写入 JSON 缓存。
//! 生产构建只随附缓存文件，不随附源表。

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use deltamod::{
    extract_all, filter_by_source, locate_data_file, CacheStore, SOURCE_DAOZAI,
    SOURCE_WEAPON_MASTER, DAOZAI_FILE_NAME, WEAPON_MASTER_FILE_NAME,
};

/// 从 Excel 源表生成改枪码缓存
#[derive(Parser, Debug)]
#[command(name = "gen_cache", version, about)]
struct Args {
    /// 刀仔源表路径（默认在 data 目录中探测）
    #[arg(long)]
    daozai: Option<PathBuf>,

    /// 武器大师源表路径（默认在 data 目录中探测）
    #[arg(long)]
    weapon_master: Option<PathBuf>,

    /// 缓存输出路径（默认自动探测）
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let daozai_path = args
        .daozai
        .or_else(|| locate_data_file(DAOZAI_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from("data").join(DAOZAI_FILE_NAME));
    let weapon_master_path = args
        .weapon_master
        .or_else(|| locate_data_file(WEAPON_MASTER_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from("data").join(WEAPON_MASTER_FILE_NAME));

    let codes = match extract_all(&daozai_path, &weapon_master_path) {
        Ok(codes) => codes,
        Err(e) => {
            eprintln!("extraction failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let store = match args.out {
        Some(path) => CacheStore::with_path(path),
        None => CacheStore::new(),
    };

    if let Err(e) = store.save(&codes, "local-excel") {
        eprintln!("failed to write cache: {e}");
        return ExitCode::FAILURE;
    }

    println!(
        "{} codes written to {} ({} 刀仔, {} 武器大师)",
        codes.len(),
        store.path().display(),
        filter_by_source(&codes, SOURCE_DAOZAI).len(),
        filter_by_source(&codes, SOURCE_WEAPON_MASTER).len(),
    );

    ExitCode::SUCCESS
}
