//! Error Types Module
//!
//! 定义整个 crate 使用的结构化错误类型。
//! 使用 `thiserror` 实现错误的自动转换与消息格式化。

use thiserror::Error;

/// deltamod crate 的统一错误类型
///
/// 只有「致命」失败才会产生错误：源文件或工作表完全无法打开/读取、
/// 缓存文件无法编解码、远程接口不可用，以及整次提取一无所获。
/// 单行、单区域或单组数据的校验失败属于预期内的噪声，
/// 解析器会静默跳过，绝不通过本类型上报。
///
/// # 使用示例
///
/// ```rust,no_run
/// use deltamod::DeltaModError;
/// use std::fs::File;
///
/// fn open_source(path: &str) -> Result<(), DeltaModError> {
///     let _file = File::open(path)?; // Io 错误自动转换
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum DeltaModError {
    /// I/O 操作失败（文件读写等）
    ///
    /// 通过 `#[from]` 由 `std::io::Error` 自动转换。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excel 工作簿解析失败（来自 calamine）
    ///
    /// 文件格式不正确、文件损坏或工作表不存在时产生。
    /// 这是解析入口唯一会传播的失败类别。
    #[error("Failed to parse Excel workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// 缓存文件的 JSON 编解码失败
    #[error("Cache JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置无效（缓存路径、远程地址等）
    #[error("Configuration error: {0}")]
    Config(String),

    /// 远程接口请求失败
    #[cfg(feature = "remote")]
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 远程接口返回了业务层面的失败响应
    #[cfg(feature = "remote")]
    #[error("API error: {0}")]
    Api(String),

    /// 所有数据源合计未产出任何记录
    ///
    /// 由加载器在组合两个数据源之后判定；
    /// 解析器本身返回空序列而不是本错误。
    #[error("no weapon codes found from any source")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: DeltaModError = io_err.into();

        match error {
            DeltaModError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err = calamine::Error::Msg("Corrupted file");
        let error: DeltaModError = parse_err.into();

        let msg = error.to_string();
        assert!(msg.contains("Failed to parse Excel workbook"));
        assert!(msg.contains("Corrupted file"));
    }

    #[test]
    fn test_config_error_display() {
        let error = DeltaModError::Config("empty base url".to_string());
        assert!(error.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_no_data_display() {
        let error = DeltaModError::NoData;
        assert_eq!(error.to_string(), "no weapon codes found from any source");
    }

    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), DeltaModError> {
            let _file = std::fs::File::open("nonexistent_workbook.xlsx")?;
            Ok(())
        }

        match io_operation() {
            Err(DeltaModError::Io(_)) => {}
            _ => panic!("Expected Io error from ? operator"),
        }
    }
}
