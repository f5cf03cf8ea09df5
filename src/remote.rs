//! Remote Source Module
//!
//! 可选的远程数据接口客户端。为后续独立数据服务预留的集成点：
//! 应用可以先从接口拉取最新改枪码，失败时再回落到本地缓存。
//! 整个模块位于 `remote` feature 之后，核心解析不依赖网络栈。

use log::info;
use serde::Deserialize;
use std::time::Duration;

use crate::error::DeltaModError;
use crate::types::WeaponCode;

/// 单次请求超时
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 远程接口的响应结构
#[derive(Debug, Deserialize)]
struct ApiResponse {
    success: bool,
    #[serde(default)]
    version: String,
    #[serde(default)]
    last_updated: String,
    #[serde(default)]
    data: Vec<WeaponCode>,
    #[serde(default)]
    message: String,
}

/// 改枪码远程接口客户端
///
/// # 使用示例
///
/// ```rust,no_run
/// use deltamod::ApiClient;
///
/// # fn main() -> Result<(), deltamod::DeltaModError> {
/// let client = ApiClient::new("https://codes.example.com")?;
/// let codes = client.fetch(None)?;
/// let warzone_only = client.fetch(Some("烽火地带"))?;
/// # let _ = (codes, warzone_only);
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    /// 新建客户端
    ///
    /// # 参数
    ///
    /// * `base_url` - 服务基地址（不含 `/api/weapon-codes` 路径）
    pub fn new(base_url: impl Into<String>) -> Result<Self, DeltaModError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(DeltaModError::Config("empty API base url".to_string()));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// 拉取改枪码
    ///
    /// # 参数
    ///
    /// * `mode` - 可选的模式过滤（中文标签，如 "烽火地带"）；
    ///   `None` 表示拉取全部
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<WeaponCode>)` - 接口返回的记录
    /// * `Err(DeltaModError::Http)` - 网络失败或非 2xx 状态
    /// * `Err(DeltaModError::Api)` - 接口返回业务失败
    pub fn fetch(&self, mode: Option<&str>) -> Result<Vec<WeaponCode>, DeltaModError> {
        let url = format!("{}/api/weapon-codes", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(mode) = mode {
            request = request.query(&[("mode", mode)]);
        }

        let response = request.send()?.error_for_status()?;
        let api: ApiResponse = response.json()?;

        if !api.success {
            return Err(DeltaModError::Api(api.message));
        }

        info!(
            "fetched {} weapon codes from API (version {}, updated {})",
            api.data.len(),
            api.version,
            api.last_updated
        );

        Ok(api.data)
    }
}
