/// 文档存储客户端
///
/// 文档与缩略图按 `{documentId}.pdf` / `{documentId}.png`
/// 定址于固定基础地址之下。
use reqwest::StatusCode;
use tracing::debug;

use crate::config::Config;
use crate::error::AppError;
use crate::AppResult;

/// 文档存储客户端
pub struct AssetClient {
    http: reqwest::Client,
    base_url: String,
}

impl AssetClient {
    /// 创建新的存储客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.asset_base_url.clone(),
        }
    }

    /// 使用现成的 HTTP 客户端构造
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// 文档下载地址
    pub fn document_url(&self, document_id: &str) -> String {
        format!("{}/documents/{}.pdf", self.base_url, document_id)
    }

    /// 缩略图地址
    pub fn thumbnail_url(&self, document_id: &str) -> String {
        format!("{}/thumbnails/{}.png", self.base_url, document_id)
    }

    /// 下载文档原始字节
    ///
    /// # 参数
    /// - `document_id`: 文档 id
    ///
    /// # 返回
    /// 返回完整的文档字节
    pub async fn download_document(&self, document_id: &str) -> AppResult<Vec<u8>> {
        let endpoint = self.document_url(document_id);
        debug!("下载文档: {}", endpoint);

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| AppError::request_failed(&endpoint, e))?;

        if response.status() != StatusCode::OK {
            return Err(AppError::bad_status(&endpoint, response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::request_failed(&endpoint, e))?;

        debug!("文档 {} 下载完成: {} 字节", document_id, bytes.len());

        Ok(bytes.to_vec())
    }
}
