//! 目录服务 - 业务能力层
//!
//! 在目录客户端之上补一层兜底策略：筛选项接口不可用时退回
//! 硬编码选项集，文档列表接口失败则照常上抛。

use tracing::{info, warn};

use crate::clients::CatalogClient;
use crate::models::{AvailableFilters, Document, DocumentFilters};
use crate::AppResult;

/// 目录服务
pub struct CatalogService {
    client: CatalogClient,
}

impl CatalogService {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// 获取可用筛选项（带兜底）
    ///
    /// 接口失败不是错误：记 warn 后返回硬编码选项集。
    pub async fn available_filters(&self) -> AvailableFilters {
        match self.client.fetch_available_filters().await {
            Ok(filters) => {
                info!("✓ 筛选项获取成功");
                filters
            }
            Err(e) => {
                warn!("⚠️ 筛选项接口不可用，使用兜底选项集: {}", e);
                AvailableFilters::fallback()
            }
        }
    }

    /// 按条件获取文档列表
    pub async fn filtered_documents(&self, filters: &DocumentFilters) -> AppResult<Vec<Document>> {
        let documents = self.client.fetch_filtered_documents(filters).await?;
        info!("✓ 文档列表获取成功，共 {} 份", documents.len());
        Ok(documents)
    }
}
