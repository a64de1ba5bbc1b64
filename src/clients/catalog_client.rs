/// 目录 API 客户端
///
/// 封装所有与文档目录服务相关的调用逻辑
use reqwest::StatusCode;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, DecodeError};
use crate::models::{AvailableFilters, Document, DocumentFilters, DocumentsResponse, FilterResponse};
use crate::AppResult;

/// 目录 API 客户端
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// 创建新的目录客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    /// 使用现成的 HTTP 客户端构造（便于与资源客户端共用连接池）
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// 获取可用筛选项
    ///
    /// # 返回
    /// 返回服务端定义的年级/类别/年份/月份选项
    pub async fn fetch_available_filters(&self) -> AppResult<AvailableFilters> {
        let endpoint = format!("{}/documents/filters/available", self.base_url);
        debug!("获取筛选项: {}", endpoint);

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| AppError::request_failed(&endpoint, e))?;

        if response.status() != StatusCode::OK {
            return Err(AppError::bad_status(&endpoint, response.status().as_u16()));
        }

        let filter_response: FilterResponse = response.json().await.map_err(|e| {
            AppError::Decode(DecodeError::JsonParseFailed {
                endpoint: endpoint.clone(),
                source: e,
            })
        })?;

        Ok(filter_response.data)
    }

    /// 按筛选条件获取文档列表
    ///
    /// # 参数
    /// - `filters`: 用户选择的筛选条件（空条件不出现在查询串中）
    ///
    /// # 返回
    /// 返回命中的文档列表
    pub async fn fetch_filtered_documents(
        &self,
        filters: &DocumentFilters,
    ) -> AppResult<Vec<Document>> {
        let endpoint = format!("{}/documents/filtered", self.base_url);

        let mut query: Vec<(&str, String)> = Vec::new();
        if !filters.grade_levels.is_empty() {
            query.push(("grade_levels", filters.grade_levels.join(",")));
        }
        if !filters.categories.is_empty() {
            query.push(("categories", filters.categories.join(",")));
        }
        if !filters.exam_years.is_empty() {
            query.push(("exam_years", join_numbers(&filters.exam_years)));
        }
        if !filters.exam_months.is_empty() {
            query.push(("exam_months", join_numbers(&filters.exam_months)));
        }

        debug!("获取文档列表: {} (条件 {} 项)", endpoint, query.len());

        let response = self
            .http
            .get(&endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::request_failed(&endpoint, e))?;

        if response.status() != StatusCode::OK {
            return Err(AppError::bad_status(&endpoint, response.status().as_u16()));
        }

        let documents_response: DocumentsResponse = response.json().await.map_err(|e| {
            AppError::Decode(DecodeError::JsonParseFailed {
                endpoint: endpoint.clone(),
                source: e,
            })
        })?;

        debug!(
            "文档列表返回 {} 条 (success={})",
            documents_response.count, documents_response.success
        );

        Ok(documents_response.data)
    }
}

/// 数字列表按逗号拼接
fn join_numbers(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
