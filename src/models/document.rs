//! 文档目录数据模型
//!
//! 与目录 API 的线格式一一对应，字段名直接沿用服务端命名。

use serde::{Deserialize, Serialize};

/// 目录中的一份试卷文档（抓取后不可变）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub category: String,
    pub exam_year: i32,
    pub exam_month: i32,
    pub exam_type: String,
    pub selection: String,
    pub grade_level: String,
    pub filename: String,
    pub storage_path: String,
    pub created_at: String,
    pub source: String,
}

/// 文档列表接口响应
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsResponse {
    pub success: bool,
    pub data: Vec<Document>,
    pub count: usize,
}

/// 用户当前选择的筛选条件
#[derive(Debug, Clone, Default)]
pub struct DocumentFilters {
    pub grade_levels: Vec<String>,
    pub categories: Vec<String>,
    pub exam_years: Vec<i32>,
    pub exam_months: Vec<i32>,
}

/// 筛选项接口响应
#[derive(Debug, Clone, Deserialize)]
pub struct FilterResponse {
    pub success: bool,
    pub data: AvailableFilters,
}

/// 服务端提供的可用筛选项
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AvailableFilters {
    pub grade_levels: Vec<String>,
    pub categories: Vec<String>,
    pub exam_years: Vec<i32>,
    pub exam_months: Vec<i32>,
}

impl AvailableFilters {
    /// 筛选项接口不可用时的兜底选项集
    ///
    /// 与线上目录的实际取值保持一致，兜底状态下筛选仍然可用。
    pub fn fallback() -> Self {
        Self {
            grade_levels: vec!["고1".to_string(), "고2".to_string(), "고3".to_string()],
            categories: vec!["수능".to_string(), "모의고사".to_string()],
            exam_years: (2020..=2024).collect(),
            exam_months: vec![3, 4, 5, 6, 7, 9, 10, 11],
        }
    }
}
