//! 应用程序错误类型
//!
//! 按领域拆分为若干子错误，统一汇聚到 [`AppError`]。
//! 所有错误最终以事件形式上报给 UI 层，除注明的静默情况外不得吞掉。

use std::path::PathBuf;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 网络相关错误
    #[error("网络错误: {0}")]
    Network(#[from] NetworkError),
    /// 响应解析错误
    #[error("解析错误: {0}")]
    Decode(#[from] DecodeError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 页面渲染错误
    #[error("渲染错误: {0}")]
    Render(#[from] RenderError),
    /// 非法输入（答题卡越界等契约违规）
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 网络相关错误
#[derive(Debug, Error)]
pub enum NetworkError {
    /// URL 拼接非法
    #[error("非法 URL: {url}")]
    InvalidUrl { url: String },
    /// 请求失败（传输层）
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务端返回非 200 状态码
    #[error("服务端返回异常状态 ({endpoint}): HTTP {status}")]
    BadStatus { endpoint: String, status: u16 },
}

/// 响应解析错误
#[derive(Debug, Error)]
pub enum DecodeError {
    /// 目录接口返回的 JSON 无法解析
    #[error("JSON 解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 本地 JSON 数据解析失败
    #[error("JSON 数据解析失败: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML 答题卡解析失败
    #[error("TOML 解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 删除文件失败
    #[error("删除文件失败 ({path}): {source}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 目录不存在或无法创建
    #[error("目录不可用 ({path}): {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 页面渲染错误
///
/// 导出是全有或全无的：任意一页栅格化失败即中止整个导出，
/// 原文档与笔迹保持不变。
#[derive(Debug, Error)]
pub enum RenderError {
    /// 打开文档失败
    #[error("无法打开文档 ({path}): {reason}")]
    OpenFailed { path: PathBuf, reason: String },
    /// 单页栅格化失败
    #[error("第 {page} 页栅格化失败: {reason}")]
    PageFailed { page: usize, reason: String },
    /// 拼装导出文件失败
    #[error("导出文件写入失败: {reason}")]
    AssembleFailed { reason: String },
}

/// 非法输入错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 题号越界（合法范围 1..=25）
    #[error("题号 {question} 越界，合法范围 1..={max}")]
    QuestionOutOfRange { question: u8, max: u8 },
    /// 选项越界（合法范围 1..=5）
    #[error("选项 {answer} 越界，合法范围 1..={max}")]
    AnswerOutOfRange { answer: u8, max: u8 },
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(DecodeError::Json(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建传输层请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Network(NetworkError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建非 200 响应错误
    pub fn bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Network(NetworkError::BadStatus {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
