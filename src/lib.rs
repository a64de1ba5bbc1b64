//! # CSAT Marker
//!
//! 一个试卷 PDF 浏览、手写批注与 OMR 自动判分客户端的核心库
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源，只暴露能力
//! - `DocumentStore` - 唯一的缓存目录 owner，提供读穿 resolve() 能力
//! - `PdfBackend` - 原生 PDF 渲染协作方的 trait 缝
//!
//! ### ② HTTP 客户端层（Clients）
//! - `clients/` - 与远端服务的线格式交互
//! - `CatalogClient` - 目录 API（筛选项 / 文档列表）
//! - `AssetClient` - 文档与缩略图存储
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `GradingService` - 判分能力（纯函数）
//! - `AnswerGrid` - 答题卡状态与渲染推导能力
//! - `OverlayManager` - 画布绑定/回收/广播能力
//! - `CatalogService` - 目录获取（带兜底）能力
//! - `ExportService` - 平面化导出能力
//!
//! ### ④ 会话层（Session / Orchestration）
//! - `session/DocumentSession` - 单写者会话：打开 → 批注 → 判分 → 导出
//! - 出站事件通道承载全部 UI 可见变化
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod services;
pub mod session;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{DocumentStore, PageImage, PdfBackend, RenderedDocument};
pub use models::{AnswerKey, AnswerSet, Document, Drawing, GradingResult, PageArena, PageId, Tool};
pub use services::{AnswerGrid, CatalogService, ExportService, GradingService, OverlayManager};
pub use session::{ActionOutcome, Confirmation, DocumentSession, SessionDeps, SessionEvent};
