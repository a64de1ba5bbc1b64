//! 会话层（编排层）
//!
//! ## 职责
//!
//! 本层把能力层（services）拼装成一次完整的"做题会话"：
//! 打开文档、滚动驱动的画布绑定、工具广播、判分、导出、清空。
//!
//! ## 层次关系
//!
//! ```text
//! session::DocumentSession (单写者，持有全部会话状态)
//!     ↓
//! services (能力层：grading / answer_grid / overlay / export)
//!     ↓
//! infrastructure (基础设施：DocumentStore / PdfBackend)
//!     ↓
//! clients (HTTP：CatalogClient / AssetClient)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单写者**：共享状态只在会话方法内修改，后台工作以值汇回
//! 2. **显式确认**：破坏性/后果性操作两段式（NeedsConfirmation → *_confirmed）
//! 3. **依赖注入**：协作方全部经 SessionDeps 显式传入，测试可换假件

pub mod controller;
pub mod events;

pub use controller::{DocumentSession, SessionDeps};
pub use events::{ActionOutcome, Confirmation, SessionEvent};
