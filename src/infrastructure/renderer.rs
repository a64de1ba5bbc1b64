//! PDF 渲染后端接口 - 基础设施层
//!
//! 原生 PDF 渲染与合成属于外部协作方，核心只依赖这里的 trait 缝。
//! 测试用内存假后端替换，生产由宿主注入真实实现。

use std::path::Path;

use crate::models::Drawing;
use crate::AppResult;

/// 一页栅格化后的位图
#[derive(Debug, Clone, PartialEq)]
pub struct PageImage {
    pub width: u32,
    pub height: u32,
    /// RGBA 像素（或后端约定的等价编码），核心不解释其内容
    pub pixels: Vec<u8>,
}

/// 已打开文档的渲染句柄
///
/// 导出走 rasterize_page：原页内容 + 笔迹叠加后的平面化位图，
/// 不是保留矢量的合并。
pub trait RenderedDocument: Send {
    /// 文档页数
    fn page_count(&self) -> usize;

    /// 栅格化一页（笔迹合成在上层）
    ///
    /// # 参数
    /// - `index`: 页序（0 起）
    /// - `overlay`: 该页的持久化笔迹（无笔迹传 None）
    fn rasterize_page(&self, index: usize, overlay: Option<&Drawing>) -> AppResult<PageImage>;
}

/// PDF 渲染后端
pub trait PdfBackend: Send + Sync {
    /// 打开本地文档
    fn open(&self, path: &Path) -> AppResult<Box<dyn RenderedDocument>>;

    /// 将栅格化页序列拼装为一份可导出的平面化文档
    fn assemble(&self, pages: &[PageImage], out_path: &Path) -> AppResult<()>;
}
