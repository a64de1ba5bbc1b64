//! 文档页与页面仲裁区（arena）
//!
//! 页面以稳定整数 id 索引，取代按引用身份哈希的缓存字典；
//! 页对画布的反向引用用显式句柄表示，不依赖弱指针语义。

use crate::models::ink::Drawing;

/// 页面稳定 id（打开文档时按页序分配，文档关闭前不变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

/// 画布句柄（指向当前代表该页的临时绘图表面）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// 已打开文档中的一页
///
/// `drawing` 的唯一写入路径是画布回收时的 flush（以及 clear_all 置空）。
#[derive(Debug, Clone, Default)]
pub struct DocumentPage {
    /// 持久化的手写笔迹
    pub drawing: Option<Drawing>,
    /// 当前绑定画布的句柄（非拥有；同一时刻至多一个）
    pub surface: Option<SurfaceId>,
}

/// 页面仲裁区：一份打开文档的全部页面，按 PageId 稳定索引
#[derive(Debug, Default)]
pub struct PageArena {
    pages: Vec<DocumentPage>,
}

impl PageArena {
    /// 为 page_count 页的文档建立仲裁区
    pub fn new(page_count: usize) -> Self {
        Self {
            pages: (0..page_count).map(|_| DocumentPage::default()).collect(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn get(&self, id: PageId) -> Option<&DocumentPage> {
        self.pages.get(id.0)
    }

    pub fn get_mut(&mut self, id: PageId) -> Option<&mut DocumentPage> {
        self.pages.get_mut(id.0)
    }

    /// 全部页面 id（页序）
    pub fn page_ids(&self) -> impl Iterator<Item = PageId> + '_ {
        (0..self.pages.len()).map(PageId)
    }

    /// 置空全部页面的持久化笔迹
    pub fn clear_all_drawings(&mut self) {
        for page in &mut self.pages {
            page.drawing = None;
        }
    }
}
