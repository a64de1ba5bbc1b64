//! 绘图画布生命周期管理 - 业务能力层
//!
//! 把一块共享的绘图工具复用到当前可见的各页上：页进入可见窗口时
//! 绑定一块临时画布，滚出保留窗口时把笔迹冲回页面再回收画布。
//!
//! 每页状态机：{未绑定, 已绑定}。
//! 不变量：
//! - 任一时刻一页至多绑定一块活动画布
//! - 画布回收前其笔迹必须冲回对应页（滚动永不静默丢笔迹）

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Drawing, PageArena, PageId, SurfaceId, Tool};

/// 绑定到某一可见页的临时画布
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    id: SurfaceId,
    /// 画布上的当前笔迹
    pub drawing: Drawing,
    /// 画布当前工具
    pub tool: Tool,
}

impl DrawingSurface {
    pub fn id(&self) -> SurfaceId {
        self.id
    }
}

/// 画布生命周期管理器
///
/// 持有活动绑定集（页 id -> 画布）；键只在对应页处于
/// 可见/将可见滚动窗口内时存在。
#[derive(Debug)]
pub struct OverlayManager {
    bindings: HashMap<PageId, DrawingSurface>,
    default_tool: Tool,
    next_surface_id: u64,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            default_tool: Tool::default_pen(),
            next_surface_id: 1,
        }
    }

    /// 未绑定 -> 已绑定
    ///
    /// 幂等：该页已有画布时直接返回，绝不为一页创建两块画布。
    /// 否则新建空白画布、恢复页面持久化笔迹（若有）、登记反向引用。
    /// 页 id 不在仲裁区内按"什么都不做"处理。
    pub fn bind(&mut self, arena: &mut PageArena, page_id: PageId) -> Option<SurfaceId> {
        if let Some(existing) = self.bindings.get(&page_id) {
            return Some(existing.id);
        }

        let page = arena.get_mut(page_id)?;

        let surface_id = SurfaceId(self.next_surface_id);
        self.next_surface_id += 1;

        let drawing = page.drawing.clone().unwrap_or_default();
        page.surface = Some(surface_id);

        debug!("绑定画布: 页 {:?} -> 画布 {:?}", page_id, surface_id);

        self.bindings.insert(
            page_id,
            DrawingSurface {
                id: surface_id,
                drawing,
                tool: self.default_tool,
            },
        );

        Some(surface_id)
    }

    /// 已绑定 -> 未绑定
    ///
    /// 读取画布当前笔迹写回页面（page.drawing 的唯一写路径），
    /// 清除反向引用并移除绑定。此后该画布视为销毁，内容不得再读。
    /// 未绑定的页 id 为空操作。
    pub fn unbind(&mut self, arena: &mut PageArena, page_id: PageId) {
        let Some(surface) = self.bindings.remove(&page_id) else {
            return;
        };

        if let Some(page) = arena.get_mut(page_id) {
            page.drawing = Some(surface.drawing);
            page.surface = None;
        }

        debug!("回收画布: 页 {:?} (画布 {:?})", page_id, surface.id);
    }

    /// 工具变更广播
    ///
    /// 遍历的是当前活跃绑定集（页随滚动持续进出，不能用过期快照）；
    /// 同时成为后续新绑定画布的默认工具。
    pub fn set_tool_all(&mut self, tool: Tool) {
        self.default_tool = tool;
        for surface in self.bindings.values_mut() {
            surface.tool = tool;
        }
        debug!("工具广播到 {} 块活动画布", self.bindings.len());
    }

    /// 把每块活动画布的笔迹冲回对应页，但保持绑定不变
    ///
    /// 导出前调用，保证页面持久化笔迹是最新的。
    pub fn flush_all(&self, arena: &mut PageArena) {
        for (page_id, surface) in &self.bindings {
            if let Some(page) = arena.get_mut(*page_id) {
                page.drawing = Some(surface.drawing.clone());
            }
        }
    }

    /// 清空全部笔迹：每块活动画布清空 + 全部页面持久化笔迹置空
    pub fn clear_all(&mut self, arena: &mut PageArena) {
        for surface in self.bindings.values_mut() {
            surface.drawing.clear();
        }
        arena.clear_all_drawings();
        debug!("已清空 {} 块活动画布与全部页面笔迹", self.bindings.len());
    }

    /// 访问某页当前绑定的画布
    pub fn surface(&self, page_id: PageId) -> Option<&DrawingSurface> {
        self.bindings.get(&page_id)
    }

    /// 可变访问某页当前绑定的画布（供笔迹输入写入）
    pub fn surface_mut(&mut self, page_id: PageId) -> Option<&mut DrawingSurface> {
        self.bindings.get_mut(&page_id)
    }

    /// 当前活动绑定数
    pub fn bound_count(&self) -> usize {
        self.bindings.len()
    }

    /// 某页是否处于已绑定状态
    pub fn is_bound(&self, page_id: PageId) -> bool {
        self.bindings.contains_key(&page_id)
    }

    /// 当前默认工具
    pub fn default_tool(&self) -> Tool {
        self.default_tool
    }
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new()
    }
}
