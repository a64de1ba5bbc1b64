//! 画布生命周期管理测试

use csat_marker::models::{Drawing, PageArena, PageId, Stroke, Tool};
use csat_marker::services::OverlayManager;

fn stroke(x: f32) -> Stroke {
    Stroke {
        points: vec![(x, 0.0), (x, 10.0)],
        width: 1.0,
        color: [0, 0, 0, 255],
    }
}

/// 绑定幂等：同一页重复绑定返回同一块画布，绑定集不超过一页一项
#[test]
fn test_bind_is_idempotent() {
    let mut arena = PageArena::new(3);
    let mut overlay = OverlayManager::new();

    let first = overlay.bind(&mut arena, PageId(0)).unwrap();
    let second = overlay.bind(&mut arena, PageId(0)).unwrap();

    assert_eq!(first, second);
    assert_eq!(overlay.bound_count(), 1);
    assert_eq!(arena.get(PageId(0)).unwrap().surface, Some(first));
}

/// 冲回不变量：绑定 → 改笔迹 → 回收 → 重新绑定，笔迹原样恢复
#[test]
fn test_flush_round_trip() {
    let mut arena = PageArena::new(2);
    let mut overlay = OverlayManager::new();

    overlay.bind(&mut arena, PageId(1)).unwrap();
    overlay
        .surface_mut(PageId(1))
        .unwrap()
        .drawing
        .push_stroke(stroke(3.0));
    let expected = overlay.surface(PageId(1)).unwrap().drawing.clone();

    overlay.unbind(&mut arena, PageId(1));
    assert!(!overlay.is_bound(PageId(1)));
    assert_eq!(arena.get(PageId(1)).unwrap().surface, None);
    assert_eq!(arena.get(PageId(1)).unwrap().drawing.as_ref(), Some(&expected));

    overlay.bind(&mut arena, PageId(1)).unwrap();
    assert_eq!(overlay.surface(PageId(1)).unwrap().drawing, expected);
}

/// 全擦后的空笔迹同样要在回收时写回（刻意擦空不能丢）
#[test]
fn test_flush_preserves_deliberate_erase() {
    let mut arena = PageArena::new(1);
    let mut overlay = OverlayManager::new();

    overlay.bind(&mut arena, PageId(0)).unwrap();
    overlay
        .surface_mut(PageId(0))
        .unwrap()
        .drawing
        .push_stroke(stroke(1.0));
    overlay.unbind(&mut arena, PageId(0));

    // 重新绑定后擦空
    overlay.bind(&mut arena, PageId(0)).unwrap();
    overlay.surface_mut(PageId(0)).unwrap().drawing.clear();
    overlay.unbind(&mut arena, PageId(0));

    let persisted = arena.get(PageId(0)).unwrap().drawing.as_ref().unwrap();
    assert!(persisted.is_empty());
}

/// 工具广播作用于当前活跃绑定集，并成为后续绑定的默认工具
#[test]
fn test_tool_broadcast_covers_live_set() {
    let mut arena = PageArena::new(3);
    let mut overlay = OverlayManager::new();

    overlay.bind(&mut arena, PageId(0)).unwrap();
    overlay.bind(&mut arena, PageId(1)).unwrap();

    let eraser = Tool::default_eraser();
    overlay.set_tool_all(eraser);

    assert_eq!(overlay.surface(PageId(0)).unwrap().tool, eraser);
    assert_eq!(overlay.surface(PageId(1)).unwrap().tool, eraser);

    // 广播之后才进入窗口的页也拿到新默认工具
    overlay.bind(&mut arena, PageId(2)).unwrap();
    assert_eq!(overlay.surface(PageId(2)).unwrap().tool, eraser);
}

/// flush_all 把笔迹写回页面但保持绑定不动（导出前置步骤）
#[test]
fn test_flush_all_keeps_bindings() {
    let mut arena = PageArena::new(2);
    let mut overlay = OverlayManager::new();

    overlay.bind(&mut arena, PageId(0)).unwrap();
    overlay
        .surface_mut(PageId(0))
        .unwrap()
        .drawing
        .push_stroke(stroke(2.0));

    overlay.flush_all(&mut arena);

    assert!(overlay.is_bound(PageId(0)));
    assert!(arena.get(PageId(0)).unwrap().drawing.is_some());
}

/// clear_all：活动画布清空 + 全部页面持久化笔迹置空
#[test]
fn test_clear_all() {
    let mut arena = PageArena::new(3);
    let mut overlay = OverlayManager::new();

    overlay.bind(&mut arena, PageId(0)).unwrap();
    overlay
        .surface_mut(PageId(0))
        .unwrap()
        .drawing
        .push_stroke(stroke(1.0));
    // 第 2 页有持久化笔迹但当前未绑定
    overlay.bind(&mut arena, PageId(2)).unwrap();
    overlay
        .surface_mut(PageId(2))
        .unwrap()
        .drawing
        .push_stroke(stroke(9.0));
    overlay.unbind(&mut arena, PageId(2));

    overlay.clear_all(&mut arena);

    assert!(overlay.surface(PageId(0)).unwrap().drawing.is_empty());
    assert!(arena.get(PageId(2)).unwrap().drawing.is_none());
}

/// 未知页 id：绑定返回 None，回收是空操作
#[test]
fn test_unknown_page_is_noop() {
    let mut arena = PageArena::new(1);
    let mut overlay = OverlayManager::new();

    assert!(overlay.bind(&mut arena, PageId(5)).is_none());
    overlay.unbind(&mut arena, PageId(5));
    assert_eq!(overlay.bound_count(), 0);
}
