//! 笔迹与绘图工具模型
//!
//! 笔迹对核心逻辑是不透明的：一页对应一份可渲染的笔画集合，
//! 核心只负责搬运与持久化，不解释其几何含义。

use serde::{Deserialize, Serialize};

/// 一条笔画
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// 采样点序列（页面坐标系）
    pub points: Vec<(f32, f32)>,
    /// 笔宽
    pub width: f32,
    /// 颜色（RGBA）
    pub color: [u8; 4],
}

/// 与单页关联的手写笔迹（笔画集合）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// 追加一条笔画
    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// 清空全部笔画
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

/// 绘图工具
///
/// 与原工具栏保持一致：细黑笔与位图橡皮两种。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tool {
    /// 钢笔（颜色 RGBA + 笔宽）
    Pen { color: [u8; 4], width: f32 },
    /// 位图橡皮（擦除宽度）
    Eraser { width: f32 },
}

impl Tool {
    /// 默认工具：黑色细笔
    pub fn default_pen() -> Self {
        Tool::Pen {
            color: [0, 0, 0, 255],
            width: 1.0,
        }
    }

    /// 默认橡皮
    pub fn default_eraser() -> Self {
        Tool::Eraser { width: 50.0 }
    }
}

impl Default for Tool {
    fn default() -> Self {
        Self::default_pen()
    }
}
