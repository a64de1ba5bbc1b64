//! 会话出站事件
//!
//! 取代原先的 delegate 回调：会话把全部 UI 可见变化以类型化事件
//! 推入单条出站通道，由宿主订阅消费。

use std::path::PathBuf;

use crate::models::{GradingResult, Tool};

/// 会话出站事件
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// 工具变更已广播到全部活动画布
    ToolChanged(Tool),
    /// 答题卡某题变更（None 表示取消作答）
    AnswerChanged { question: u8, selected: Option<u8> },
    /// 判分完成
    GradingCompleted(GradingResult),
    /// 导出完成（携带导出文件路径）
    ExportCompleted(PathBuf),
    /// 笔迹与答题内容已全部清空（宿主应整体重绘）
    Cleared,
    /// 后台失败已汇回会话线程（宿主以本地化弹窗呈现）
    ErrorRaised(String),
}

/// 需要用户显式确认的破坏性/后果性操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// 清空全部笔迹与答题内容（不可撤销）
    ClearAll,
    /// 未答完全部题目仍要判分
    GradeIncomplete,
}

/// 一次用户操作的即时结局
///
/// 确认制：后果性操作先返回 NeedsConfirmation，宿主取得用户
/// 明确同意后再调用对应的 *_confirmed 方法，绝不默认放行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 已执行
    Done,
    /// 等待用户确认
    NeedsConfirmation(Confirmation),
}
