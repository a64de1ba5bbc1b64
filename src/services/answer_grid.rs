//! 答题卡状态组件 - 业务能力层
//!
//! 固定 25 行 × 5 列的选择网格：维护每题唯一选项（切换语义）、
//! 整体清空、以及判分后的渲染状态推导。不含任何界面代码。

use tracing::debug;

use crate::error::InputError;
use crate::models::answer::{CHOICE_COUNT, QUESTION_COUNT};
use crate::models::{AnswerSet, GradingResult};
use crate::AppResult;

/// 一次选择变更的通知载荷
///
/// `selected == None` 表示该题被取消作答（切换关闭）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerChange {
    pub question: u8,
    pub selected: Option<u8>,
}

/// 单元格渲染标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    /// 用户所选选项（判分前后都保持"已选"样式）
    Selected,
    /// 正确选项提示（仅当该题答错或未作答时出现）
    CorrectHint,
    /// 普通选项
    Plain,
}

/// 一行（一题）的渲染状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRender {
    pub question: u8,
    /// 题号列是否标红（判分后答错或未作答的题）
    pub flagged: bool,
    /// 5 个选项格的标记（下标 0 对应选项 1）
    pub cells: [CellMark; CHOICE_COUNT as usize],
}

/// 答题卡状态组件
///
/// 持有一轮判分会话期间的答题内容与最近一次判分结果；
/// 结果在 clear_all() 或下一次 apply_grading() 前一直生效。
#[derive(Debug, Default)]
pub struct AnswerGrid {
    answers: AnswerSet,
    grading: Option<GradingResult>,
}

impl AnswerGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择/取消选择
    ///
    /// 切换语义：重复选择同一选项等于取消该题作答。
    ///
    /// # 返回
    /// 返回变更通知；题号或选项越界按契约违规报错
    pub fn select(&mut self, question: u8, answer: u8) -> AppResult<AnswerChange> {
        if question < 1 || question > QUESTION_COUNT {
            return Err(InputError::QuestionOutOfRange {
                question,
                max: QUESTION_COUNT,
            }
            .into());
        }
        if answer < 1 || answer > CHOICE_COUNT {
            return Err(InputError::AnswerOutOfRange {
                answer,
                max: CHOICE_COUNT,
            }
            .into());
        }

        let change = if self.answers.get(question) == Some(answer) {
            self.answers.remove(question);
            AnswerChange {
                question,
                selected: None,
            }
        } else {
            self.answers.set(question, answer);
            AnswerChange {
                question,
                selected: Some(answer),
            }
        };

        debug!("答题卡变更: 题 {} -> {:?}", change.question, change.selected);
        Ok(change)
    }

    /// 整体清空：答题内容与判分结果一并丢弃
    pub fn clear_all(&mut self) {
        self.answers.clear();
        self.grading = None;
    }

    /// 套用判分结果（覆盖上一次的结果）
    pub fn apply_grading(&mut self, result: GradingResult) {
        self.grading = Some(result);
    }

    /// 当前答题内容
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// 当前生效的判分结果
    pub fn grading(&self) -> Option<&GradingResult> {
        self.grading.as_ref()
    }

    /// 推导一行的渲染状态
    ///
    /// 判分后的规则：用户所选永远保持"已选"样式；该题答错或未作答时
    /// 正确选项单独高亮；其余选项普通显示。题号列对错题/空题标红。
    pub fn row_render(&self, question: u8) -> AppResult<RowRender> {
        if question < 1 || question > QUESTION_COUNT {
            return Err(InputError::QuestionOutOfRange {
                question,
                max: QUESTION_COUNT,
            }
            .into());
        }

        let selected = self.answers.get(question);
        let mut cells = [CellMark::Plain; CHOICE_COUNT as usize];

        if let Some(sel) = selected {
            cells[(sel - 1) as usize] = CellMark::Selected;
        }

        let mut flagged = false;
        if let Some(result) = &self.grading {
            // 标准答案未定义或取值越界的题号保持未判分样式（静默策略）
            if let Some(correct) = result
                .answer_key
                .correct_answer(question)
                .filter(|c| (1..=CHOICE_COUNT).contains(c))
            {
                let wrong = result.is_incorrect(question);
                let unanswered = result.is_unanswered(question);
                flagged = wrong || unanswered;
                if selected != Some(correct) {
                    cells[(correct - 1) as usize] = CellMark::CorrectHint;
                }
            }
        }

        Ok(RowRender {
            question,
            flagged,
            cells,
        })
    }
}
