//! 判分结果模型

use serde::{Deserialize, Serialize};

use crate::models::answer::{AnswerKey, AnswerSet};

/// 一次判分的不可变快照
///
/// 由判分服务创建，供答题卡渲染与结果展示消费；
/// 下一次判分产生新快照覆盖引用，"全部清除"时丢弃。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingResult {
    /// 题目总数（固定 25）
    pub total_questions: usize,
    /// 已作答题数
    pub answered_questions: usize,
    /// 答对题数
    pub correct_answers: usize,
    /// 百分制得分
    pub score: f64,
    /// 判分所依据的答题卡副本
    pub answers: AnswerSet,
    /// 判分所用标准答案的副本
    pub answer_key: AnswerKey,
    /// 答错的题号（升序）
    pub incorrect_questions: Vec<u8>,
}

impl GradingResult {
    /// 该题是否被判为错误
    pub fn is_incorrect(&self, question: u8) -> bool {
        self.incorrect_questions.contains(&question)
    }

    /// 该题是否未作答
    pub fn is_unanswered(&self, question: u8) -> bool {
        !self.answers.contains(question)
    }
}
