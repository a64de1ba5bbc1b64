//! 判分服务 - 业务能力层
//!
//! 只负责"判分"能力：答题卡 + 标准答案 -> 判分结果。
//! 纯函数，无副作用，不关心流程顺序。

use tracing::debug;

use crate::models::answer::QUESTION_COUNT;
use crate::models::{AnswerKey, AnswerSet, GradingResult};

/// 判分服务
pub struct GradingService {
    key: AnswerKey,
}

impl GradingService {
    /// 使用内置标准答案创建
    pub fn new() -> Self {
        Self {
            key: AnswerKey::builtin(),
        }
    }

    /// 使用自定义标准答案创建（测试用）
    pub fn with_key(key: AnswerKey) -> Self {
        Self { key }
    }

    /// 判分
    ///
    /// 规则：
    /// - 总题数固定 25，不随输入推导
    /// - 标准答案未定义的题号静默忽略（刻意的宽松策略，非缺陷；
    ///   当前答案表 1..=25 全有定义，此分支实际不会触发）
    /// - score = 答对数 / 总数 × 100
    pub fn grade(&self, answers: &AnswerSet) -> GradingResult {
        let total_questions = QUESTION_COUNT as usize;
        let answered_questions = answers.answered_count();

        let mut correct_answers = 0usize;
        let mut incorrect_questions: Vec<u8> = Vec::new();

        for (question, selected) in answers.iter() {
            if let Some(correct) = self.key.correct_answer(question) {
                if selected == correct {
                    correct_answers += 1;
                } else {
                    incorrect_questions.push(question);
                }
            }
        }

        // 总数恒为 25，此守卫只是兜底
        let score = if total_questions > 0 {
            correct_answers as f64 / total_questions as f64 * 100.0
        } else {
            0.0
        };

        debug!(
            "判分完成: 作答 {}/{}，答对 {}，得分 {:.1}",
            answered_questions, total_questions, correct_answers, score
        );

        GradingResult {
            total_questions,
            answered_questions,
            correct_answers,
            score,
            answers: answers.clone(),
            answer_key: self.key.clone(),
            incorrect_questions,
        }
    }

    /// 是否已答完全部 25 题
    ///
    /// 判分前用于决定是否向用户弹出"未答完"确认。
    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        (1..=QUESTION_COUNT).all(|q| answers.contains(q))
    }

    /// 当前使用的标准答案
    pub fn answer_key(&self) -> &AnswerKey {
        &self.key
    }
}

impl Default for GradingService {
    fn default() -> Self {
        Self::new()
    }
}
