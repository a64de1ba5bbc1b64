//! 判分服务测试

use csat_marker::models::{AnswerKey, AnswerSet};
use csat_marker::services::GradingService;

/// 空答题卡：零分、零答对
#[test]
fn test_grade_empty_answers() {
    let grading = GradingService::new();
    let result = grading.grade(&AnswerSet::new());

    assert_eq!(result.total_questions, 25);
    assert_eq!(result.answered_questions, 0);
    assert_eq!(result.correct_answers, 0);
    assert_eq!(result.score, 0.0);
    assert!(result.incorrect_questions.is_empty());
}

/// 提交标准答案本身：满分
#[test]
fn test_grade_perfect_submission() {
    let grading = GradingService::new();
    let answers = grading.answer_key().as_answer_set();
    let result = grading.grade(&answers);

    assert_eq!(result.correct_answers, 25);
    assert_eq!(result.score, 100.0);
    assert!(result.incorrect_questions.is_empty());
}

/// 只有第 3 题答错（标准答案为 2，提交 1）：24 对、错题 [3]、96 分
#[test]
fn test_grade_single_wrong_answer() {
    let grading = GradingService::new();
    let mut answers = grading.answer_key().as_answer_set();
    answers.set(3, 1);

    let result = grading.grade(&answers);

    assert_eq!(result.answered_questions, 25);
    assert_eq!(result.correct_answers, 24);
    assert_eq!(result.incorrect_questions, vec![3]);
    assert_eq!(result.score, 96.0);
}

/// 答对数恒等于与标准答案一致的条目数
#[test]
fn test_correct_count_matches_agreement() {
    let grading = GradingService::new();
    let key = grading.answer_key().clone();

    let answers: AnswerSet = [(1u8, 5u8), (2, 1), (7, 2), (10, 5), (20, 3)]
        .into_iter()
        .collect();

    let expected = answers
        .iter()
        .filter(|(q, a)| key.correct_answer(*q) == Some(*a))
        .count();

    let result = grading.grade(&answers);
    assert_eq!(result.correct_answers, expected);
    assert_eq!(result.score, expected as f64 / 25.0 * 100.0);
}

/// 标准答案未定义的题号静默忽略：不计分也不进错题表
#[test]
fn test_unknown_question_is_ignored() {
    // 自定义答案表只定义第 1 题
    let grading = GradingService::with_key(AnswerKey::from_entries([(1u8, 5u8)]));

    let answers: AnswerSet = [(1u8, 5u8), (2, 3)].into_iter().collect();
    let result = grading.grade(&answers);

    assert_eq!(result.correct_answers, 1);
    assert!(result.incorrect_questions.is_empty());
    assert_eq!(result.answered_questions, 2);
}

/// is_complete 的边界：24 题 false，25 题 true（选项值任意）
#[test]
fn test_is_complete_boundary() {
    let grading = GradingService::new();

    let mut answers: AnswerSet = (1u8..=24).map(|q| (q, 1u8)).collect();
    assert!(!grading.is_complete(&answers));

    answers.set(25, 1);
    assert!(grading.is_complete(&answers));
}

/// 判分结果是不可变快照：结果携带当时的答题卡与答案表副本
#[test]
fn test_result_snapshots_inputs() {
    let grading = GradingService::new();
    let mut answers: AnswerSet = [(1u8, 5u8)].into_iter().collect();

    let result = grading.grade(&answers);
    answers.set(1, 2); // 事后修改不影响快照

    assert_eq!(result.answers.get(1), Some(5));
    assert_eq!(result.answer_key.correct_answer(1), Some(5));
}
