//! 答题卡与标准答案
//!
//! 固定 25 题、每题 5 个选项的 OMR 答题卡模型。

use std::collections::BTreeMap;

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// 题目总数（固定常量，不随输入推导）
pub const QUESTION_COUNT: u8 = 25;

/// 每题选项数
pub const CHOICE_COUNT: u8 = 5;

/// 标准答案静态表：题号 -> 正确选项
///
/// 与原答题卡图片一致：1..=25 全部有定义。
static ANSWER_KEY_TABLE: phf::Map<u8, u8> = phf_map! {
    1u8 => 5, 2u8 => 3, 3u8 => 2, 4u8 => 3, 5u8 => 3,
    6u8 => 4, 7u8 => 2, 8u8 => 5, 9u8 => 4, 10u8 => 5,
    11u8 => 3, 12u8 => 3, 13u8 => 5, 14u8 => 2, 15u8 => 5,
    16u8 => 3, 17u8 => 4, 18u8 => 1, 19u8 => 1, 20u8 => 1,
    21u8 => 4, 22u8 => 4, 23u8 => 1, 24u8 => 2, 25u8 => 5,
};

/// 用户当前的题号 -> 所选选项映射
///
/// 只通过显式选择（切换语义）修改；"全部清除"整体清空。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<u8, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: u8) -> Option<u8> {
        self.answers.get(&question).copied()
    }

    pub fn set(&mut self, question: u8, answer: u8) {
        self.answers.insert(question, answer);
    }

    pub fn remove(&mut self, question: u8) -> Option<u8> {
        self.answers.remove(&question)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// 已作答题数
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn contains(&self, question: u8) -> bool {
        self.answers.contains_key(&question)
    }

    /// (题号, 选项) 迭代器（按题号升序）
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.answers.iter().map(|(q, a)| (*q, *a))
    }
}

impl FromIterator<(u8, u8)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (u8, u8)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// 标准答案：题号 -> 正确选项的只读映射
///
/// 默认取进程级常量表；测试可用自定义映射构造。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    entries: BTreeMap<u8, u8>,
}

impl AnswerKey {
    /// 内置标准答案
    pub fn builtin() -> Self {
        Self {
            entries: ANSWER_KEY_TABLE.entries().map(|(q, a)| (*q, *a)).collect(),
        }
    }

    /// 自定义答案表（测试用）
    pub fn from_entries(entries: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn correct_answer(&self, question: u8) -> Option<u8> {
        self.entries.get(&question).copied()
    }

    /// 将标准答案本身视作一份答题卡（满分提交）
    pub fn as_answer_set(&self) -> AnswerSet {
        self.entries.iter().map(|(q, a)| (*q, *a)).collect()
    }
}

impl Default for AnswerKey {
    fn default() -> Self {
        Self::builtin()
    }
}
