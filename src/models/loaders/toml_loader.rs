//! 答题卡 TOML 加载器
//!
//! 供批量判分入口使用：一个 TOML 文件对应一张答题卡。
//!
//! 文件格式：
//! ```toml
//! title = "2025학년도 수능 국어 모의"
//!
//! [answers]
//! 1 = 5
//! 2 = 3
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{AppError, DecodeError, InputError};
use crate::models::answer::{AnswerSet, CHOICE_COUNT, QUESTION_COUNT};
use crate::AppResult;

/// 答题卡文件内容
#[derive(Debug, Deserialize)]
struct AnswerSheetFile {
    /// 可选标题（仅用于日志显示）
    #[serde(default)]
    title: Option<String>,
    /// 题号 -> 选项（TOML 键为字符串）
    answers: BTreeMap<String, u8>,
}

/// 加载后的答题卡
#[derive(Debug, Clone)]
pub struct AnswerSheet {
    /// 来源文件路径
    pub path: PathBuf,
    /// 显示标题（缺省时取文件名）
    pub title: String,
    /// 答题内容
    pub answers: AnswerSet,
}

/// 加载单个答题卡 TOML 文件
pub async fn load_answer_sheet(path: &Path) -> AppResult<AnswerSheet> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path, e))?;

    let file: AnswerSheetFile =
        toml::from_str(&content).map_err(|e| DecodeError::TomlParseFailed {
            path: path.display().to_string(),
            source: e,
        })?;

    let mut answers = AnswerSet::new();
    for (key, choice) in file.answers {
        let question: u8 = key.parse().map_err(|_| {
            AppError::Other(format!("答题卡 {} 含非法题号: {}", path.display(), key))
        })?;
        if question < 1 || question > QUESTION_COUNT {
            return Err(InputError::QuestionOutOfRange {
                question,
                max: QUESTION_COUNT,
            }
            .into());
        }
        if choice < 1 || choice > CHOICE_COUNT {
            return Err(InputError::AnswerOutOfRange {
                answer: choice,
                max: CHOICE_COUNT,
            }
            .into());
        }
        answers.set(question, choice);
    }

    let title = file.title.unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    });

    debug!("加载答题卡: {} ({} 题已作答)", title, answers.answered_count());

    Ok(AnswerSheet {
        path: path.to_path_buf(),
        title,
        answers,
    })
}

/// 加载目录下的全部答题卡 TOML 文件
///
/// 单个文件解析失败只记 warn 并跳过，不中断整批。
pub async fn load_all_answer_sheets(folder: &str) -> AppResult<Vec<AnswerSheet>> {
    let mut sheets = Vec::new();

    let mut entries = tokio::fs::read_dir(folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        match load_answer_sheet(&path).await {
            Ok(sheet) => sheets.push(sheet),
            Err(e) => warn!("⚠️ 跳过无法解析的答题卡 {}: {}", path.display(), e),
        }
    }

    sheets.sort_by(|a, b| a.title.cmp(&b.title));
    Ok(sheets)
}
