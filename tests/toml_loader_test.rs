//! 答题卡 TOML 加载器测试

use std::path::Path;

use csat_marker::models::{load_all_answer_sheets, load_answer_sheet};
use csat_marker::AppError;

fn write_sheet(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// 正常答题卡：标题与答案逐项入卡
#[tokio::test]
async fn test_load_valid_sheet() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_sheet(
        tmp.path(),
        "kim.toml",
        r#"
title = "김철수 6월 모의"

[answers]
1 = 5
2 = 3
25 = 5
"#,
    );

    let sheet = load_answer_sheet(&path).await.unwrap();
    assert_eq!(sheet.title, "김철수 6월 모의");
    assert_eq!(sheet.answers.answered_count(), 3);
    assert_eq!(sheet.answers.get(1), Some(5));
    assert_eq!(sheet.answers.get(25), Some(5));
}

/// 缺省标题取文件名
#[tokio::test]
async fn test_title_defaults_to_file_stem() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_sheet(tmp.path(), "sheet_01.toml", "[answers]\n1 = 2\n");

    let sheet = load_answer_sheet(&path).await.unwrap();
    assert_eq!(sheet.title, "sheet_01");
}

/// 题号/选项越界按契约违规报错
#[tokio::test]
async fn test_out_of_range_entries_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    let bad_question = write_sheet(tmp.path(), "q.toml", "[answers]\n26 = 1\n");
    assert!(matches!(
        load_answer_sheet(&bad_question).await,
        Err(AppError::Input(_))
    ));

    let bad_choice = write_sheet(tmp.path(), "c.toml", "[answers]\n1 = 6\n");
    assert!(matches!(
        load_answer_sheet(&bad_choice).await,
        Err(AppError::Input(_))
    ));
}

/// TOML 语法错误报解析错误
#[tokio::test]
async fn test_malformed_toml_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_sheet(tmp.path(), "broken.toml", "answers = [not valid");

    assert!(matches!(
        load_answer_sheet(&path).await,
        Err(AppError::Decode(_))
    ));
}

/// 批量加载：坏文件跳过不中断，结果按标题排序
#[tokio::test]
async fn test_load_all_skips_bad_files() {
    let tmp = tempfile::tempdir().unwrap();
    write_sheet(tmp.path(), "b.toml", "title = \"乙\"\n[answers]\n1 = 1\n");
    write_sheet(tmp.path(), "a.toml", "title = \"甲\"\n[answers]\n2 = 2\n");
    write_sheet(tmp.path(), "broken.toml", "not toml at all [[[");
    write_sheet(tmp.path(), "readme.txt", "无关文件");

    let sheets = load_all_answer_sheets(tmp.path().to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].title, "乙");
    assert_eq!(sheets[1].title, "甲");
}

/// 目录不存在直接报错
#[tokio::test]
async fn test_missing_folder_is_an_error() {
    assert!(load_all_answer_sheets("/no/such/folder").await.is_err());
}
