use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;
use tracing::{info, warn};

use csat_marker::clients::{AssetClient, CatalogClient};
use csat_marker::config::Config;
use csat_marker::infrastructure::DocumentStore;
use csat_marker::models::{load_all_answer_sheets, DocumentFilters};
use csat_marker::services::{CatalogService, GradingService};
use csat_marker::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();
    logging::log_startup(&config.api_base_url);

    // 共用一个连接池
    let http = reqwest::Client::new();
    let catalog = CatalogService::new(CatalogClient::with_http(http.clone(), &config.api_base_url));
    let assets = Arc::new(AssetClient::with_http(http, &config.asset_base_url));
    let store = Arc::new(DocumentStore::new(&config)?);

    // ========== 目录浏览 ==========

    let filters = catalog.available_filters().await;
    info!(
        "筛选项: 年级 {} 项 / 类别 {} 项 / 年份 {} 项 / 月份 {} 项",
        filters.grade_levels.len(),
        filters.categories.len(),
        filters.exam_years.len(),
        filters.exam_months.len()
    );

    let documents = catalog.filtered_documents(&DocumentFilters::default()).await?;
    for (i, doc) in documents.iter().take(10).enumerate() {
        info!(
            "  {}. {} ({} {}년 {}월)",
            i + 1,
            logging::truncate_text(&doc.title, 40),
            doc.grade_level,
            doc.exam_year,
            doc.exam_month
        );
    }

    // ========== 缓存预热（分批并发下载） ==========

    let targets: Vec<_> = documents.iter().take(config.warm_cache_limit).collect();
    let mut warmed = 0usize;
    let mut failed = 0usize;

    for batch in targets.chunks(config.max_concurrent_downloads.max(1)) {
        let futures = batch.iter().map(|doc| {
            let store = store.clone();
            let assets = assets.clone();
            let id = doc.id.clone();
            async move { store.resolve(&id, &assets).await }
        });

        for result in join_all(futures).await {
            match result {
                Ok(_) => warmed += 1,
                Err(e) => {
                    warn!("⚠️ 文档预热失败: {}", e);
                    failed += 1;
                }
            }
        }
    }

    info!(
        "📥 缓存预热完成: 成功 {} / 失败 {}，缓存占用 {} 字节",
        warmed,
        failed,
        store.cache_size()
    );

    // ========== 批量判分 ==========

    let sheets = match load_all_answer_sheets(&config.answer_sheet_folder).await {
        Ok(sheets) => sheets,
        Err(e) => {
            warn!("⚠️ 答题卡目录不可用 ({})，跳过批量判分", e);
            Vec::new()
        }
    };

    if sheets.is_empty() {
        warn!("⚠️ 没有找到待判分的答题卡，程序结束");
        return Ok(());
    }

    logging::log_sheets_loaded(sheets.len());

    let grading = GradingService::new();
    let mut complete = 0usize;
    let mut score_sum = 0.0f64;

    for sheet in &sheets {
        let is_complete = grading.is_complete(&sheet.answers);
        if is_complete {
            complete += 1;
        } else {
            warn!(
                "⚠️ {} 未答完 ({}/25)，按现状判分",
                sheet.title,
                sheet.answers.answered_count()
            );
        }

        let result = grading.grade(&sheet.answers);
        score_sum += result.score;

        info!(
            "📋 {} | 得分 {:.1} | 答对 {}/{} | 错题 {:?}",
            logging::truncate_text(&sheet.title, 40),
            result.score,
            result.correct_answers,
            result.total_questions,
            result.incorrect_questions
        );
    }

    logging::print_final_stats(sheets.len(), complete, score_sum / sheets.len() as f64);

    Ok(())
}
