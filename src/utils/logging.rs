/// 日志工具模块
///
/// 提供 tracing 初始化与批量判分的日志辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 默认 info 级别，可用 RUST_LOG 覆盖。
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// 记录程序启动信息
pub fn log_startup(api_base_url: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷目录浏览与批量判分模式");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📡 目录服务: {}", api_base_url);
    info!("{}", "=".repeat(60));
}

/// 记录答题卡加载信息
pub fn log_sheets_loaded(total: usize) {
    info!("✓ 找到 {} 张待判分的答题卡\n", total);
}

/// 打印最终统计信息
pub fn print_final_stats(sheets: usize, complete: usize, average_score: f64) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部判分完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 判分: {} 张 (其中答完整卷 {} 张)", sheets, complete);
    info!("📈 平均得分: {:.1}", average_score);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
