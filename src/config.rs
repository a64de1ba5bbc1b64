/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 目录 API 基础地址
    pub api_base_url: String,
    /// 文档/缩略图存储基础地址
    pub asset_base_url: String,
    /// 本地文档缓存目录
    pub cache_dir: String,
    /// 导出文件输出目录
    pub export_dir: String,
    /// 答题卡 TOML 存放目录
    pub answer_sheet_folder: String,
    /// 预热缓存时同时下载的文档数量
    pub max_concurrent_downloads: usize,
    /// 预热缓存的文档上限
    pub warm_cache_limit: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.dasy-csat.y3c.kr".to_string(),
            asset_base_url: "https://dasy-csat.s3.ap-northeast-2.amazonaws.com".to_string(),
            cache_dir: "document_cache".to_string(),
            export_dir: "exports".to_string(),
            answer_sheet_folder: "answer_sheets".to_string(),
            max_concurrent_downloads: 4,
            warm_cache_limit: 8,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            asset_base_url: std::env::var("ASSET_BASE_URL").unwrap_or(default.asset_base_url),
            cache_dir: std::env::var("CACHE_DIR").unwrap_or(default.cache_dir),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or(default.export_dir),
            answer_sheet_folder: std::env::var("ANSWER_SHEET_FOLDER").unwrap_or(default.answer_sheet_folder),
            max_concurrent_downloads: std::env::var("MAX_CONCURRENT_DOWNLOADS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_downloads),
            warm_cache_limit: std::env::var("WARM_CACHE_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.warm_cache_limit),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
