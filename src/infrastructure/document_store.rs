//! 本地文档缓存 - 基础设施层
//!
//! 持有缓存目录这一资源，只暴露"按 id 取文档字节落地路径"的能力。
//! 读穿缓存：首次访问时下载并落盘，此后一直命中，只支持整体清空。

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::clients::AssetClient;
use crate::config::Config;
use crate::error::{AppError, FileError};
use crate::AppResult;

/// 本地文档缓存
///
/// 职责：
/// - 持有缓存目录
/// - 暴露 resolve() 能力（命中返回本地路径，未命中先下载）
/// - 不认识 Document 目录元数据，只认 document_id
/// - 不处理业务流程
pub struct DocumentStore {
    cache_dir: PathBuf,
}

impl DocumentStore {
    /// 创建缓存（目录不存在则建立）
    pub fn new(config: &Config) -> AppResult<Self> {
        let cache_dir = PathBuf::from(&config.cache_dir);
        std::fs::create_dir_all(&cache_dir).map_err(|e| FileError::DirectoryUnavailable {
            path: cache_dir.clone(),
            source: e,
        })?;
        Ok(Self { cache_dir })
    }

    /// 指定缓存目录构造（测试用）
    pub fn with_dir(cache_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let cache_dir = cache_dir.into();
        std::fs::create_dir_all(&cache_dir).map_err(|e| FileError::DirectoryUnavailable {
            path: cache_dir.clone(),
            source: e,
        })?;
        Ok(Self { cache_dir })
    }

    /// 文档的本地缓存路径（不保证存在）
    pub fn local_path(&self, document_id: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.pdf", document_id))
    }

    /// 文档是否已缓存
    pub fn is_cached(&self, document_id: &str) -> bool {
        self.local_path(document_id).exists()
    }

    /// 将文档字节落盘
    ///
    /// 先写临时文件再改名，避免半截文件被当作缓存命中。
    pub async fn store(&self, document_id: &str, bytes: &[u8]) -> AppResult<PathBuf> {
        let final_path = self.local_path(document_id);
        let tmp_path = self.cache_dir.join(format!("{}.pdf.part", document_id));

        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| AppError::file_write_failed(&tmp_path, e))?;
        tokio::fs::rename(&tmp_path, &final_path)
            .await
            .map_err(|e| AppError::file_write_failed(&final_path, e))?;

        debug!("文档 {} 已缓存: {}", document_id, final_path.display());
        Ok(final_path)
    }

    /// 解析文档字节来源：缓存命中返回本地路径，未命中先下载再缓存
    pub async fn resolve(&self, document_id: &str, assets: &AssetClient) -> AppResult<PathBuf> {
        if self.is_cached(document_id) {
            debug!("缓存命中: {}", document_id);
            return Ok(self.local_path(document_id));
        }

        info!("📥 缓存未命中，下载文档 {}", document_id);
        let bytes = assets.download_document(document_id).await?;
        self.store(document_id, &bytes).await
    }

    /// 整体清空缓存（只删 .pdf 文件）
    pub fn clear_cache(&self) -> AppResult<()> {
        for path in self.cached_files()? {
            std::fs::remove_file(&path).map_err(|e| FileError::DeleteFailed {
                path: path.clone(),
                source: e,
            })?;
        }
        info!("🗑️ 文档缓存已清空");
        Ok(())
    }

    /// 缓存占用的总字节数
    pub fn cache_size(&self) -> u64 {
        self.cached_files()
            .map(|files| {
                files
                    .iter()
                    .filter_map(|p| std::fs::metadata(p).ok())
                    .map(|m| m.len())
                    .sum()
            })
            .unwrap_or(0)
    }

    /// 当前缓存的全部文档文件
    pub fn cached_files(&self) -> AppResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.cache_dir)
            .map_err(|e| AppError::file_read_failed(&self.cache_dir, e))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("pdf"))
            .collect();
        files.sort();
        Ok(files)
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}
