//! 导出服务 - 业务能力层
//!
//! 把"原页内容 + 笔迹"逐页栅格化并拼装成一份新的平面化文档。
//! 全有或全无：任意一页失败即中止，已有文档与笔迹不受影响。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use regex::Regex;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, FileError};
use crate::infrastructure::PdfBackend;
use crate::models::Drawing;
use crate::AppResult;

/// 导出服务
pub struct ExportService {
    backend: Arc<dyn PdfBackend>,
    export_dir: PathBuf,
    /// 文件名清洗正则（构造时编译一次）
    filename_re: Regex,
}

impl ExportService {
    /// 创建导出服务（输出目录不存在则建立）
    pub fn new(config: &Config, backend: Arc<dyn PdfBackend>) -> AppResult<Self> {
        let export_dir = PathBuf::from(&config.export_dir);
        std::fs::create_dir_all(&export_dir).map_err(|e| FileError::DirectoryUnavailable {
            path: export_dir.clone(),
            source: e,
        })?;
        let filename_re = Regex::new(r#"[\\/:*?"<>|\s]+"#)
            .map_err(|e| AppError::Other(format!("文件名清洗正则构造失败: {}", e)))?;
        Ok(Self {
            backend,
            export_dir,
            filename_re,
        })
    }

    /// 平面化导出
    ///
    /// 阻塞调用：逐页栅格化开销大，调用方应放到 blocking 线程上执行。
    ///
    /// # 参数
    /// - `source`: 本地缓存中的原文档路径
    /// - `drawings`: 按页序的持久化笔迹快照（导出前须先 flush_all）
    /// - `document_id`: 文档 id（标题不可用时作为文件名）
    /// - `title`: 文档标题
    ///
    /// # 返回
    /// 返回导出文件路径
    pub fn flatten(
        &self,
        source: &Path,
        drawings: &[Option<Drawing>],
        document_id: &str,
        title: &str,
    ) -> AppResult<PathBuf> {
        let document = self.backend.open(source)?;
        let page_count = document.page_count();

        info!("📤 开始导出: {} 页", page_count);

        let mut pages = Vec::with_capacity(page_count);
        for index in 0..page_count {
            let overlay = drawings
                .get(index)
                .and_then(|d| d.as_ref())
                .filter(|d| !d.is_empty());
            let image = document.rasterize_page(index, overlay)?;
            debug!("第 {} 页栅格化完成 ({}x{})", index + 1, image.width, image.height);
            pages.push(image);
        }

        let out_path = self.output_path(document_id, title);
        self.backend.assemble(&pages, &out_path)?;

        info!("✓ 导出完成: {}", out_path.display());
        Ok(out_path)
    }

    /// 导出文件路径：标题清洗后加 `_with_drawings.pdf` 后缀
    fn output_path(&self, document_id: &str, title: &str) -> PathBuf {
        let mut stem = self
            .filename_re
            .replace_all(title.trim(), "_")
            .trim_matches('_')
            .to_string();
        if stem.is_empty() {
            stem = document_id.to_string();
        }
        self.export_dir.join(format!("{}_with_drawings.pdf", stem))
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}
