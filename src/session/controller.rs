//! 文档会话控制器 - 编排层
//!
//! 单写者：答题卡、页面仲裁区、画布绑定集、判分结果只归会话所有，
//! 一切修改都经由会话方法串行发生。后台工作（下载、导出栅格化）
//! 在别处执行，结果以值/事件汇回后才触碰共享状态。

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::clients::AssetClient;
use crate::error::AppError;
use crate::infrastructure::{DocumentStore, PdfBackend};
use crate::models::{Document, Drawing, PageArena, PageId, SurfaceId, Tool};
use crate::services::{AnswerGrid, DrawingSurface, ExportService, GradingService, OverlayManager, RowRender};
use crate::session::events::{ActionOutcome, Confirmation, SessionEvent};
use crate::AppResult;

/// 会话依赖（显式注入，测试可整体替换为假件）
pub struct SessionDeps {
    pub store: Arc<DocumentStore>,
    pub assets: Arc<AssetClient>,
    pub backend: Arc<dyn PdfBackend>,
    pub export: Arc<ExportService>,
    pub grading: GradingService,
}

/// 当前打开的文档及其页面状态
struct OpenDocument {
    document: Document,
    local_path: PathBuf,
    arena: PageArena,
    /// "已定位"标志：防止每次布局都重复跳回第一页
    positioned: bool,
}

/// 文档会话控制器
pub struct DocumentSession {
    deps: SessionDeps,
    events: mpsc::UnboundedSender<SessionEvent>,
    grid: AnswerGrid,
    overlay: OverlayManager,
    open_doc: Option<OpenDocument>,
    /// 会话代：open/close 时自增，用于作废在途导出
    generation: Arc<AtomicU64>,
    export_task: Option<JoinHandle<()>>,
}

impl DocumentSession {
    /// 创建会话，返回 (会话, 事件接收端)
    pub fn new(deps: SessionDeps) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                deps,
                events: tx,
                grid: AnswerGrid::new(),
                overlay: OverlayManager::new(),
                open_doc: None,
                generation: Arc::new(AtomicU64::new(0)),
                export_task: None,
            },
            rx,
        )
    }

    // ========== 打开 / 关闭 ==========

    /// 打开一份文档
    ///
    /// 缓存命中取本地路径，未命中先下载；随后交给渲染后端取页数，
    /// 建立页面仲裁区，并武装一次性"回到第一页"标志。
    /// 打开新文档会作废上一个文档的在途导出与全部会话状态。
    pub async fn open(&mut self, document: Document) -> AppResult<()> {
        self.invalidate_background_work();

        info!("📖 打开文档: {} ({})", document.title, document.id);

        let local_path = self
            .deps
            .store
            .resolve(&document.id, &self.deps.assets)
            .await?;

        let backend = self.deps.backend.clone();
        let path_for_open = local_path.clone();
        let page_count = tokio::task::spawn_blocking(move || {
            backend.open(&path_for_open).map(|doc| doc.page_count())
        })
        .await
        .map_err(|e| AppError::Other(format!("后台任务失败: {}", e)))??;

        self.grid.clear_all();
        self.overlay = OverlayManager::new();
        self.open_doc = Some(OpenDocument {
            document,
            local_path,
            arena: PageArena::new(page_count),
            positioned: false,
        });

        info!("✓ 文档就绪: {} 页", page_count);
        Ok(())
    }

    /// 关闭当前文档（页面随之销毁）
    pub fn close(&mut self) {
        self.invalidate_background_work();
        self.open_doc = None;
        self.overlay = OverlayManager::new();
        self.grid.clear_all();
    }

    /// 每次打开后只允许一次"回到第一页/顶部"
    ///
    /// # 返回
    /// 首次调用返回 true（宿主应执行定位），此后一直 false
    pub fn take_initial_position(&mut self) -> bool {
        match &mut self.open_doc {
            Some(doc) if !doc.positioned => {
                doc.positioned = true;
                true
            }
            _ => false,
        }
    }

    // ========== 页面可见性（滚动驱动） ==========

    /// 页进入可见窗口：绑定画布（幂等）
    pub fn page_became_visible(&mut self, page_id: PageId) -> Option<SurfaceId> {
        let doc = self.open_doc.as_mut()?;
        self.overlay.bind(&mut doc.arena, page_id)
    }

    /// 页滚出保留窗口：冲回笔迹并回收画布
    pub fn page_left_window(&mut self, page_id: PageId) {
        if let Some(doc) = self.open_doc.as_mut() {
            self.overlay.unbind(&mut doc.arena, page_id);
        }
    }

    /// 访问某页当前绑定的画布（供笔迹输入写入）
    pub fn surface_mut(&mut self, page_id: PageId) -> Option<&mut DrawingSurface> {
        self.overlay.surface_mut(page_id)
    }

    // ========== 工具选择 / 清空 ==========

    /// 工具选择
    ///
    /// `Some(tool)`：广播到全部活动画布并成为后续默认；
    /// `None` 是清空意图，必须先经用户确认。
    pub fn select_tool(&mut self, tool: Option<Tool>) -> ActionOutcome {
        match tool {
            Some(tool) => {
                self.overlay.set_tool_all(tool);
                self.emit(SessionEvent::ToolChanged(tool));
                ActionOutcome::Done
            }
            None => ActionOutcome::NeedsConfirmation(Confirmation::ClearAll),
        }
    }

    /// 用户已确认的全部清空（破坏性、不可撤销）
    pub fn clear_all_confirmed(&mut self) {
        if let Some(doc) = self.open_doc.as_mut() {
            self.overlay.clear_all(&mut doc.arena);
        }
        self.grid.clear_all();
        self.emit(SessionEvent::Cleared);
        info!("🗑️ 全部笔迹与答题内容已清空");
    }

    // ========== 答题卡 ==========

    /// 答题卡选择（切换语义），变更以事件通知宿主
    pub fn select_answer(&mut self, question: u8, answer: u8) -> AppResult<()> {
        let change = self.grid.select(question, answer)?;
        self.emit(SessionEvent::AnswerChanged {
            question: change.question,
            selected: change.selected,
        });
        Ok(())
    }

    /// 推导某题行的渲染状态
    pub fn row_render(&self, question: u8) -> AppResult<RowRender> {
        self.grid.row_render(question)
    }

    // ========== 判分 ==========

    /// 判分入口：未答完时先征求确认
    pub fn grade(&mut self) -> ActionOutcome {
        if self.deps.grading.is_complete(self.grid.answers()) {
            self.grade_confirmed();
            ActionOutcome::Done
        } else {
            ActionOutcome::NeedsConfirmation(Confirmation::GradeIncomplete)
        }
    }

    /// 判分（已确认或已答完）
    pub fn grade_confirmed(&mut self) {
        let result = self.deps.grading.grade(self.grid.answers());
        info!(
            "✓ 判分完成: {}/{} 答对，得分 {:.1}",
            result.correct_answers, result.total_questions, result.score
        );
        self.grid.apply_grading(result.clone());
        self.emit(SessionEvent::GradingCompleted(result));
    }

    // ========== 导出 ==========

    /// 平面化导出
    ///
    /// 先把每块活动画布冲回页面，再带着笔迹快照转入 blocking 线程
    /// 逐页栅格化；完成或失败都以事件汇回。结果带会话代标记，
    /// 导出期间换了文档的话旧结果直接作废。
    pub fn export(&mut self) -> AppResult<()> {
        let doc = self
            .open_doc
            .as_mut()
            .ok_or_else(|| AppError::Other("没有打开的文档，无法导出".to_string()))?;

        self.overlay.flush_all(&mut doc.arena);

        let drawings: Vec<Option<Drawing>> = doc
            .arena
            .page_ids()
            .map(|id| doc.arena.get(id).and_then(|p| p.drawing.clone()))
            .collect();

        let export = self.deps.export.clone();
        let source = doc.local_path.clone();
        let document_id = doc.document.id.clone();
        let title = doc.document.title.clone();
        let events = self.events.clone();
        let generation = self.generation.clone();
        let stamp = generation.load(Ordering::SeqCst);

        let handle = tokio::task::spawn_blocking(move || {
            let result = export.flatten(&source, &drawings, &document_id, &title);

            // 会话代已变：文档换了，结果作废
            if generation.load(Ordering::SeqCst) != stamp {
                warn!("⚠️ 导出结果已过期，丢弃 ({})", document_id);
                return;
            }

            match result {
                Ok(path) => {
                    let _ = events.send(SessionEvent::ExportCompleted(path));
                }
                Err(e) => {
                    let _ = events.send(SessionEvent::ErrorRaised(e.to_string()));
                }
            }
        });

        self.export_task = Some(handle);
        Ok(())
    }

    // ========== 查询 ==========

    /// 当前打开的文档元数据
    pub fn current_document(&self) -> Option<&Document> {
        self.open_doc.as_ref().map(|d| &d.document)
    }

    /// 当前文档页数（未打开为 0）
    pub fn page_count(&self) -> usize {
        self.open_doc.as_ref().map_or(0, |d| d.arena.page_count())
    }

    /// 答题卡状态（只读）
    pub fn answer_grid(&self) -> &AnswerGrid {
        &self.grid
    }

    /// 画布生命周期管理器（只读）
    pub fn overlay(&self) -> &OverlayManager {
        &self.overlay
    }

    /// 某页当前的持久化笔迹
    pub fn page_drawing(&self, page_id: PageId) -> Option<&Drawing> {
        self.open_doc
            .as_ref()
            .and_then(|d| d.arena.get(page_id))
            .and_then(|p| p.drawing.as_ref())
    }

    // ========== 内部 ==========

    /// 作废在途后台工作（换代 + 中止未启动的导出任务）
    fn invalidate_background_work(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.export_task.take() {
            task.abort();
        }
    }

    fn emit(&self, event: SessionEvent) {
        // 接收端关闭说明宿主已退出，丢弃即可
        let _ = self.events.send(event);
    }
}
