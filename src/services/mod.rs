pub mod answer_grid;
pub mod catalog;
pub mod export;
pub mod grading_service;
pub mod overlay;

pub use answer_grid::{AnswerChange, AnswerGrid, CellMark, RowRender};
pub use catalog::CatalogService;
pub use export::ExportService;
pub use grading_service::GradingService;
pub use overlay::{DrawingSurface, OverlayManager};
