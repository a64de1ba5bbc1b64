pub mod answer;
pub mod document;
pub mod grade;
pub mod ink;
pub mod loaders;
pub mod page;

pub use answer::{AnswerKey, AnswerSet, CHOICE_COUNT, QUESTION_COUNT};
pub use document::{AvailableFilters, Document, DocumentFilters, DocumentsResponse, FilterResponse};
pub use grade::GradingResult;
pub use ink::{Drawing, Stroke, Tool};
pub use loaders::{load_all_answer_sheets, load_answer_sheet, AnswerSheet};
pub use page::{DocumentPage, PageArena, PageId, SurfaceId};
