pub mod document_store;
pub mod renderer;

pub use document_store::DocumentStore;
pub use renderer::{PageImage, PdfBackend, RenderedDocument};
