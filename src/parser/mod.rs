pub mod document_parser;

pub use document_parser::{DocumentParser, JsonDocumentParser, SubmittedFile};
