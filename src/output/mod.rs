//! Output document and writer

pub mod schema;
pub mod writer;

pub use schema::VariablesDocument;
pub use writer::{to_json, write_document, OutputError};
