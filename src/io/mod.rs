//! PDF engine I/O: loading source documents and persisting the result.

pub mod reader;
pub mod writer;

pub use reader::load_document;
pub use writer::{OutputWriter, WriteReport};
