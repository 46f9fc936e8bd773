//! Data model for article extraction.
//!
//! Input side: [`ContentBlock`], the reading-order stream produced by the
//! upstream document parser. Output side: [`Article`], the record assembled
//! by the extraction passes and serialized to JSON.

mod block;
mod document;
mod figure;
mod reference;
mod section;
mod table;

pub use block::{BlockKind, ContentBlock, ListKind};
pub use document::{Article, UNKNOWN_LANGUAGE};
pub use figure::Figure;
pub use reference::Reference;
pub use section::{Section, SectionType};
pub use table::Table;
