//! Rendering module for serializing extracted articles.

mod json;
mod summary;

pub use json::{to_json, write_json, write_to, JsonFormat};
pub use summary::to_summary;
