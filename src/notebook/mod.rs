//! Notebook layer: cell content + the catalog of notebooks to emit.
//!
//! This module is intentionally separate from serialization and file writing.
//! It owns:
//! - Cell type (markdown or code text)
//! - NotebookSpec / Catalog (relative path -> ordered cells)

pub mod catalog;
pub mod cell;

pub use catalog::{Catalog, NotebookSpec};
pub use cell::Cell;
