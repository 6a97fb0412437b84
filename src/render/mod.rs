//! Serialization of notebook specs to the on-disk notebook format.

pub mod ipynb;

pub use ipynb::render_notebook;
