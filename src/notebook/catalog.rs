//! Catalog of notebooks to emit, keyed by path relative to the output root.
//!
//! Shape:
//!   eso-integration/aws-credentials-test.ipynb -> [Markdown, Code, ...]
//!   model-training/train-sentiment-model.ipynb -> [Markdown, Code, ...]
//!
//! Entries keep the order they were added in; that order drives the
//! confirmation output. `validate` checks paths and cell text before anything
//! touches the filesystem.

use crate::notebook::Cell;
use crate::Result;
use anyhow::bail;
use std::collections::BTreeSet;
use std::path::{Component, Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookSpec {
    pub path: String,
    pub cells: Vec<Cell>,
}

impl NotebookSpec {
    pub fn new(path: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            path: path.into(),
            cells,
        }
    }

    pub fn markdown_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_code()).count()
    }

    pub fn code_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_code()).count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    notebooks: Vec<NotebookSpec>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notebook: NotebookSpec) {
        self.notebooks.push(notebook);
    }

    pub fn len(&self) -> usize {
        self.notebooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notebooks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NotebookSpec> {
        self.notebooks.iter()
    }

    #[cfg(test)]
    pub fn get(&self, path: &str) -> Option<&NotebookSpec> {
        self.notebooks.iter().find(|nb| nb.path == path)
    }

    /// Ensure unique relative `.ipynb` paths and non-empty cell text.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            bail!("catalog contained no notebooks");
        }

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for nb in &self.notebooks {
            if !seen.insert(nb.path.as_str()) {
                bail!("duplicate notebook path in catalog: {}", nb.path);
            }

            let path = Path::new(&nb.path);
            let relative = path
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
            if !relative {
                bail!("notebook path must be relative without '..': {}", nb.path);
            }
            if path.extension().and_then(|e| e.to_str()) != Some("ipynb") {
                bail!("notebook path must end in .ipynb: {}", nb.path);
            }

            if nb.cells.is_empty() {
                bail!("notebook {} has no cells", nb.path);
            }
            for (idx, cell) in nb.cells.iter().enumerate() {
                if cell.source().trim().is_empty() {
                    bail!(
                        "notebook {} cell {} ({}) has empty source",
                        nb.path,
                        idx,
                        cell.kind()
                    );
                }
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a NotebookSpec;
    type IntoIter = std::slice::Iter<'a, NotebookSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
