//! Write a catalog of notebooks under an output root.

use crate::notebook::Catalog;
use crate::render::render_notebook;
use crate::Result;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Render every notebook in `catalog` to `root/<relative path>`.
///
/// Creates the root and any parent directories. Existing files are
/// overwritten. One confirmation line per file goes to `out`. Stops at the
/// first failure; files written before it are left in place.
pub fn generate<W: Write>(root: &Path, catalog: &Catalog, out: &mut W) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(root)
        .with_context(|| format!("create output directory {}", root.display()))?;

    let mut written = Vec::with_capacity(catalog.len());
    for nb in catalog {
        let target = root.join(&nb.path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
            debug!(dir = %parent.display(), "directory ready");
        }

        let body = render_notebook(nb).with_context(|| format!("render notebook {}", nb.path))?;
        fs::write(&target, &body)
            .with_context(|| format!("write notebook {}", target.display()))?;
        debug!(
            path = %target.display(),
            markdown = nb.markdown_count(),
            code = nb.code_count(),
            bytes = body.len(),
            "notebook written"
        );

        writeln!(out, "✓ Created: {}", target.display())?;
        written.push(target);
    }

    Ok(written)
}

/// Count summary plus the follow-up steps for the fixtures repository.
pub fn print_summary<W: Write>(out: &mut W, count: usize, root: &Path) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "✓ Successfully generated {} test notebooks in {}",
        count,
        root.display()
    )?;
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    writeln!(
        out,
        "1. cd to the jupyter-notebook-validator-test-notebooks directory"
    )?;
    writeln!(out, "2. Review the generated notebooks")?;
    writeln!(
        out,
        "3. git add . && git commit -m 'Add integration test notebooks'"
    )?;
    writeln!(out, "4. git push origin main")?;
    Ok(())
}
