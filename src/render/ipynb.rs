use crate::notebook::{Cell, NotebookSpec};
use crate::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

pub const NBFORMAT: u32 = 4;
/// Minor 4 has no per-cell `id`, so output stays byte-identical across runs.
pub const NBFORMAT_MINOR: u32 = 4;

// Field order below is alphabetical: the reference writer sorts keys.

#[derive(Debug, Serialize)]
struct NotebookDoc<'a> {
    cells: Vec<CellDoc<'a>>,
    metadata: NotebookMetadata,
    nbformat: u32,
    nbformat_minor: u32,
}

#[derive(Debug, Serialize)]
struct CellDoc<'a> {
    cell_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_count: Option<Option<u32>>,
    metadata: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outputs: Option<Vec<Value>>,
    source: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct NotebookMetadata {
    kernelspec: KernelSpec,
    language_info: LanguageInfo,
}

#[derive(Debug, Serialize)]
struct KernelSpec {
    display_name: &'static str,
    language: &'static str,
    name: &'static str,
}

#[derive(Debug, Serialize)]
struct LanguageInfo {
    name: &'static str,
}

impl<'a> From<&'a Cell> for CellDoc<'a> {
    fn from(cell: &'a Cell) -> Self {
        // Code cells always carry `execution_count: null` and `outputs: []`.
        let (execution_count, outputs) = if cell.is_code() {
            (Some(None), Some(Vec::new()))
        } else {
            (None, None)
        };
        Self {
            cell_type: cell.kind(),
            execution_count,
            metadata: Map::new(),
            outputs,
            source: split_source(cell.source()),
        }
    }
}

/// Split cell text into lines, keeping the `\n` on every line but the last.
pub fn split_source(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Render a notebook as nbformat v4 JSON.
///
/// Matches the reference writer byte for byte: sorted keys, one-space indent,
/// unescaped non-ASCII, trailing newline.
pub fn render_notebook(spec: &NotebookSpec) -> Result<String> {
    let doc = NotebookDoc {
        cells: spec.cells.iter().map(CellDoc::from).collect(),
        metadata: NotebookMetadata {
            kernelspec: KernelSpec {
                display_name: "Python 3",
                language: "python",
                name: "python3",
            },
            language_info: LanguageInfo { name: "python" },
        },
        nbformat: NBFORMAT,
        nbformat_minor: NBFORMAT_MINOR,
    };

    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    doc.serialize(&mut ser)?;
    buf.push(b'\n');

    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> NotebookSpec {
        NotebookSpec::new(
            "sample.ipynb",
            vec![
                Cell::markdown("# Title\n\nBody ✓"),
                Cell::code("import os\nprint(\"\\n=== done ===\")"),
            ],
        )
    }

    #[test]
    fn split_source_keeps_newlines_except_last() {
        assert_eq!(split_source("a\nb\n\nc"), vec!["a\n", "b\n", "\n", "c"]);
        assert_eq!(split_source("single"), vec!["single"]);
        assert!(split_source("").is_empty());
    }

    #[test]
    fn renders_exact_document() {
        let expected = r##"{
 "cells": [
  {
   "cell_type": "markdown",
   "metadata": {},
   "source": [
    "# Title\n",
    "\n",
    "Body ✓"
   ]
  },
  {
   "cell_type": "code",
   "execution_count": null,
   "metadata": {},
   "outputs": [],
   "source": [
    "import os\n",
    "print(\"\\n=== done ===\")"
   ]
  }
 ],
 "metadata": {
  "kernelspec": {
   "display_name": "Python 3",
   "language": "python",
   "name": "python3"
  },
  "language_info": {
   "name": "python"
  }
 },
 "nbformat": 4,
 "nbformat_minor": 4
}
"##;
        assert_eq!(render_notebook(&sample()).unwrap(), expected);
    }

    #[test]
    fn rendered_document_parses_as_v4_notebook() {
        let text = render_notebook(&sample()).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(doc["nbformat"], 4);
        let cells = doc["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0]["cell_type"], "markdown");
        assert!(cells[0].get("outputs").is_none());
        assert_eq!(cells[1]["cell_type"], "code");
        assert_eq!(cells[1]["outputs"], Value::Array(vec![]));
        assert!(cells[1]["execution_count"].is_null());

        let joined: String = cells[1]["source"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l.as_str().unwrap())
            .collect();
        assert_eq!(joined, "import os\nprint(\"\\n=== done ===\")");
    }

    #[test]
    fn rendering_is_deterministic() {
        let spec = sample();
        assert_eq!(
            render_notebook(&spec).unwrap(),
            render_notebook(&spec).unwrap()
        );
    }
}
