//! A single notebook cell.
//!
//! Cells only carry source text. Execution state and outputs are left for
//! whatever later runs the notebook.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Markdown(String),
    Code(String),
}

impl Cell {
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Markdown(text.into())
    }

    pub fn code(source: impl Into<String>) -> Self {
        Self::Code(source.into())
    }

    /// The `cell_type` tag used in the notebook format.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Markdown(_) => "markdown",
            Self::Code(_) => "code",
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Markdown(text) | Self::Code(text) => text,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Cell::markdown("# Title").kind(), "markdown");
        assert_eq!(Cell::code("import os").kind(), "code");
    }

    #[test]
    fn source_returns_literal_text() {
        let cell = Cell::code("# Import libraries\nimport os");
        assert_eq!(cell.source(), "# Import libraries\nimport os");
        assert!(cell.is_code());
        assert!(!Cell::markdown("text").is_code());
    }
}
