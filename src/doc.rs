use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// The text file being viewed, split into lines once at load.
pub struct Document {
    pub name: String,
    lines: Vec<String>,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            lines: raw.lines().map(str::to_owned).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The slice of lines visible in a viewport of `count` rows starting
    /// at line `start`, clamped to the document.
    pub fn window(&self, start: usize, count: usize) -> &[String] {
        let start = start.min(self.lines.len());
        let end = start.saturating_add(count).min(self.lines.len());
        &self.lines[start..end]
    }

    #[cfg(test)]
    fn from_lines(lines: &[&str]) -> Self {
        Self {
            name: String::from("test"),
            lines: lines.iter().map(|l| (*l).to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_clamps_to_document_bounds() {
        let doc = Document::from_lines(&["a", "b", "c", "d"]);
        assert_eq!(doc.window(0, 2), &["a", "b"]);
        assert_eq!(doc.window(3, 10), &["d"]);
        assert_eq!(doc.window(4, 10), &[] as &[String]);
        assert_eq!(doc.window(100, 10), &[] as &[String]);
    }

    #[test]
    fn empty_document_has_empty_windows() {
        let doc = Document::from_lines(&[]);
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.window(0, 5), &[] as &[String]);
    }
}
