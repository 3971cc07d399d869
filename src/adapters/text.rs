//! Plain-text report renderer.
//!
//! Renders the assembled line sequence as a titled UTF-8 document: a header,
//! the patient and risk headline lines, then the factor list. Keeps the
//! layout of the downloadable report without any pagination machinery.

use std::fmt::Write as _;

use crate::domain::ReportLineItem;
use crate::ports::ReportRenderer;

/// Error type for report rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Renders reports as plain UTF-8 text.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for TextRenderer {
    type Error = RenderError;

    fn render(&self, title: &str, lines: &[ReportLineItem]) -> Result<Vec<u8>, Self::Error> {
        let mut doc = String::new();
        writeln!(doc, "{title}")?;
        writeln!(doc, "{}", "=".repeat(title.len()))?;
        writeln!(doc)?;

        // First two lines are the patient and risk headline; the rest are
        // listed as factor bullets, matching the report layout.
        for (i, line) in lines.iter().enumerate() {
            if i < 2 {
                writeln!(doc, "{}: {}", line.label, line.value)?;
            } else {
                writeln!(doc, "- {}: {}", line.label, line.value)?;
            }
        }

        Ok(doc.into_bytes())
    }
}
