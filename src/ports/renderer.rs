//! Renderer port: Trait for report document rendering.
//!
//! This trait abstracts the document backend (plain text, PDF, ...) from the
//! application logic. Pagination, fonts, and byte encoding are the adapter's
//! concern; the port only fixes the payload it receives.

use crate::domain::ReportLineItem;

/// Trait for rendering an assembled report into a downloadable byte stream.
pub trait ReportRenderer: Send + Sync {
    /// Error type for rendering operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Render the titled line sequence into document bytes.
    ///
    /// # Errors
    /// Returns error if the document backend fails.
    fn render(&self, title: &str, lines: &[ReportLineItem]) -> Result<Vec<u8>, Self::Error>;
}
