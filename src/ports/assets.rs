//! Asset port: Trait for optional branding assets.

/// Trait for loading branding assets (logo) for the presentation layer.
///
/// Loading is best-effort: a missing asset is reported as `None` and must
/// never affect risk computation.
pub trait AssetSource: Send + Sync {
    /// Load the logo image bytes, if available.
    fn load_logo(&self) -> Option<Vec<u8>>;
}
