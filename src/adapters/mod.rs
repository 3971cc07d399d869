//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with the outside world:
//! - `text`: plain-text report rendering
//! - `fs_assets`: filesystem-backed branding assets

pub mod fs_assets;
pub mod text;

// Re-export render error for lib.rs
pub use text::RenderError;
