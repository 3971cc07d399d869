//! Ports layer: Trait definitions for external collaborators.
//!
//! The core never renders documents or loads assets itself; it talks to
//! these traits and leaves the mechanics to the adapters layer.

mod assets;
mod renderer;

pub use assets::AssetSource;
pub use renderer::ReportRenderer;
