//! Rendering Adapter: renderer-agnostic interface over the camera's view
//! transform.
//!
//! # Invariants
//! - The renderer never mutates the camera; it consumes one view matrix per
//!   frame and combines it with its own projection.
//! - Projection parameters live here, not in the camera.
//!
//! # Workaround
//! Provides a trait-based renderer interface with a debug text renderer as a
//! workaround for a GPU backend. The trait is stable; swap in a GPU
//! implementation without changing consumers.

mod projection;
mod renderer;
mod scene;

pub use projection::Projection;
pub use renderer::{DebugTextRenderer, FrameInput, Renderer};
pub use scene::CubeField;

pub fn crate_info() -> &'static str {
    "freefly-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
