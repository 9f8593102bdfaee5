//! Generative torus scene for an HTML canvas.
//!
//! Host builds carry the geometry and a headless [`RecordingSurface`];
//! the browser side (`CanvasSurface`, `start_scene`) only exists on wasm32.

#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod composer;
pub mod config;
pub mod error;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod viewport;

pub use composer::SceneComposer;
pub use config::SceneConfig;
pub use error::{RenderError, Result};
pub use renderer::CoordinateRenderer;
pub use scene::{ColorChannel, RingShape, Scene};
pub use surface::{CompositeOp, DrawCommand, RadialGradient, RecordingSurface, Rgba, Surface};
pub use viewport::Viewport;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::config::SceneConfig;
    use wasm_bindgen::prelude::*;

    mod canvas;
    mod logging;
    mod render;

    pub use canvas::CanvasSurface;
    pub use render::start;

    /// Entry point called by the page once the module is loaded.
    ///
    /// Draws into `#canvas_id` (default `canvas`) and keeps redrawing it on
    /// window resize. Throws if the canvas cannot be used.
    #[wasm_bindgen]
    pub fn start_scene(canvas_id: Option<String>) -> Result<(), JsValue> {
        logging::init(log::LevelFilter::Info);

        let mut config = SceneConfig::default();
        if let Some(id) = canvas_id {
            config = config.with_canvas_id(id);
        }
        render::start(config)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{start, start_scene, CanvasSurface};
