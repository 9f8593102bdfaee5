use super::canvas::CanvasSurface;
use crate::composer::SceneComposer;
use crate::config::SceneConfig;
use crate::error::{RenderError, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

/// Draw the scene once and redraw it whenever the window is resized.
pub fn start(config: SceneConfig) -> Result<()> {
    let surface = CanvasSurface::from_id(&config.canvas_id)?;
    let config = config.with_attributes(|name| surface.canvas().get_attribute(name))?;
    log::info!(
        "starting scene on #{} ({} rings, seed {:?})",
        config.canvas_id,
        config.ring_count,
        config.seed
    );

    let composer = Rc::new(RefCell::new(SceneComposer::new(surface, &config)?));

    // The listener owns a handle to the composer and lives as long as the page.
    let on_resize = {
        let composer = composer.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = composer.borrow_mut().handle_resize() {
                log::error!("redraw after resize failed: {err}");
            }
        }) as Box<dyn FnMut()>)
    };
    window()
        .ok_or(RenderError::NoWindow)?
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(RenderError::js)?;
    on_resize.forget();

    Ok(())
}
