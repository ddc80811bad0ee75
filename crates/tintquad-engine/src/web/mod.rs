//! Browser host helpers (wasm32 only).
//!
//! DOM lookups, click binding and GPU setup against an HTML canvas.

use anyhow::{anyhow, Context, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::device::{Gpu, GpuInit, SurfaceSize};

fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .context("no global `window`")?
        .document()
        .context("window has no document")
}

/// Looks up `<canvas id="{id}">`.
pub fn canvas_by_id(id: &str) -> Result<web_sys::HtmlCanvasElement> {
    document()?
        .get_element_by_id(id)
        .with_context(|| format!("no element with id `{id}`"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| anyhow!("element `{id}` is not a canvas"))
}

/// Drawing-buffer size of `canvas` in physical pixels.
pub fn canvas_size(canvas: &web_sys::HtmlCanvasElement) -> SurfaceSize {
    SurfaceSize::new(canvas.width(), canvas.height())
}

/// Creates a GPU context bound to `canvas`.
///
/// Any error means the page has no usable drawing context.
pub async fn canvas_gpu(canvas: web_sys::HtmlCanvasElement, init: GpuInit) -> Result<Gpu<'static>> {
    let size = canvas_size(&canvas);
    Gpu::new(wgpu::SurfaceTarget::Canvas(canvas), size, init).await
}

/// Registers `handler` as the click listener of the element with `id`.
///
/// The listener lives for the rest of the page.
pub fn on_click<F>(id: &str, mut handler: F) -> Result<()>
where
    F: FnMut() + 'static,
{
    let element = document()?
        .get_element_by_id(id)
        .with_context(|| format!("no element with id `{id}`"))?;

    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_: web_sys::MouseEvent| {
        handler()
    });

    element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("failed to bind click on `{id}`: {e:?}"))?;

    closure.forget();
    Ok(())
}

/// Runs `f` once before the next repaint.
pub fn next_frame<F>(f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(move |_: f64| f());
    web_sys::window()
        .context("no global `window`")?
        .request_animation_frame(callback.unchecked_ref())
        .map_err(|e| anyhow!("failed to schedule animation frame: {e:?}"))?;
    Ok(())
}
