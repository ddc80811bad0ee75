//! Browser entry point.
//!
//! Binds the page's `glCanvas` and the four color buttons. State is shared
//! between the click listeners through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use tintquad_engine::core::{report_fatal, AppControl, FatalError, FrameCtx};
use tintquad_engine::device::{Gpu, GpuInit};
use tintquad_engine::logging::{init_logging, LoggingConfig};
use tintquad_engine::paint::Color;
use tintquad_engine::render::{QuadRenderer, RenderCtx};
use tintquad_engine::web;

use crate::config::{DemoConfig, CANVAS_ID};
use crate::controller::ColorController;
use crate::palette::ColorChoice;

struct WebDemo {
    gpu: Gpu<'static>,
    quad: QuadRenderer,
    controller: ColorController,
    clear: Color,
}

impl WebDemo {
    fn redraw(&mut self) -> AppControl {
        let color = self.controller.current();
        let quad = &self.quad;

        let mut ctx = FrameCtx::new(&mut self.gpu, 1.0);
        ctx.render(self.clear, |rctx, target| {
            quad.draw(rctx, target, None, color);
        })
    }
}

/// Redraws now; a dropped frame is retried on the next animation frame.
fn redraw_shared(demo: &Rc<RefCell<WebDemo>>) {
    let control = demo.borrow_mut().redraw();
    match control {
        AppControl::Continue => {}
        AppControl::Redraw => {
            let demo = Rc::clone(demo);
            if let Err(e) = web::next_frame(move || redraw_shared(&demo)) {
                log::warn!("{e:#}");
            }
        }
        AppControl::Exit => log::error!("surface lost; the canvas will no longer update"),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging(LoggingConfig::default());

    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = run().await {
            report_fatal(&err);
        }
    });
}

async fn run() -> Result<(), FatalError> {
    let config = DemoConfig::default();

    let canvas = web::canvas_by_id(CANVAS_ID).map_err(FatalError::ContextUnavailable)?;
    let gpu = web::canvas_gpu(canvas, GpuInit::webgl2())
        .await
        .map_err(FatalError::ContextUnavailable)?;

    let program = QuadRenderer::default_program()?;
    let quad = {
        let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), gpu.size(), 1.0);
        QuadRenderer::new(&ctx, &program)?
    };

    let demo = Rc::new(RefCell::new(WebDemo {
        gpu,
        quad,
        controller: ColorController::new(),
        clear: config.clear_color,
    }));

    redraw_shared(&demo);

    for choice in ColorChoice::ALL {
        let demo = Rc::clone(&demo);
        let bound = web::on_click(choice.element_id(), move || {
            demo.borrow_mut().controller.apply(choice);
            redraw_shared(&demo);
        });
        if let Err(e) = bound {
            log::warn!("{e:#}");
        }
    }

    log::info!("tintquad running in {CANVAS_ID}");
    Ok(())
}
