use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the surface-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub gpu: &'a mut Gpu<'w>,
    /// Physical pixels per logical pixel.
    pub scale_factor: f32,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    pub fn new(gpu: &'a mut Gpu<'w>, scale_factor: f32) -> Self {
        Self { gpu, scale_factor }
    }

    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then presents the frame.
    ///
    /// A reconfigured surface is retried once. A frame that still cannot be
    /// acquired returns [`AppControl::Redraw`] so the host schedules another
    /// one; out-of-memory returns [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.acquire_frame() {
            Ok(f) => f,
            Err(action) => return dropped_frame_control(action),
        };

        // Clear pass, dropped before the encoder is lent to `draw`.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tintquad clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.into()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = render_ctx(&*self.gpu, self.scale_factor);

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.gpu.submit(frame);
        AppControl::Continue
    }

    fn acquire_frame(&mut self) -> Result<GpuFrame, SurfaceErrorAction> {
        let err = match self.gpu.begin_frame() {
            Ok(frame) => return Ok(frame),
            Err(err) => err,
        };

        match self.gpu.handle_surface_error(err) {
            SurfaceErrorAction::Reconfigured => self
                .gpu
                .begin_frame()
                .map_err(|err| self.gpu.handle_surface_error(err)),
            action => Err(action),
        }
    }
}

/// Directive for a frame that could not be acquired.
fn dropped_frame_control(action: SurfaceErrorAction) -> AppControl {
    match action {
        SurfaceErrorAction::Fatal => AppControl::Exit,
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => AppControl::Redraw,
    }
}

fn render_ctx<'g>(gpu: &'g Gpu<'_>, scale_factor: f32) -> RenderCtx<'g> {
    RenderCtx::new(
        gpu.device(),
        gpu.queue(),
        gpu.surface_format(),
        gpu.size(),
        scale_factor,
    )
}
