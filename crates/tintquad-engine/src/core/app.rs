use crate::input::InputEvent;
use crate::render::RenderCtx;

use super::ctx::FrameCtx;
use super::fatal::FatalError;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    /// From `on_input`: render a frame now, before handling the next event.
    /// From `on_frame`: the frame was dropped; schedule another one.
    Redraw,
    Exit,
}

/// Application contract implemented by the demo.
pub trait App {
    /// Called once after the GPU context exists and before the first frame.
    ///
    /// One-time GPU setup (shader programs, static buffers) belongs here. An
    /// error is reported to the user and ends the run.
    fn init(&mut self, ctx: &RenderCtx<'_>) -> Result<(), FatalError>;

    /// Called for every translated input event.
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called for every rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
