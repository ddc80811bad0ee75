//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers) and records into
//! a [`RenderTarget`] handed out by the frame context.
//!
//! Convention:
//! - the quad lives in clip space and is positioned with a pass viewport
//! - panel geometry is in logical pixels (top-left origin, +Y down) and the
//!   vertex shader converts to NDC using a viewport uniform

mod ctx;
mod panel;
mod quad;
pub mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use panel::{Panel, PanelRenderer};
pub use quad::{ColorUniform, QuadRenderer, QUAD_POSITIONS};
pub use shader::{LinkedProgram, ShaderError, ShaderStage};
