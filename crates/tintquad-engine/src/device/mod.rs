//! GPU device + surface.
//!
//! [`Gpu`] is created from either a winit window or an HTML canvas and hands
//! out one [`GpuFrame`] per redraw.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::{SurfaceErrorAction, SurfaceSize};
