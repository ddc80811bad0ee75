//! Platform-agnostic input.
//!
//! The native runtime translates winit events into [`InputEvent`]s; apps
//! never see winit types.

mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent};
