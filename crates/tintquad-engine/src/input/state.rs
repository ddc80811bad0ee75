use super::types::{InputEvent, PointerButtonEvent};

/// Last known pointer position in logical pixels.
///
/// winit reports button presses without a position, so the runtime keeps this
/// current and stamps it onto every [`PointerButtonEvent`].
#[derive(Debug, Default)]
pub struct InputState {
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMoved { x, y }
            | InputEvent::PointerButton(PointerButtonEvent { x, y, .. }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Focused(_) | InputEvent::Key { .. } => {}
        }
    }
}
