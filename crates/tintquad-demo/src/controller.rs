use tintquad_engine::paint::Color;

use crate::palette::{ColorChoice, DEFAULT_COLOR};

/// Holds the quad's fill color.
///
/// Every click handler goes through [`ColorController::apply`] and then
/// redraws with [`ColorController::current`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorController {
    current: Color,
}

impl Default for ColorController {
    fn default() -> Self {
        Self { current: DEFAULT_COLOR }
    }
}

impl ColorController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Color {
        self.current
    }

    /// Replaces the stored color with `choice`'s literal and returns it.
    pub fn apply(&mut self, choice: ColorChoice) -> Color {
        self.current = choice.color();
        log::debug!("fill color -> {choice:?} {:?}", self.current.to_array());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tintquad_engine::render::ColorUniform;

    #[test]
    fn starts_red() {
        assert_eq!(ColorController::new().current(), Color::RED);
    }

    #[test]
    fn each_button_sets_its_literal() {
        let expected = [
            (ColorChoice::Red, [1.0, 0.0, 0.0, 1.0]),
            (ColorChoice::Green, [0.0, 1.0, 0.0, 1.0]),
            (ColorChoice::Blue, [0.0, 0.0, 1.0, 1.0]),
            (ColorChoice::Reset, [1.0, 0.0, 0.0, 1.0]),
        ];

        let mut ctl = ColorController::new();
        for (choice, literal) in expected {
            let returned = ctl.apply(choice);
            assert_eq!(returned.to_array(), literal);
            assert_eq!(ctl.current().to_array(), literal);
            // What the next draw uploads.
            assert_eq!(ColorUniform::from(ctl.current()).color, literal);
        }
    }

    #[test]
    fn reset_restores_default_after_any_sequence() {
        let mut ctl = ColorController::new();
        ctl.apply(ColorChoice::Blue);
        ctl.apply(ColorChoice::Green);
        ctl.apply(ColorChoice::Reset);
        assert_eq!(ctl, ColorController::default());
    }

    #[test]
    fn repeated_clicks_are_idempotent() {
        let mut ctl = ColorController::new();
        let first = ctl.apply(ColorChoice::Green);
        let second = ctl.apply(ColorChoice::Green);
        assert_eq!(first, second);
    }
}
