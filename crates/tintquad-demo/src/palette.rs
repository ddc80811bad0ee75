use tintquad_engine::input::Key;
use tintquad_engine::paint::Color;

/// Fill color at startup and after a reset.
pub const DEFAULT_COLOR: Color = Color::RED;

/// One of the four color buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorChoice {
    Red,
    Green,
    Blue,
    Reset,
}

impl ColorChoice {
    /// Buttons in display order.
    pub const ALL: [ColorChoice; 4] = [
        ColorChoice::Red,
        ColorChoice::Green,
        ColorChoice::Blue,
        ColorChoice::Reset,
    ];

    /// `id` of the matching `<button>` on the web page.
    pub const fn element_id(self) -> &'static str {
        match self {
            ColorChoice::Red => "color1",
            ColorChoice::Green => "color2",
            ColorChoice::Blue => "color3",
            ColorChoice::Reset => "resetColor",
        }
    }

    /// The literal this button stores.
    pub const fn color(self) -> Color {
        match self {
            ColorChoice::Red => Color::RED,
            ColorChoice::Green => Color::GREEN,
            ColorChoice::Blue => Color::BLUE,
            ColorChoice::Reset => DEFAULT_COLOR,
        }
    }

    /// Keyboard shortcut: `1`, `2`, `3` and `R`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Digit1 => Some(ColorChoice::Red),
            Key::Digit2 => Some(ColorChoice::Green),
            Key::Digit3 => Some(ColorChoice::Blue),
            Key::R => Some(ColorChoice::Reset),
            _ => None,
        }
    }
}
