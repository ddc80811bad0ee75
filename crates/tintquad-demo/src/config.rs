use tintquad_engine::coords::Rect;
use tintquad_engine::paint::Color;

/// Canvas id on the web page.
pub const CANVAS_ID: &str = "glCanvas";

/// Demo layout and appearance.
///
/// Natively the window is `canvas_width x (canvas_height + toolbar_height)`
/// logical pixels; the canvas sits on top and the toolbar below it.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub toolbar_height: f32,
    pub clear_color: Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "tintquad".to_string(),
            canvas_width: 640.0,
            canvas_height: 480.0,
            toolbar_height: 64.0,
            clear_color: Color::BLACK,
        }
    }
}

impl DemoConfig {
    pub fn canvas_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.canvas_width, self.canvas_height)
    }

    pub fn toolbar_rect(&self) -> Rect {
        Rect::new(0.0, self.canvas_height, self.canvas_width, self.toolbar_height)
    }

    /// Full window size in logical pixels.
    pub fn window_size(&self) -> (f64, f64) {
        (
            self.canvas_width as f64,
            (self.canvas_height + self.toolbar_height) as f64,
        )
    }
}
