use tintquad_engine::core::{App, AppControl, FatalError, FrameCtx};
use tintquad_engine::input::{InputEvent, Key, KeyState};
use tintquad_engine::render::{PanelRenderer, QuadRenderer, RenderCtx};

use crate::config::DemoConfig;
use crate::controller::ColorController;
use crate::palette::ColorChoice;
use crate::toolbar::{BarResponse, ButtonBar};

/// The desktop demo: canvas on top, button bar below.
pub struct DemoApp {
    config: DemoConfig,
    controller: ColorController,
    bar: ButtonBar,

    // Created in `init`, once the GPU exists.
    quad: Option<QuadRenderer>,
    panels: Option<PanelRenderer>,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        let bar = ButtonBar::new(config.toolbar_rect());
        Self {
            config,
            controller: ColorController::new(),
            bar,
            quad: None,
            panels: None,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn controller(&self) -> &ColorController {
        &self.controller
    }

    fn select(&mut self, choice: ColorChoice) -> AppControl {
        self.controller.apply(choice);
        AppControl::Redraw
    }
}

impl App for DemoApp {
    fn init(&mut self, ctx: &RenderCtx<'_>) -> Result<(), FatalError> {
        let program = QuadRenderer::default_program()?;
        self.quad = Some(QuadRenderer::new(ctx, &program)?);
        self.panels = Some(PanelRenderer::new(ctx)?);

        log::info!(
            "demo ready: canvas {}x{}, fill {:?}",
            self.config.canvas_width,
            self.config.canvas_height,
            self.controller.current().to_array()
        );
        Ok(())
    }

    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        if let InputEvent::Key { key, state: KeyState::Pressed, repeat: false } = event {
            if *key == Key::Escape {
                return AppControl::Exit;
            }
            if let Some(choice) = ColorChoice::from_key(*key) {
                return self.select(choice);
            }
        }

        match self.bar.handle(event) {
            BarResponse::Clicked(choice) => self.select(choice),
            BarResponse::Repaint => AppControl::Redraw,
            BarResponse::Ignored => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (Some(quad), Some(panels)) = (self.quad.as_ref(), self.panels.as_mut()) else {
            return AppControl::Continue;
        };

        let color = self.controller.current();
        let canvas = self.config.canvas_rect();
        let bar = self.bar.panels();

        ctx.render(self.config.clear_color, |rctx, target| {
            panels.render(rctx, target, &bar);
            quad.draw(rctx, target, Some(canvas), color);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tintquad_engine::input::{MouseButton, MouseButtonState, PointerButtonEvent};
    use tintquad_engine::paint::Color;

    fn key(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    fn click(app: &mut DemoApp, choice: ColorChoice) -> AppControl {
        let r = app.bar.rect_of(choice);
        let (x, y) = (r.origin.x + 1.0, r.origin.y + 1.0);
        let ev = |state| {
            InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y })
        };
        app.on_input(&ev(MouseButtonState::Pressed));
        app.on_input(&ev(MouseButtonState::Released))
    }

    #[test]
    fn clicking_buttons_sets_fill_and_redraws() {
        let mut app = DemoApp::new(DemoConfig::default());
        assert_eq!(app.controller().current(), Color::RED);

        assert_eq!(click(&mut app, ColorChoice::Green), AppControl::Redraw);
        assert_eq!(app.controller().current(), Color::GREEN);

        assert_eq!(click(&mut app, ColorChoice::Blue), AppControl::Redraw);
        assert_eq!(app.controller().current(), Color::BLUE);

        assert_eq!(click(&mut app, ColorChoice::Reset), AppControl::Redraw);
        assert_eq!(app.controller().current(), Color::RED);
    }

    #[test]
    fn shortcuts_select_colors() {
        let mut app = DemoApp::new(DemoConfig::default());

        assert_eq!(app.on_input(&key(Key::Digit3)), AppControl::Redraw);
        assert_eq!(app.controller().current(), Color::BLUE);
        assert_eq!(app.on_input(&key(Key::R)), AppControl::Redraw);
        assert_eq!(app.controller().current(), Color::RED);
    }

    #[test]
    fn key_repeat_and_release_are_ignored() {
        let mut app = DemoApp::new(DemoConfig::default());

        let repeat = InputEvent::Key { key: Key::Digit2, state: KeyState::Pressed, repeat: true };
        let release = InputEvent::Key { key: Key::Digit2, state: KeyState::Released, repeat: false };
        assert_eq!(app.on_input(&repeat), AppControl::Continue);
        assert_eq!(app.on_input(&release), AppControl::Continue);
        assert_eq!(app.controller().current(), Color::RED);
    }

    #[test]
    fn escape_exits() {
        let mut app = DemoApp::new(DemoConfig::default());
        assert_eq!(app.on_input(&key(Key::Escape)), AppControl::Exit);
    }

    #[test]
    fn clicks_on_canvas_do_nothing() {
        let mut app = DemoApp::new(DemoConfig::default());
        let ev = |state| {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                x: 320.0,
                y: 240.0,
            })
        };
        assert_eq!(app.on_input(&ev(MouseButtonState::Pressed)), AppControl::Continue);
        assert_eq!(app.on_input(&ev(MouseButtonState::Released)), AppControl::Continue);
        assert_eq!(app.controller().current(), Color::RED);
    }
}
