//! Native on-screen button bar.
//!
//! Four buttons laid out left to right under the canvas. A button fires when
//! the primary button is pressed and released over it; releasing anywhere
//! else cancels the click.

use tintquad_engine::coords::{Rect, Vec2};
use tintquad_engine::input::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};
use tintquad_engine::paint::Color;
use tintquad_engine::render::Panel;

use crate::palette::{ColorChoice, DEFAULT_COLOR};

const PADDING: f32 = 10.0;
const GAP: f32 = 10.0;
const FRAME: f32 = 3.0;

/// Outcome of feeding an event to the bar.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BarResponse {
    Ignored,
    /// Hover or press state changed.
    Repaint,
    Clicked(ColorChoice),
}

#[derive(Debug, Clone)]
pub struct ButtonBar {
    bounds: Rect,
    buttons: [(ColorChoice, Rect); 4],
    hovered: Option<ColorChoice>,
    pressed: Option<ColorChoice>,
}

impl ButtonBar {
    pub fn new(bounds: Rect) -> Self {
        let inner = bounds.inset(PADDING);
        let count = ColorChoice::ALL.len() as f32;
        let width = ((inner.size.x - GAP * (count - 1.0)) / count).max(0.0);

        let mut x = inner.origin.x;
        let buttons = ColorChoice::ALL.map(|choice| {
            let rect = Rect::new(x, inner.origin.y, width, inner.size.y);
            x += width + GAP;
            (choice, rect)
        });

        Self {
            bounds,
            buttons,
            hovered: None,
            pressed: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn rect_of(&self, choice: ColorChoice) -> Rect {
        self.buttons
            .iter()
            .find(|(c, _)| *c == choice)
            .map(|(_, r)| *r)
            .unwrap_or_default()
    }

    pub fn hit_test(&self, pos: Vec2) -> Option<ColorChoice> {
        self.buttons
            .iter()
            .find(|(_, r)| r.contains(pos))
            .map(|(c, _)| *c)
    }

    pub fn hovered(&self) -> Option<ColorChoice> {
        self.hovered
    }

    pub fn pressed(&self) -> Option<ColorChoice> {
        self.pressed
    }

    pub fn handle(&mut self, event: &InputEvent) -> BarResponse {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.set_hovered(self.hit_test(Vec2::new(*x, *y)))
            }

            InputEvent::PointerLeft => self.set_hovered(None),

            InputEvent::Focused(false) => {
                if self.pressed.take().is_some() {
                    BarResponse::Repaint
                } else {
                    BarResponse::Ignored
                }
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                x,
                y,
            }) => {
                let under = self.hit_test(Vec2::new(*x, *y));
                self.hovered = under;

                match state {
                    MouseButtonState::Pressed => {
                        self.pressed = under;
                        if under.is_some() {
                            BarResponse::Repaint
                        } else {
                            BarResponse::Ignored
                        }
                    }
                    MouseButtonState::Released => match self.pressed.take() {
                        Some(target) if Some(target) == under => BarResponse::Clicked(target),
                        Some(_) => BarResponse::Repaint,
                        None => BarResponse::Ignored,
                    },
                }
            }

            _ => BarResponse::Ignored,
        }
    }

    fn set_hovered(&mut self, hovered: Option<ColorChoice>) -> BarResponse {
        if self.hovered == hovered {
            return BarResponse::Ignored;
        }
        self.hovered = hovered;
        BarResponse::Repaint
    }

    /// Panels for the bar background and every button, back to front.
    pub fn panels(&self) -> Vec<Panel> {
        let background = Color::from_rgb_u8(0x20, 0x22, 0x26);
        let neutral = Color::from_rgb_u8(0x70, 0x74, 0x7a);

        let mut out = Vec::with_capacity(1 + self.buttons.len() * 3);
        out.push(Panel::new(self.bounds, background));

        for (choice, rect) in self.buttons {
            out.push(Panel::new(rect, self.frame_color(choice)));

            let swatch = rect.inset(FRAME);
            match choice {
                ColorChoice::Reset => {
                    out.push(Panel::new(swatch, neutral));
                    out.push(Panel::new(swatch.inset(FRAME * 3.0), DEFAULT_COLOR));
                }
                _ => out.push(Panel::new(swatch, choice.color())),
            }
        }

        out
    }

    fn frame_color(&self, choice: ColorChoice) -> Color {
        let base = Color::from_rgb_u8(0x3a, 0x3d, 0x44);
        if self.pressed == Some(choice) && self.hovered == Some(choice) {
            base.lighten(0.6)
        } else if self.hovered == Some(choice) {
            base.lighten(0.3)
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> ButtonBar {
        ButtonBar::new(Rect::new(0.0, 480.0, 640.0, 64.0))
    }

    fn center(bar: &ButtonBar, choice: ColorChoice) -> (f32, f32) {
        let r = bar.rect_of(choice);
        (r.origin.x + r.size.x * 0.5, r.origin.y + r.size.y * 0.5)
    }

    fn left(state: MouseButtonState, (x, y): (f32, f32)) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y })
    }

    #[test]
    fn buttons_are_laid_out_left_to_right_inside_bounds() {
        let bar = bar();
        let rects: Vec<Rect> = ColorChoice::ALL.iter().map(|c| bar.rect_of(*c)).collect();

        for pair in rects.windows(2) {
            assert!(pair[0].max().x <= pair[1].origin.x);
        }
        for r in &rects {
            assert!(!r.is_empty());
            assert!(r.origin.y >= bar.bounds().origin.y);
            assert!(r.max().y <= bar.bounds().max().y);
        }
    }

    #[test]
    fn hit_test_finds_each_button() {
        let bar = bar();
        for choice in ColorChoice::ALL {
            let (x, y) = center(&bar, choice);
            assert_eq!(bar.hit_test(Vec2::new(x, y)), Some(choice));
        }
        assert_eq!(bar.hit_test(Vec2::new(320.0, 100.0)), None);
    }

    #[test]
    fn press_and_release_on_same_button_clicks() {
        let mut bar = bar();
        let at = center(&bar, ColorChoice::Blue);

        assert_eq!(bar.handle(&left(MouseButtonState::Pressed, at)), BarResponse::Repaint);
        assert_eq!(bar.pressed(), Some(ColorChoice::Blue));
        assert_eq!(
            bar.handle(&left(MouseButtonState::Released, at)),
            BarResponse::Clicked(ColorChoice::Blue)
        );
        assert_eq!(bar.pressed(), None);
    }

    #[test]
    fn release_elsewhere_cancels() {
        let mut bar = bar();
        bar.handle(&left(MouseButtonState::Pressed, center(&bar, ColorChoice::Red)));
        let other = center(&bar, ColorChoice::Green);
        assert_eq!(bar.handle(&left(MouseButtonState::Released, other)), BarResponse::Repaint);

        bar.handle(&left(MouseButtonState::Pressed, center(&bar, ColorChoice::Red)));
        assert_eq!(
            bar.handle(&left(MouseButtonState::Released, (320.0, 10.0))),
            BarResponse::Repaint
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut bar = bar();
        let at = center(&bar, ColorChoice::Reset);
        assert_eq!(bar.handle(&left(MouseButtonState::Released, at)), BarResponse::Ignored);
    }

    #[test]
    fn secondary_button_does_not_click() {
        let mut bar = bar();
        let (x, y) = center(&bar, ColorChoice::Green);
        let ev = |state| {
            InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Right, state, x, y })
        };
        assert_eq!(bar.handle(&ev(MouseButtonState::Pressed)), BarResponse::Ignored);
        assert_eq!(bar.handle(&ev(MouseButtonState::Released)), BarResponse::Ignored);
    }

    #[test]
    fn hover_changes_request_repaint_once() {
        let mut bar = bar();
        let (x, y) = center(&bar, ColorChoice::Green);

        assert_eq!(bar.handle(&InputEvent::PointerMoved { x, y }), BarResponse::Repaint);
        assert_eq!(bar.handle(&InputEvent::PointerMoved { x: x + 1.0, y }), BarResponse::Ignored);
        assert_eq!(bar.hovered(), Some(ColorChoice::Green));
        assert_eq!(bar.handle(&InputEvent::PointerLeft), BarResponse::Repaint);
        assert_eq!(bar.hovered(), None);
    }

    #[test]
    fn focus_loss_drops_pending_press() {
        let mut bar = bar();
        let at = center(&bar, ColorChoice::Red);
        bar.handle(&left(MouseButtonState::Pressed, at));
        assert_eq!(bar.handle(&InputEvent::Focused(false)), BarResponse::Repaint);
        assert_eq!(bar.handle(&left(MouseButtonState::Released, at)), BarResponse::Ignored);
    }

    #[test]
    fn panels_show_each_swatch() {
        let bar = bar();
        let panels = bar.panels();

        assert_eq!(panels[0].rect, bar.bounds());
        for choice in [ColorChoice::Red, ColorChoice::Green, ColorChoice::Blue] {
            assert!(panels.iter().any(|p| p.color == choice.color()
                && p.rect == bar.rect_of(choice).inset(FRAME)));
        }
        let reset = bar.rect_of(ColorChoice::Reset).inset(FRAME).inset(FRAME * 3.0);
        assert!(panels.iter().any(|p| p.rect == reset && p.color == DEFAULT_COLOR));
    }

    #[test]
    fn hovered_frame_is_lighter() {
        let mut bar = bar();
        let idle = bar.frame_color(ColorChoice::Blue);
        let (x, y) = center(&bar, ColorChoice::Blue);
        bar.handle(&InputEvent::PointerMoved { x, y });
        let hovered = bar.frame_color(ColorChoice::Blue);
        bar.handle(&left(MouseButtonState::Pressed, (x, y)));
        let pressed = bar.frame_color(ColorChoice::Blue);

        assert!(hovered.r() > idle.r());
        assert!(pressed.r() > hovered.r());
    }
}
