use crate::action::Action;
use glam::Vec2;

/// Host-independent mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Turns button presses and pointer motion into control actions.
///
/// Primary drag rotates, secondary drag pans, middle drag dollies.
/// When several buttons are held the first one pressed wins.
#[derive(Debug, Clone, Default)]
pub struct PointerGestures {
    active: Option<PointerButton>,
    last: Option<Vec2>,
}

/// Pixels per wheel step when the host reports scrolling in pixels.
const PIXELS_PER_LINE: f32 = 50.0;

impl PointerGestures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: PointerButton) {
        if self.active.is_none() {
            self.active = Some(button);
        }
    }

    pub fn release(&mut self, button: PointerButton) {
        if self.active == Some(button) {
            self.active = None;
        }
    }

    pub fn active(&self) -> Option<PointerButton> {
        self.active
    }

    /// Pointer moved to (`x`, `y`) in screen pixels.
    pub fn moved(&mut self, x: f32, y: f32) -> Action {
        let pos = Vec2::new(x, y);
        let delta = match self.last.replace(pos) {
            Some(last) => pos - last,
            None => return Action::Noop,
        };
        if delta == Vec2::ZERO {
            return Action::Noop;
        }
        match self.active {
            Some(PointerButton::Primary) => Action::Rotate(delta),
            Some(PointerButton::Secondary) => Action::Pan(delta),
            Some(PointerButton::Middle) if delta.y < 0.0 => Action::Dolly(1.0),
            Some(PointerButton::Middle) if delta.y > 0.0 => Action::Dolly(-1.0),
            _ => Action::Noop,
        }
    }

    /// Wheel scrolled by `lines`; positive scrolls away from the user.
    pub fn wheel(&self, lines: f32) -> Action {
        if lines == 0.0 {
            Action::Noop
        } else {
            Action::Dolly(lines)
        }
    }

    /// Wheel scrolled by a pixel amount, as reported by touchpads.
    pub fn wheel_pixels(&self, pixels: f32) -> Action {
        self.wheel(pixels / PIXELS_PER_LINE)
    }

    /// Pointer left the window: the next motion starts a fresh delta.
    pub fn left(&mut self) {
        self.last = None;
    }
}
