use glam::Vec2;

/// A camera-control intent produced from pointer gestures.
///
/// Controls consume actions, never raw input events, so any host (winit,
/// headless simulation, tests) can drive them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Orbit around the target by a pointer delta in pixels.
    Rotate(Vec2),
    /// Slide the camera and target by a pointer delta in pixels.
    Pan(Vec2),
    /// Move towards (positive) or away from (negative) the target, in wheel steps.
    Dolly(f32),
    /// No-op (pointer moved with no button held).
    Noop,
}

impl Action {
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }
}
