use orbitcube_common::Viewport;
use serde::{Deserialize, Serialize};

/// Pointer position normalized to `[-0.5, 0.5]`, y pointing up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

/// Records the latest pointer position over the window.
///
/// The value is traced but not consumed by the render loop.
#[derive(Debug, Clone)]
pub struct CursorTracker {
    viewport: Viewport,
    cursor: Cursor,
}

impl CursorTracker {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cursor: Cursor::default(),
        }
    }

    /// Overwrite the cursor from a pointer-move at screen position
    /// (`client_x`, `client_y`).
    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) -> Cursor {
        let n = self.viewport.normalize(client_x, client_y);
        self.cursor = Cursor { x: n.x, y: n.y };
        tracing::debug!("cursor {:.3} {:.3}", self.cursor.x, self.cursor.y);
        self.cursor
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}
