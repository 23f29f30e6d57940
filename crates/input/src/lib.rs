//! Pointer input mapped to camera control actions.
//!
//! # Invariants
//! - Controls consume [`Action`]s, never raw window events.
//! - The tracked cursor is write-only state: nothing downstream reads it.
//! - Controls only ever mutate the camera, never scene meshes.

pub mod action;
pub mod controls;
pub mod cursor;
pub mod gesture;
pub mod orbit;

pub use action::Action;
pub use controls::CameraControls;
pub use cursor::{Cursor, CursorTracker};
pub use gesture::{PointerButton, PointerGestures};
pub use orbit::OrbitControls;
