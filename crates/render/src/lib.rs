//! Rendering adapter and render loop.
//!
//! # Invariants
//! - Renderers never mutate the scene.
//! - One loop iteration is: read clock, update controls, draw once, schedule
//!   once. Nothing is batched or skipped.
//! - The loop owns no host scheduling primitive; the host re-invokes
//!   [`FrameLoop::tick`] once per display refresh after it asks for a frame.

mod clock;
mod frame_loop;
mod renderer;

pub use clock::Clock;
pub use frame_loop::{FrameLoop, FrameReport, FrameScheduler, ManualScheduler};
pub use renderer::{DebugTextRenderer, Renderer};
