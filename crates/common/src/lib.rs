//! Shared value types for the orbitcube demo.
//!
//! # Invariants
//! - Types are plain values: `Copy`, serializable, free of rendering state.

mod types;

pub use types::{Color, Transform, Viewport};
