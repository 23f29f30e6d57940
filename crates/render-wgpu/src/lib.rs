//! wgpu render backend for the orbitcube demo.
//!
//! Draws every scene mesh with a flat, unlit color through a perspective camera.
//!
//! # Invariants
//! - Renderer never mutates scene state.
//! - Mesh geometry is uploaded once; per-frame work is uniform writes and one pass.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, GpuError};
pub use gpu::WgpuRenderer;
