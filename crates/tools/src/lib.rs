//! Developer tooling: read-only scene inspection.
//!
//! # Invariants
//! - Inspection never mutates the scene.

mod inspector;

pub use inspector::{MeshInfo, SceneInspector, SceneSummary};

pub fn crate_info() -> &'static str {
    concat!("orbitcube-tools v", env!("CARGO_PKG_VERSION"))
}
