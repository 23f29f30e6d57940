//! Scene graph: one unlit box mesh viewed through one perspective camera.
//!
//! # Invariants
//! - Nodes are only ever added; nothing in the scene is destroyed.
//! - Mesh transforms are never mutated after assembly.
//! - Only camera controls mutate the camera.

mod camera;
mod demo;
mod geometry;
mod scene;

pub use camera::PerspectiveCamera;
pub use demo::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CUBE_COLOR, CUBE_SEGMENTS,
    DemoScene,
};
pub use geometry::{BoxGeometry, GeometryData};
pub use scene::{Mesh, MeshBasicMaterial, Node, NodeId, Scene, SceneError};
