use crate::camera::PerspectiveCamera;
use crate::geometry::BoxGeometry;
use crate::scene::{Mesh, MeshBasicMaterial, NodeId, Scene, SceneError};
use glam::Vec3;
use orbitcube_common::{Color, Viewport};

/// Cube surface color (sRGB).
pub const CUBE_COLOR: u32 = 0x18b533;
/// Subdivisions per cube axis.
pub const CUBE_SEGMENTS: u32 = 5;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
/// Distance from the cube along +Z at which the camera starts.
pub const CAMERA_DISTANCE: f32 = 3.0;

/// The demo's fixed scene: one cube and the camera looking at it.
#[derive(Debug, Clone)]
pub struct DemoScene {
    pub scene: Scene,
    pub mesh: NodeId,
    pub camera: NodeId,
}

impl DemoScene {
    /// Build the cube and camera for a surface of the given size.
    pub fn assemble(viewport: Viewport) -> Self {
        let mut scene = Scene::new();

        let mesh = Mesh::new(
            BoxGeometry::new(1.0, 1.0, 1.0).with_segments(
                CUBE_SEGMENTS,
                CUBE_SEGMENTS,
                CUBE_SEGMENTS,
            ),
            MeshBasicMaterial {
                color: Color::from_hex(CUBE_COLOR),
            },
        );
        let origin = mesh.transform.position;
        let mesh = scene.add_mesh(mesh);

        let mut camera = PerspectiveCamera::new(
            CAMERA_FOV_DEGREES,
            viewport.aspect(),
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        camera.position = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
        camera.look_at(origin);
        let camera = scene.add_camera(camera);

        tracing::info!(
            "scene assembled: {} mesh(es), camera at {:?}",
            scene.mesh_count(),
            Vec3::new(0.0, 0.0, CAMERA_DISTANCE)
        );

        Self {
            scene,
            mesh,
            camera,
        }
    }

    pub fn mesh(&self) -> Result<&Mesh, SceneError> {
        self.scene.mesh(self.mesh)
    }

    pub fn camera(&self) -> Result<&PerspectiveCamera, SceneError> {
        self.scene.camera(self.camera)
    }

    pub fn camera_mut(&mut self) -> Result<&mut PerspectiveCamera, SceneError> {
        self.scene.camera_mut(self.camera)
    }
}
