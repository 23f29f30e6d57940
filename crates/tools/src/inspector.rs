use orbitcube_scene::{DemoScene, NodeId, Scene, SceneError};
use serde::Serialize;

/// Scene inspector for developer tooling.
///
/// Provides read-only queries against the scene for debugging and the CLI.
pub struct SceneInspector;

impl SceneInspector {
    /// Produce a summary of the demo scene and its camera.
    pub fn summary(demo: &DemoScene) -> Result<SceneSummary, SceneError> {
        let camera = demo.camera()?;
        let p = camera.position;
        Ok(SceneSummary {
            nodes: demo.scene.node_count(),
            meshes: demo.scene.mesh_count(),
            cameras: demo.scene.camera_count(),
            camera_position: [p.x, p.y, p.z],
            camera_distance: camera.distance_to_target(),
            fov_degrees: camera.fov_degrees,
            aspect: camera.aspect,
        })
    }

    /// Describe a single mesh node.
    pub fn inspect_mesh(scene: &Scene, id: NodeId) -> Result<MeshInfo, SceneError> {
        let mesh = scene.mesh(id)?;
        let g = &mesh.geometry;
        let data = g.build();
        let p = mesh.transform.position;
        let c = mesh.material.color;
        Ok(MeshInfo {
            id: id.0,
            size: [g.width, g.height, g.depth],
            segments: [g.width_segments, g.height_segments, g.depth_segments],
            vertices: data.vertex_count(),
            triangles: data.triangle_count(),
            position: [p.x, p.y, p.z],
            color: [c.r, c.g, c.b],
        })
    }
}

/// Summary of scene state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub nodes: usize,
    pub meshes: usize,
    pub cameras: usize,
    pub camera_position: [f32; 3],
    pub camera_distance: f32,
    pub fov_degrees: f32,
    pub aspect: f32,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene: meshes={} cameras={} camera=({:.2}, {:.2}, {:.2}) distance={:.2} fov={:.0} aspect={:.3}",
            self.meshes,
            self.cameras,
            self.camera_position[0],
            self.camera_position[1],
            self.camera_position[2],
            self.camera_distance,
            self.fov_degrees,
            self.aspect,
        )
    }
}

/// Detailed info about a single mesh.
#[derive(Debug, Clone, Serialize)]
pub struct MeshInfo {
    pub id: u32,
    pub size: [f32; 3],
    pub segments: [u32; 3],
    pub vertices: usize,
    pub triangles: usize,
    pub position: [f32; 3],
    /// Linear RGB.
    pub color: [f32; 3],
}

impl std::fmt::Display for MeshInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mesh [#{}] box {}x{}x{} segments={}x{}x{} vertices={} triangles={} pos=({:.2}, {:.2}, {:.2})",
            self.id,
            self.size[0],
            self.size[1],
            self.size[2],
            self.segments[0],
            self.segments[1],
            self.segments[2],
            self.vertices,
            self.triangles,
            self.position[0],
            self.position[1],
            self.position[2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitcube_common::Viewport;

    #[test]
    fn summary_of_demo_scene() {
        let demo = DemoScene::assemble(Viewport::DEMO);
        let summary = SceneInspector::summary(&demo).unwrap();
        assert_eq!(summary.meshes, 1);
        assert_eq!(summary.cameras, 1);
        assert_eq!(summary.camera_position, [0.0, 0.0, 3.0]);
        assert!((summary.camera_distance - 3.0).abs() < 1e-6);
    }

    #[test]
    fn inspect_demo_mesh() {
        let demo = DemoScene::assemble(Viewport::DEMO);
        let info = SceneInspector::inspect_mesh(&demo.scene, demo.mesh).unwrap();
        assert_eq!(info.segments, [5, 5, 5]);
        assert_eq!(info.vertices, 216);
        assert_eq!(info.triangles, 300);
        assert_eq!(info.position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn inspect_camera_as_mesh_fails() {
        let demo = DemoScene::assemble(Viewport::DEMO);
        assert!(SceneInspector::inspect_mesh(&demo.scene, demo.camera).is_err());
    }

    #[test]
    fn summary_display() {
        let demo = DemoScene::assemble(Viewport::DEMO);
        let s = format!("{}", SceneInspector::summary(&demo).unwrap());
        assert!(s.contains("meshes=1"));
        assert!(s.contains("aspect=1.333"));
    }
}
