use orbitcube_scene::{PerspectiveCamera, Scene};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// One call is one draw: the scene seen through `camera`, produced
/// synchronously. The renderer reads the scene and never mutates it.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Draw one frame of `scene` through `camera`.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Self::Output;
}

/// Text renderer for headless runs and logs.
///
/// Produces a human-readable description of what a frame would show.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    draws: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> String {
        self.draws += 1;

        let mut out = String::new();
        out.push_str(&format!("=== Frame (draw={}) ===\n", self.draws));
        out.push_str(&format!("Meshes: {}\n", scene.mesh_count()));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0} aspect={:.3}\n",
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.target.x,
            camera.target.y,
            camera.target.z,
            camera.fov_degrees,
            camera.aspect,
        ));

        for (id, mesh) in scene.meshes() {
            let g = &mesh.geometry;
            let p = mesh.transform.position;
            out.push_str(&format!(
                "  [{id}] box {}x{}x{} segments={}x{}x{} pos=({:.2}, {:.2}, {:.2})\n",
                g.width,
                g.height,
                g.depth,
                g.width_segments,
                g.height_segments,
                g.depth_segments,
                p.x,
                p.y,
                p.z
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitcube_common::Viewport;
    use orbitcube_scene::DemoScene;

    #[test]
    fn debug_renderer_empty_scene() {
        let scene = Scene::new();
        let camera = PerspectiveCamera::new(60.0, 1.0, 0.1, 100.0);
        let mut renderer = DebugTextRenderer::new();
        let output = renderer.render(&scene, &camera);

        assert!(output.contains("draw=1"));
        assert!(output.contains("Meshes: 0"));
    }

    #[test]
    fn debug_renderer_demo_scene() {
        let demo = DemoScene::assemble(Viewport::DEMO);
        let camera = *demo.camera().unwrap();
        let mut renderer = DebugTextRenderer::new();
        renderer.render(&demo.scene, &camera);
        let output = renderer.render(&demo.scene, &camera);

        assert_eq!(renderer.draws(), 2);
        assert!(output.contains("Meshes: 1"));
        assert!(output.contains("segments=5x5x5"));
        assert!(output.contains("eye=(0.00, 0.00, 3.00)"));
        assert!(output.contains("fov=75"));
    }
}
