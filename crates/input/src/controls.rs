use orbitcube_scene::PerspectiveCamera;

/// A camera control scheme advanced once per rendered frame.
pub trait CameraControls {
    /// Integrate pending motion into the camera. Returns `true` if it moved.
    fn update(&mut self, camera: &mut PerspectiveCamera) -> bool;
}
