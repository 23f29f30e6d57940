use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective-projection camera that always faces its `target`.
///
/// Camera motion lives outside the scene's immutability guarantee: controls
/// are free to move `position` and `target` every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub up: Vec3,
    pub target: Vec3,
}

impl PerspectiveCamera {
    /// Camera at the origin looking down -Z.
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_degrees,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            up: Vec3::Y,
            target: Vec3::NEG_Z,
        }
    }

    /// Orient the camera towards `point`.
    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn forward(&self) -> Vec3 {
        let f = (self.target - self.position).normalize_or_zero();
        if f == Vec3::ZERO { Vec3::NEG_Z } else { f }
    }

    /// Screen-right direction in world space.
    pub fn right(&self) -> Vec3 {
        let r = self.forward().cross(self.up).normalize_or_zero();
        if r == Vec3::ZERO { Vec3::X } else { r }
    }

    /// Screen-up direction in world space, orthogonal to `forward` and `right`.
    pub fn screen_up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_faces_target() {
        let mut cam = PerspectiveCamera::new(75.0, 800.0 / 600.0, 1.0, 1000.0);
        cam.position = Vec3::new(0.0, 0.0, 3.0);
        cam.look_at(Vec3::ZERO);
        assert!((cam.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((cam.distance_to_target() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let mut cam = PerspectiveCamera::new(75.0, 1.5, 1.0, 1000.0);
        cam.position = Vec3::new(2.0, 1.0, 3.0);
        cam.look_at(Vec3::ZERO);
        let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn basis_is_orthonormal() {
        let mut cam = PerspectiveCamera::new(60.0, 1.0, 0.1, 100.0);
        cam.position = Vec3::new(1.0, 2.0, 3.0);
        cam.look_at(Vec3::new(-1.0, 0.0, 0.5));
        let (f, r, u) = (cam.forward(), cam.right(), cam.screen_up());
        assert!(f.dot(r).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!((u.length() - 1.0).abs() < 1e-5);
        assert!(u.y > 0.0);
    }

    #[test]
    fn degenerate_target_falls_back() {
        let mut cam = PerspectiveCamera::new(60.0, 1.0, 0.1, 100.0);
        cam.look_at(cam.position);
        assert_eq!(cam.forward(), Vec3::NEG_Z);
        assert!(!cam.view_matrix().col(0).x.is_nan());
    }
}
