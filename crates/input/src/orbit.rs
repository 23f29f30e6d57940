use crate::action::Action;
use crate::controls::CameraControls;
use glam::{Vec2, Vec3};
use orbitcube_common::Viewport;
use orbitcube_scene::PerspectiveCamera;
use std::f32::consts::{PI, TAU};

const EPS: f32 = 1e-6;
/// Closest the camera may get to the target, whatever `min_distance` says.
const MIN_RADIUS: f32 = EPS;

/// Spherical coordinates of the camera relative to the orbit target.
/// `phi` is the polar angle from +Y, `theta` the azimuth around Y from +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    phi: f32,
    theta: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

/// Orbits a camera around a target point.
///
/// Gestures only accumulate pending motion; [`CameraControls::update`] must
/// run once per frame to apply it. With damping enabled each update applies
/// `damping_factor` of the pending rotation and pan and lets the remainder
/// decay, so motion eases out over subsequent frames after input stops.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub enabled: bool,
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians from +Y.
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    viewport: Viewport,
    /// Pending (theta, phi) rotation.
    rotate_delta: Vec2,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitControls {
    /// Controls orbiting `target`, with pointer deltas measured against `viewport`.
    pub fn new(target: Vec3, viewport: Viewport) -> Self {
        Self {
            enabled: true,
            target,
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            viewport,
            rotate_delta: Vec2::ZERO,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn with_damping(mut self, factor: f32) -> Self {
        self.enable_damping = true;
        self.damping_factor = factor.clamp(EPS, 1.0);
        self
    }

    /// Queue the motion for `action`. The camera is read for pan direction
    /// and distance but not moved.
    pub fn apply(&mut self, action: Action, camera: &PerspectiveCamera) {
        if !self.enabled {
            return;
        }
        match action {
            Action::Rotate(delta) => self.rotate(delta),
            Action::Pan(delta) => self.pan(delta, camera),
            Action::Dolly(steps) => self.dolly(steps),
            Action::Noop => {}
        }
    }

    /// True while rotation, pan or zoom is still waiting to be integrated.
    pub fn has_pending_motion(&self) -> bool {
        self.rotate_delta.length_squared() > EPS * EPS
            || self.pan_offset.length_squared() > EPS * EPS
            || (self.scale - 1.0).abs() > EPS
    }

    fn screen_height(&self) -> f32 {
        self.viewport.height.max(1) as f32
    }

    fn rotate(&mut self, delta: Vec2) {
        let h = self.screen_height();
        let delta = delta * self.rotate_speed;
        // Horizontal and vertical both scale by height so a full-height drag
        // is one full turn either way.
        self.rotate_delta.x -= TAU * delta.x / h;
        self.rotate_delta.y -= TAU * delta.y / h;
    }

    fn pan(&mut self, delta: Vec2, camera: &PerspectiveCamera) {
        let h = self.screen_height();
        let offset = camera.position - self.target;
        // Half the visible height at the target's depth.
        let target_distance = offset.length() * (camera.fov_degrees.to_radians() / 2.0).tan();
        let delta = delta * self.pan_speed;
        let left = 2.0 * delta.x * target_distance / h;
        let up = 2.0 * delta.y * target_distance / h;
        self.pan_offset += camera.right() * -left + camera.screen_up() * up;
    }

    fn dolly(&mut self, steps: f32) {
        let zoom_scale = 0.95_f32.powf(self.zoom_speed);
        self.scale *= zoom_scale.powf(steps);
    }

    fn reset_pending(&mut self) {
        self.rotate_delta = Vec2::ZERO;
        self.pan_offset = Vec3::ZERO;
    }
}

impl CameraControls for OrbitControls {
    fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let mut spherical = Spherical::from_offset(camera.position - self.target);

        let step = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        spherical.theta += self.rotate_delta.x * step;
        spherical.phi += self.rotate_delta.y * step;
        spherical.phi = spherical
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(EPS, PI - EPS);

        let min_distance = self.min_distance.max(MIN_RADIUS);
        spherical.radius = (spherical.radius * self.scale)
            .clamp(min_distance, self.max_distance.max(min_distance));

        let old_target = self.target;
        self.target += self.pan_offset * step;

        let position = self.target + spherical.to_offset();
        let moved = position.distance_squared(camera.position) > EPS
            || self.target.distance_squared(old_target) > EPS;
        camera.position = position;
        camera.look_at(self.target);

        if self.enable_damping {
            self.rotate_delta *= 1.0 - self.damping_factor;
            self.pan_offset *= 1.0 - self.damping_factor;
        } else {
            self.reset_pending();
        }
        self.scale = 1.0;

        moved
    }
}
